//! Non-negative integers of any width

use std::cmp::Ordering;
use std::fmt;

/// A non-negative integer kept as its canonical decimal digits.
///
/// Ordering never depends on a machine integer width: a longer digit string is
/// the larger number, equal lengths compare byte by byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    pub fn zero() -> Self {
        Number("0".to_string())
    }

    /// Build from ASCII digits, dropping leading zeros.
    /// Returns `None` for an empty string or any non-digit.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Number::zero())
        } else {
            Some(Number(trimmed.to_string()))
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// The canonical decimal rendering
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as a `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for Number {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number(value.to_string())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(digits: &str) -> Number {
        Number::from_digits(digits).unwrap()
    }

    #[test]
    fn test_from_digits() {
        assert_eq!(number("42").as_str(), "42");
        assert_eq!(number("007").as_str(), "7");
        assert_eq!(number("000"), Number::zero());
        assert_eq!(Number::from_digits(""), None);
        assert_eq!(Number::from_digits("1a"), None);
        assert_eq!(Number::from_digits("+1"), None);
    }

    #[test]
    fn test_ordering_beyond_u64() {
        assert!(number("99999999999999999999") < number("100000000000000000000"));
        assert!(number("99999999999999999999") > number("99999999999999999998"));
        assert!(number("18446744073709551616") > Number::from(u64::MAX));
        assert!(number("9") < number("10"));
        assert_eq!(number("12").cmp(&number("12")), Ordering::Equal);
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(number("18446744073709551615").to_u64(), Some(u64::MAX));
        assert_eq!(number("18446744073709551616").to_u64(), None);
        assert!(number("5") == 5u64);
        assert!(number("0").is_zero());
    }
}
