//! Assertion operators

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::assertion::AssertionError;

/// Operators accepted by [`Version::satisfies`](crate::Version::satisfies)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `eq` / `equal_to`
    EqualTo,
    /// `lt` / `less_than`
    LessThan,
    /// `lte` / `less_than_or_equal_to`
    LessThanOrEqualTo,
    /// `gt` / `greater_than`
    GreaterThan,
    /// `gte` / `greater_than_or_equal_to`
    GreaterThanOrEqualTo,
    /// Open interval: `gt` the first operand and `lt` the second
    Between,
    /// Closed interval: `gte` the first operand and `lte` the second
    Within,
    /// `eq` any of the operands
    AnyOf,
}

impl Operator {
    /// Get the short name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::EqualTo => "eq",
            Operator::LessThan => "lt",
            Operator::LessThanOrEqualTo => "lte",
            Operator::GreaterThan => "gt",
            Operator::GreaterThanOrEqualTo => "gte",
            Operator::Between => "between",
            Operator::Within => "within",
            Operator::AnyOf => "any_of",
        }
    }

    /// Range operators take a list of at least two versions
    pub fn is_range(&self) -> bool {
        matches!(self, Operator::Between | Operator::Within | Operator::AnyOf)
    }

    /// Comparator results that make a single-version operator hold.
    /// Empty for range operators.
    pub fn accepted(&self) -> &'static [Ordering] {
        match self {
            Operator::EqualTo => &[Ordering::Equal],
            Operator::LessThan => &[Ordering::Less],
            Operator::LessThanOrEqualTo => &[Ordering::Less, Ordering::Equal],
            Operator::GreaterThan => &[Ordering::Greater],
            Operator::GreaterThanOrEqualTo => &[Ordering::Greater, Ordering::Equal],
            Operator::Between | Operator::Within | Operator::AnyOf => &[],
        }
    }

    pub fn accepts(&self, ordering: Ordering) -> bool {
        self.accepted().contains(&ordering)
    }

    /// Get all supported operator names
    pub fn supported_operators() -> &'static [&'static str] {
        &[
            "eq",
            "lt",
            "lte",
            "gt",
            "gte",
            "equal_to",
            "less_than",
            "less_than_or_equal_to",
            "greater_than",
            "greater_than_or_equal_to",
            "between",
            "within",
            "any_of",
        ]
    }
}

impl FromStr for Operator {
    type Err = AssertionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" | "equal_to" => Ok(Operator::EqualTo),
            "lt" | "less_than" => Ok(Operator::LessThan),
            "lte" | "less_than_or_equal_to" => Ok(Operator::LessThanOrEqualTo),
            "gt" | "greater_than" => Ok(Operator::GreaterThan),
            "gte" | "greater_than_or_equal_to" => Ok(Operator::GreaterThanOrEqualTo),
            "between" => Ok(Operator::Between),
            "within" => Ok(Operator::Within),
            "any_of" => Ok(Operator::AnyOf),
            _ => Err(AssertionError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
