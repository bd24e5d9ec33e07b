//! Prerelease identifiers

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::number::Number;

/// A dot-separated prerelease token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A token that is exactly the decimal rendering of an integer (`1`, `42`)
    Numeric(Number),
    /// Any other token (`alpha`, `rc-1`, `01`)
    Textual(String),
}

impl Identifier {
    /// Classify a raw token.
    ///
    /// A token is numeric only if rendering its integer value reproduces it
    /// exactly, so `01`, `+1` and `-1` stay textual.
    pub fn parse(token: &str) -> Self {
        match Number::from_digits(token) {
            Some(number) if number.as_str() == token => Identifier::Numeric(number),
            _ => Identifier::Textual(token.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// The token as written
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Identifier::Numeric(number) => Cow::Borrowed(number.as_str()),
            Identifier::Textual(text) => Cow::Borrowed(text),
        }
    }

    /// Precedence between two tokens.
    ///
    /// Tokens of the same kind compare natively. A numeric token against a
    /// textual one compares by their text, byte by byte.
    pub fn precedence(&self, other: &Identifier) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Textual(a), Identifier::Textual(b)) => a.cmp(b),
            (a, b) => a.as_text().cmp(&b.as_text()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(number) => write!(f, "{}", number),
            Identifier::Textual(text) => f.write_str(text),
        }
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::Numeric(Number::from(value))
    }
}

impl From<&str> for Identifier {
    fn from(token: &str) -> Self {
        Identifier::parse(token)
    }
}
