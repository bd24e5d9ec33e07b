//! Named assertions against a version

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::comparator::compare;
use crate::operator::Operator;
use crate::version::{Version, VersionLike};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    #[error("unrecognized operator `{0}'")]
    InvalidOperator(String),
    #[error("operand of `{operator}' must be {}", expected_operand(.operator))]
    InvalidOperand { operator: Operator },
}

fn expected_operand(operator: &Operator) -> &'static str {
    if operator.is_range() {
        "a list containing at least two versions"
    } else {
        "a single version"
    }
}

/// Right-hand side of an assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Single(Version),
    List(Vec<Version>),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Single(version) => write!(f, "{}", version),
            Operand::List(versions) => {
                let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

impl From<Version> for Operand {
    fn from(version: Version) -> Self {
        Operand::Single(version)
    }
}

impl From<&Version> for Operand {
    fn from(version: &Version) -> Self {
        Operand::Single(version.clone())
    }
}

impl From<&str> for Operand {
    fn from(version: &str) -> Self {
        Operand::Single(Version::parse(version))
    }
}

impl From<String> for Operand {
    fn from(version: String) -> Self {
        Operand::Single(Version::parse(&version))
    }
}

impl<T: VersionLike> From<Vec<T>> for Operand {
    fn from(versions: Vec<T>) -> Self {
        Operand::from(versions.as_slice())
    }
}

impl<T: VersionLike> From<&[T]> for Operand {
    fn from(versions: &[T]) -> Self {
        Operand::List(versions.iter().map(|v| v.to_version().into_owned()).collect())
    }
}

impl<T: VersionLike, const N: usize> From<[T; N]> for Operand {
    fn from(versions: [T; N]) -> Self {
        Operand::from(versions.as_slice())
    }
}

impl From<&Operand> for Operand {
    fn from(operand: &Operand) -> Self {
        operand.clone()
    }
}

/// An ordered set of assertions, keyed by operator name
pub type Assertions = IndexMap<String, Operand>;

impl Version {
    /// Check every `(operator name, operand)` pair, in order.
    ///
    /// Returns `Ok(false)` at the first assertion that does not hold. An
    /// unknown operator name or a malformed operand is only reported once
    /// evaluation reaches it.
    pub fn satisfies<I, K, O>(&self, assertions: I) -> Result<bool, AssertionError>
    where
        I: IntoIterator<Item = (K, O)>,
        K: AsRef<str>,
        O: Into<Operand>,
    {
        for (name, operand) in assertions {
            let operator: Operator = name.as_ref().parse()?;
            let operand = operand.into();
            let holds = self.assert(operator, &operand)?;
            log::trace!("{} {} {} => {}", self, operator, operand, holds);
            if !holds {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluate a single assertion
    pub fn assert(&self, operator: Operator, operand: &Operand) -> Result<bool, AssertionError> {
        let invalid = || AssertionError::InvalidOperand { operator };

        match (operator, operand) {
            (Operator::Between, Operand::List(versions)) => match versions.as_slice() {
                [low, high, ..] => Ok(self.holds(Operator::GreaterThan, low)
                    && self.holds(Operator::LessThan, high)),
                _ => Err(invalid()),
            },
            (Operator::Within, Operand::List(versions)) => match versions.as_slice() {
                [low, high, ..] => Ok(self.holds(Operator::GreaterThanOrEqualTo, low)
                    && self.holds(Operator::LessThanOrEqualTo, high)),
                _ => Err(invalid()),
            },
            (Operator::AnyOf, Operand::List(versions)) if versions.len() >= 2 => {
                Ok(versions.iter().any(|v| self.holds(Operator::EqualTo, v)))
            }
            (operator, Operand::Single(other)) if !operator.is_range() => {
                Ok(self.holds(operator, other))
            }
            _ => Err(invalid()),
        }
    }

    fn holds(&self, operator: Operator, other: &Version) -> bool {
        operator.accepts(compare(self, other))
    }

    pub fn equal_to(&self, other: impl VersionLike) -> bool {
        self.holds(Operator::EqualTo, &other.to_version())
    }

    pub fn less_than(&self, other: impl VersionLike) -> bool {
        self.holds(Operator::LessThan, &other.to_version())
    }

    pub fn less_than_or_equal_to(&self, other: impl VersionLike) -> bool {
        self.holds(Operator::LessThanOrEqualTo, &other.to_version())
    }

    pub fn greater_than(&self, other: impl VersionLike) -> bool {
        self.holds(Operator::GreaterThan, &other.to_version())
    }

    pub fn greater_than_or_equal_to(&self, other: impl VersionLike) -> bool {
        self.holds(Operator::GreaterThanOrEqualTo, &other.to_version())
    }

    /// Strictly between `low` and `high`
    pub fn between(&self, low: impl VersionLike, high: impl VersionLike) -> bool {
        self.greater_than(low) && self.less_than(high)
    }

    /// Between `low` and `high`, both included
    pub fn within(&self, low: impl VersionLike, high: impl VersionLike) -> bool {
        self.greater_than_or_equal_to(low) && self.less_than_or_equal_to(high)
    }

    /// Equal to at least one of `candidates`
    pub fn any_of<I>(&self, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: VersionLike,
    {
        candidates.into_iter().any(|candidate| self.equal_to(candidate))
    }
}

/// Return all versions that satisfy every assertion, in their original order
pub fn satisfied_by(
    versions: &[&str],
    assertions: &Assertions,
) -> Result<Vec<String>, AssertionError> {
    let mut matching = Vec::new();
    for version in versions {
        if Version::parse(version).satisfies(assertions)? {
            matching.push(version.to_string());
        }
    }
    Ok(matching)
}
