//! Version comparison

use std::cmp::Ordering;

use crate::assertion::AssertionError;
use crate::number::Number;
use crate::operator::Operator;
use crate::version::Version;

/// Three-way comparison of two versions.
///
/// Number components are compared position by position with missing ones
/// counting as `0`. On a tie a release ranks above any prerelease, then
/// prerelease identifiers are compared position by position, where the longer
/// list wins once the shorter runs out. Build metadata is never consulted.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    compare_numbers(a.number_components(), b.number_components())
        .then_with(|| compare_release(a, b))
        .then_with(|| compare_prerelease(a, b))
}

fn compare_numbers(a: &[Number], b: &[Number]) -> Ordering {
    let zero = Number::zero();
    let len = a.len().max(b.len());
    for i in 0..len {
        let a_val = a.get(i).unwrap_or(&zero);
        let b_val = b.get(i).unwrap_or(&zero);
        match a_val.cmp(b_val) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn compare_release(a: &Version, b: &Version) -> Ordering {
    match (a.is_prerelease(), b.is_prerelease()) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn compare_prerelease(a: &Version, b: &Version) -> Ordering {
    let a = a.prerelease_components();
    let b = b.prerelease_components();

    for i in 0..a.len().max(b.len()) {
        let result = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => x.precedence(y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Comparator for comparing version strings
pub struct Comparator;

impl Comparator {
    /// Three-way comparison of two version strings
    pub fn cmp(version1: &str, version2: &str) -> Ordering {
        compare(&Version::parse(version1), &Version::parse(version2))
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::cmp(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::cmp(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::cmp(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::cmp(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::cmp(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        !Self::equal_to(version1, version2)
    }

    /// Compare version1 to version2 using a named single-version operator (`gte`, `less_than`, ...)
    pub fn compare(version1: &str, operator: &str, version2: &str) -> Result<bool, AssertionError> {
        let operator: Operator = operator.parse()?;
        Version::parse(version1).assert(operator, &version2.into())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .map(|(i, v)| (Version::parse(v), i))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
