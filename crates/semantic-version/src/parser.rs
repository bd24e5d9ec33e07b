//! Lenient splitting of version strings into their components

use lazy_static::lazy_static;
use regex::Regex;

use crate::number::Number;
use crate::prerelease::Identifier;

lazy_static! {
    /// Leading integer of a component: optional ASCII whitespace and `+`, then digits
    /// with `_` separators
    static ref LEADING_INTEGER_RE: Regex =
        Regex::new(r"^[ \t\n\x0B\f\r]*\+?([0-9]+(?:_[0-9]+)*)").unwrap();
}

/// The three raw segments of a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub number: &'a str,
    pub prerelease: &'a str,
    pub build: Option<&'a str>,
}

/// Split on the first `-`, then split what follows on the first `+`.
///
/// Build metadata is only recognised after a hyphen, so `1.0+build` keeps the
/// `+build` inside its number segment.
pub(crate) fn split_segments(input: &str) -> Segments<'_> {
    let Some((number, extensions)) = input.split_once('-') else {
        return Segments {
            number: input,
            prerelease: "",
            build: None,
        };
    };

    match extensions.split_once('+') {
        Some((prerelease, build)) => Segments {
            number,
            prerelease,
            build: Some(build),
        },
        None => Segments {
            number,
            prerelease: extensions,
            build: None,
        },
    }
}

/// Split a segment on `.`, dropping trailing empty fields
fn split_fields(segment: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = segment.split('.').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Convert the leading integer of `text`, or 0 when there is none
pub(crate) fn leading_integer(text: &str) -> Number {
    let Some(captures) = LEADING_INTEGER_RE.captures(text) else {
        if !text.is_empty() {
            log::debug!("Non-numeric version component {:?} treated as 0", text);
        }
        return Number::zero();
    };

    let whole = &captures[0];
    if whole.len() != text.len() {
        log::debug!(
            "Ignoring trailing {:?} in version component {:?}",
            &text[whole.len()..],
            text
        );
    }

    let digits: String = captures[1].chars().filter(|c| *c != '_').collect();
    Number::from_digits(&digits).unwrap_or_default()
}

pub(crate) fn parse_numbers(segment: &str) -> Vec<Number> {
    split_fields(segment).into_iter().map(leading_integer).collect()
}

pub(crate) fn parse_prerelease(segment: &str) -> Vec<Identifier> {
    split_fields(segment).into_iter().map(Identifier::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments() {
        assert_eq!(
            split_segments("1.2.3-beta.1+exp.sha"),
            Segments {
                number: "1.2.3",
                prerelease: "beta.1",
                build: Some("exp.sha"),
            }
        );
        assert_eq!(
            split_segments("1.2.3-alpha-2"),
            Segments {
                number: "1.2.3",
                prerelease: "alpha-2",
                build: None,
            }
        );
        assert_eq!(
            split_segments("1.2.3"),
            Segments {
                number: "1.2.3",
                prerelease: "",
                build: None,
            }
        );
    }

    #[test]
    fn test_split_segments_build_without_hyphen() {
        let segments = split_segments("1.2.3+build");
        assert_eq!(segments.number, "1.2.3+build");
        assert_eq!(segments.prerelease, "");
        assert_eq!(segments.build, None);
    }

    #[test]
    fn test_split_segments_empty_parts() {
        assert_eq!(split_segments("1.0-").prerelease, "");
        assert_eq!(split_segments("1.0-").build, None);
        assert_eq!(split_segments("1.0-+").build, Some(""));
        assert_eq!(split_segments("").number, "");
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("1.2.3"), vec!["1", "2", "3"]);
        assert_eq!(split_fields("1..3"), vec!["1", "", "3"]);
        assert_eq!(split_fields("1.2.."), vec!["1", "2"]);
        assert!(split_fields("").is_empty());
        assert!(split_fields("...").is_empty());
    }

    fn digits(numbers: &[Number]) -> Vec<&str> {
        numbers.iter().map(Number::as_str).collect()
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("42").as_str(), "42");
        assert_eq!(leading_integer("007").as_str(), "7");
        assert_eq!(leading_integer("3rc").as_str(), "3");
        assert_eq!(leading_integer(" 5").as_str(), "5");
        assert_eq!(leading_integer("\t\n5").as_str(), "5");
        assert_eq!(leading_integer("+8").as_str(), "8");
        assert_eq!(leading_integer("1_000").as_str(), "1000");
        assert_eq!(leading_integer("1__0").as_str(), "1");
        assert!(leading_integer("x").is_zero());
        assert!(leading_integer("").is_zero());
    }

    #[test]
    fn test_leading_integer_skips_only_ascii_whitespace() {
        assert!(leading_integer("\u{a0}5").is_zero());
        assert!(leading_integer("\u{2003}7").is_zero());
    }

    #[test]
    fn test_leading_integer_keeps_full_width() {
        assert_eq!(
            leading_integer("99999999999999999999999").as_str(),
            "99999999999999999999999"
        );
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(digits(&parse_numbers("1.2.3")), vec!["1", "2", "3"]);
        assert_eq!(digits(&parse_numbers("v1.2")), vec!["0", "2"]);
        assert_eq!(digits(&parse_numbers("1.2.3+build")), vec!["1", "2", "3"]);
        assert!(parse_numbers("").is_empty());
    }

    #[test]
    fn test_parse_prerelease() {
        assert_eq!(
            parse_prerelease("alpha.1.01"),
            vec![
                Identifier::Textual("alpha".to_string()),
                Identifier::from(1u64),
                Identifier::Textual("01".to_string()),
            ]
        );
        assert!(parse_prerelease("").is_empty());
    }
}
