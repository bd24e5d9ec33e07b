//! The semantic version value type

use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::compare;
use crate::number::Number;
use crate::parser;
use crate::prerelease::Identifier;

/// A parsed version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Equality and ordering come from [`compare`]: missing number components
/// count as `0` and build metadata is ignored, so `1.0-rc` equals `1.0.0-rc+abc`.
#[derive(Debug, Clone)]
pub struct Version {
    number_components: Vec<Number>,
    prerelease_components: Vec<Identifier>,
    build_metadata: Option<String>,
}

impl Version {
    /// Parse a version string. Never fails; unparseable number text becomes `0`.
    pub fn parse(input: &str) -> Self {
        let segments = parser::split_segments(input);

        Version {
            number_components: parser::parse_numbers(segments.number),
            prerelease_components: parser::parse_prerelease(segments.prerelease),
            build_metadata: segments.build.map(str::to_string),
        }
    }

    /// Build a version directly from its components
    pub fn from_components(
        number_components: Vec<Number>,
        prerelease_components: Vec<Identifier>,
        build_metadata: Option<String>,
    ) -> Self {
        Version {
            number_components,
            prerelease_components,
            build_metadata,
        }
    }

    pub fn number_components(&self) -> &[Number] {
        &self.number_components
    }

    pub fn prerelease_components(&self) -> &[Identifier] {
        &self.prerelease_components
    }

    /// All three parts at once: numbers, prerelease identifiers, build metadata
    pub fn components(&self) -> (&[Number], &[Identifier], Option<&str>) {
        (
            &self.number_components,
            &self.prerelease_components,
            self.build_metadata.as_deref(),
        )
    }

    pub fn major(&self) -> Option<&Number> {
        self.number_components.first()
    }

    pub fn minor(&self) -> Option<&Number> {
        self.number_components.get(1)
    }

    pub fn patch(&self) -> Option<&Number> {
        self.number_components.get(2)
    }

    /// The build metadata, if any
    pub fn build(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease_components.is_empty()
    }

    /// The `MAJOR.MINOR.PATCH` part as a string
    pub fn number(&self) -> String {
        join(&self.number_components)
    }

    /// The prerelease part as a string, empty when there is none
    pub fn prerelease(&self) -> String {
        join(&self.prerelease_components)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number())?;
        if self.is_prerelease() {
            write!(f, "-{}", self.prerelease())?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::parse(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Version::parse(&s)
    }
}

impl From<&String> for Version {
    fn from(s: &String) -> Self {
        Version::parse(s)
    }
}

/// Anything that can stand in for a version: a parsed [`Version`] is used as
/// is, strings are parsed on demand.
pub trait VersionLike {
    fn to_version(&self) -> Cow<'_, Version>;
}

impl VersionLike for Version {
    fn to_version(&self) -> Cow<'_, Version> {
        Cow::Borrowed(self)
    }
}

impl VersionLike for str {
    fn to_version(&self) -> Cow<'_, Version> {
        Cow::Owned(Version::parse(self))
    }
}

impl VersionLike for String {
    fn to_version(&self) -> Cow<'_, Version> {
        Cow::Owned(Version::parse(self))
    }
}

impl<T: VersionLike + ?Sized> VersionLike for &T {
    fn to_version(&self) -> Cow<'_, Version> {
        (**self).to_version()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mixed numeric and textual prerelease identifiers compare by text, which is
/// not transitive for every input (`2 < 10`, `10 < 1a`, `1a < 2`). Sorting
/// such sets gives an unspecified but memory-safe order.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Trailing zeros and build metadata never affect equality
        let significant = self
            .number_components
            .iter()
            .rposition(|n| !n.is_zero())
            .map_or(0, |i| i + 1);
        self.number_components[..significant].hash(state);

        self.prerelease_components.len().hash(state);
        for identifier in &self.prerelease_components {
            identifier.as_text().hash(state);
        }
    }
}

macro_rules! impl_string_relations {
    ($($ty:ty),*) => {$(
        impl PartialEq<$ty> for Version {
            fn eq(&self, other: &$ty) -> bool {
                self.equal_to(other)
            }
        }

        impl PartialOrd<$ty> for Version {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                Some(compare(self, &other.to_version()))
            }

            fn lt(&self, other: &$ty) -> bool {
                self.less_than(other)
            }

            fn le(&self, other: &$ty) -> bool {
                self.less_than_or_equal_to(other)
            }

            fn gt(&self, other: &$ty) -> bool {
                self.greater_than(other)
            }

            fn ge(&self, other: &$ty) -> bool {
                self.greater_than_or_equal_to(other)
            }
        }
    )*};
}

impl_string_relations!(str, &str, String);

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::Version;

    impl Serialize for Version {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Version {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            Ok(Version::parse(&raw))
        }
    }
}
