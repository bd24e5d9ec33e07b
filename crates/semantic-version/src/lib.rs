//! Semantic version parsing, comparison and assertions
//!
//! Versions are parsed leniently (parsing never fails) into number components,
//! prerelease identifiers and build metadata. A single three-way comparator
//! orders them, and every equality, relational and range assertion is built on
//! top of it.
//!
//! ```
//! use semantic_version::Version;
//!
//! let version = Version::parse("1.5.0-rc.1");
//! assert!(version < "1.5.0");
//! assert!(version.satisfies([("within", ["1.0.0", "2.0.0"])]).unwrap());
//! ```

mod assertion;
mod comparator;
mod number;
mod operator;
mod parser;
mod prerelease;
mod version;

pub use assertion::{satisfied_by, AssertionError, Assertions, Operand};
pub use comparator::{compare, Comparator};
pub use number::Number;
pub use operator::Operator;
pub use prerelease::Identifier;
pub use version::{Version, VersionLike};
