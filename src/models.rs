//! Data models for a single comparison run

pub mod operator;

pub use operator::Operator;

/// Version parsing and precedence are delegated wholesale to the semver
/// crate; `Version::cmp_precedence` gives us the five relational queries
/// the comparator needs, mutually consistent by construction.
pub use semver::Version;
