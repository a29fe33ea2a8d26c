//! Semantic Versioning 2.0 library
//!
//! This crate provides a validated `SemanticVersion` value type with strict and
//! lenient parsing, canonical formatting, and SemVer precedence ordering.

mod comparator;
pub mod grammar;
mod operator;
mod parser;
mod precedence;
mod semver;
mod version;


pub use comparator::Comparator;
pub use grammar::{is_build_valid, is_pre_release_valid};
pub use operator::{InvalidOperatorError, Operator};
pub use parser::{SemanticVersionError, VersionParser};
pub use semver::Semver;
pub use version::SemanticVersion;
