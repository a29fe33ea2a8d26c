//! Version string parsing

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::grammar::{BUILD_IDENTIFIER, PRE_RELEASE_IDENTIFIER};
use crate::SemanticVersion;

/// Error type for version parsing and construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticVersionError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Version component {component} must not be negative, got {value}")]
    NegativeComponent { component: &'static str, value: i64 },
    #[error("Invalid pre-release \"{0}\"")]
    InvalidPreRelease(String),
    #[error("Invalid build metadata \"{0}\"")]
    InvalidBuild(String),
}

lazy_static! {
    static ref NUMERIC_REGEX: &'static str = r"(0|[1-9][0-9]*)";

    // Canonical SemVer 2.0 grammar
    static ref STRICT_VERSION_RE: Regex = Regex::new(&format!(
        r"^{num}\.{num}\.{num}(?:-({pre}(?:\.{pre})*))?(?:\+({build}(?:\.{build})*))?$",
        num = *NUMERIC_REGEX,
        pre = PRE_RELEASE_IDENTIFIER,
        build = BUILD_IDENTIFIER,
    )).unwrap();

    // "major" or "major.minor", nothing else
    static ref LENIENT_VERSION_RE: Regex = Regex::new(&format!(
        r"^{num}(\.{num}){{0,1}}$",
        num = *NUMERIC_REGEX,
    )).unwrap();
}

/// Strip exactly one leading `v` or `V`
fn strip_v_prefix(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

fn parse_component(captures: &Captures<'_>, index: usize, version: &str) -> Result<u64, SemanticVersionError> {
    captures
        .get(index)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .ok_or_else(|| SemanticVersionError::InvalidVersion(version.to_string()))
}

/// Parser for strict and lenient version strings
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string parses strictly
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a strict SemVer 2.0 string, optionally prefixed with `v`
    pub fn parse(&self, version: &str) -> Result<SemanticVersion, SemanticVersionError> {
        let stripped = strip_v_prefix(version);

        let captures = match STRICT_VERSION_RE.captures(stripped) {
            Some(c) => c,
            None => {
                log::trace!("Rejected version \"{}\": not SemVer 2.0", version);
                return Err(SemanticVersionError::InvalidVersion(version.to_string()));
            }
        };

        let major = parse_component(&captures, 1, version)?;
        let minor = parse_component(&captures, 2, version)?;
        let patch = parse_component(&captures, 3, version)?;
        let pre_release = captures.get(4).map(|m| m.as_str());
        let build = captures.get(5).map(|m| m.as_str());

        SemanticVersion::with_metadata(major, minor, patch, pre_release, build)
    }

    /// Parse a version, also accepting `major` and `major.minor`
    ///
    /// Strictly valid input always yields the same result as [`VersionParser::parse`].
    /// The short forms carry no pre-release or build metadata.
    pub fn parse_lenient(&self, version: &str) -> Result<SemanticVersion, SemanticVersionError> {
        if let Ok(parsed) = self.parse(version) {
            return Ok(parsed);
        }

        let stripped = strip_v_prefix(version);

        let captures = match LENIENT_VERSION_RE.captures(stripped) {
            Some(c) => c,
            None => {
                log::trace!("Rejected version \"{}\": not a lenient version either", version);
                return Err(SemanticVersionError::InvalidVersion(version.to_string()));
            }
        };

        let major = parse_component(&captures, 1, version)?;
        let minor = match captures.get(3) {
            Some(_) => parse_component(&captures, 3, version)?,
            None => 0,
        };

        Ok(SemanticVersion::new(major, minor, 0))
    }
}
