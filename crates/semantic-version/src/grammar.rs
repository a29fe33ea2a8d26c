//! Grammar checks for pre-release and build metadata strings

use lazy_static::lazy_static;
use regex::Regex;

/// A single pre-release identifier: numeric without leading zeros, or alphanumeric.
pub(crate) const PRE_RELEASE_IDENTIFIER: &str = r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)";

/// A single build identifier: any non-empty run of alphanumerics and hyphens.
pub(crate) const BUILD_IDENTIFIER: &str = r"[0-9a-zA-Z-]+";

lazy_static! {
    static ref PRE_RELEASE_RE: Regex = Regex::new(&format!(
        r"^{id}(?:\.{id})*$",
        id = PRE_RELEASE_IDENTIFIER
    )).unwrap();

    static ref BUILD_RE: Regex = Regex::new(&format!(
        r"^{id}(?:\.{id})*$",
        id = BUILD_IDENTIFIER
    )).unwrap();
}

/// Check if a string is a valid pre-release tag (the part after `-`)
pub fn is_pre_release_valid(pre_release: &str) -> bool {
    PRE_RELEASE_RE.is_match(pre_release)
}

/// Check if a string is valid build metadata (the part after `+`)
pub fn is_build_valid(build: &str) -> bool {
    BUILD_RE.is_match(build)
}
