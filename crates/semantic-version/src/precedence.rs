//! SemVer precedence for `SemanticVersion`

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::SemanticVersion;

impl SemanticVersion {
    /// Compare by precedence, then by build metadata (absent first).
    ///
    /// Unlike [`Ord`], this never reports two versions with different build
    /// metadata as equal.
    pub fn cmp_exact(&self, other: &SemanticVersion) -> Ordering {
        self.cmp(other).then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(self.pre_release.as_deref(), other.pre_release.as_deref()))
    }
}

fn compare_pre_release(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // a stable release outranks any of its pre-releases
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) if a == b => Ordering::Equal,
        (Some(a), Some(b)) => compare_identifiers(a, b),
    }
}

/// Compare dot-separated pre-release identifiers left to right
fn compare_identifiers(a: &str, b: &str) -> Ordering {
    let mut a_iter = a.split('.');
    let mut b_iter = b.split('.');

    loop {
        match (a_iter.next(), b_iter.next()) {
            (None, None) => return Ordering::Equal,
            // fewer identifiers sort first
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a_part), Some(b_part)) => {
                let cmp = compare_identifier(a_part, b_part);
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(an), Ok(bn)) => an.cmp(&bn),
        // byte order puts ASCII digits below letters
        _ => a.as_bytes().cmp(b.as_bytes()),
    }
}
