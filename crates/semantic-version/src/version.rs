//! The semantic version value type

use std::fmt;
use std::str::FromStr;

use crate::grammar::{is_build_valid, is_pre_release_valid};
use crate::{SemanticVersionError, VersionParser};

/// A validated SemVer 2.0 version.
///
/// Instances are immutable; use the `with_*` methods to derive a changed copy.
/// Equality, hashing and ordering follow SemVer precedence and ignore build
/// metadata. Use [`SemanticVersion::eq_exact`] to include it.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: Option<String>,
    pub(crate) build: Option<String>,
}

fn validated_pre_release(pre_release: Option<&str>) -> Result<Option<String>, SemanticVersionError> {
    match pre_release {
        None | Some("") => Ok(None),
        Some(pre) if is_pre_release_valid(pre) => Ok(Some(pre.to_string())),
        Some(pre) => {
            log::trace!("Rejected pre-release \"{}\"", pre);
            Err(SemanticVersionError::InvalidPreRelease(pre.to_string()))
        }
    }
}

fn validated_build(build: Option<&str>) -> Result<Option<String>, SemanticVersionError> {
    match build {
        None | Some("") => Ok(None),
        Some(build) if is_build_valid(build) => Ok(Some(build.to_string())),
        Some(build) => {
            log::trace!("Rejected build metadata \"{}\"", build);
            Err(SemanticVersionError::InvalidBuild(build.to_string()))
        }
    }
}

fn non_negative(component: &'static str, value: i64) -> Result<u64, SemanticVersionError> {
    u64::try_from(value).map_err(|_| SemanticVersionError::NegativeComponent { component, value })
}

impl SemanticVersion {
    /// The initial version `0.0.0`
    pub const ZERO: SemanticVersion = SemanticVersion::new(0, 0, 0);

    /// Create a stable version without build metadata
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Create a version with optional pre-release and build metadata.
    ///
    /// Empty strings are treated as absent.
    pub fn with_metadata(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, SemanticVersionError> {
        Ok(SemanticVersion {
            major,
            minor,
            patch,
            pre_release: validated_pre_release(pre_release)?,
            build: validated_build(build)?,
        })
    }

    /// Create a version from signed components, rejecting negative values
    pub fn from_signed(
        major: i64,
        minor: i64,
        patch: i64,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, SemanticVersionError> {
        let major = non_negative("major", major)?;
        let minor = non_negative("minor", minor)?;
        let patch = non_negative("patch", patch)?;
        Self::with_metadata(major, minor, patch, pre_release, build)
    }

    /// Parse a strict SemVer 2.0 string
    pub fn parse(version: &str) -> Result<Self, SemanticVersionError> {
        VersionParser::new().parse(version)
    }

    /// Parse a version, also accepting `major` and `major.minor`
    pub fn parse_lenient(version: &str) -> Result<Self, SemanticVersionError> {
        VersionParser::new().parse_lenient(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn with_major(&self, major: u64) -> Self {
        SemanticVersion { major, ..self.clone() }
    }

    pub fn with_minor(&self, minor: u64) -> Self {
        SemanticVersion { minor, ..self.clone() }
    }

    pub fn with_patch(&self, patch: u64) -> Self {
        SemanticVersion { patch, ..self.clone() }
    }

    /// Replace the pre-release tag; `None` or `""` removes it
    pub fn with_pre_release(&self, pre_release: Option<&str>) -> Result<Self, SemanticVersionError> {
        Ok(SemanticVersion {
            pre_release: validated_pre_release(pre_release)?,
            ..self.clone()
        })
    }

    /// Replace the build metadata; `None` or `""` removes it
    pub fn with_build(&self, build: Option<&str>) -> Result<Self, SemanticVersionError> {
        Ok(SemanticVersion {
            build: validated_build(build)?,
            ..self.clone()
        })
    }

    pub fn without_build(&self) -> Self {
        SemanticVersion {
            build: None,
            ..self.clone()
        }
    }

    /// The next major release: `1.2.3` becomes `2.0.0`
    pub fn next_major(&self) -> Self {
        Self::new(self.major.saturating_add(1), 0, 0)
    }

    /// The next minor release: `1.2.3` becomes `1.3.0`
    pub fn next_minor(&self) -> Self {
        Self::new(self.major, self.minor.saturating_add(1), 0)
    }

    /// The next patch release.
    ///
    /// A pre-release is followed by its own stable release, so
    /// `1.2.3-rc.1` becomes `1.2.3` while `1.2.3` becomes `1.2.4`.
    pub fn next_patch(&self) -> Self {
        if self.is_pre_release() {
            Self::new(self.major, self.minor, self.patch)
        } else {
            Self::new(self.major, self.minor, self.patch.saturating_add(1))
        }
    }

    /// Canonical `major.minor.patch[-pre][+build]` form
    pub fn to_raw_value(&self) -> String {
        self.to_string()
    }

    pub fn is_stable(&self) -> bool {
        self.pre_release.is_none()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// `X.0.0` with `X > 0`
    pub fn is_major_release(&self) -> bool {
        self.major > 0 && self.minor == 0 && self.patch == 0
    }

    /// `_.Y.0` with `Y > 0`
    pub fn is_minor_release(&self) -> bool {
        self.minor > 0 && self.patch == 0
    }

    pub fn is_patch_release(&self) -> bool {
        self.patch > 0
    }

    /// Exactly `0.0.0`, with no pre-release or build metadata
    pub fn is_zero(&self) -> bool {
        self.eq_exact(&Self::ZERO)
    }

    pub fn is_initial_release(&self) -> bool {
        self.is_zero()
    }

    /// Field-by-field equality, build metadata included
    pub fn eq_exact(&self, other: &SemanticVersion) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
            && self.build == other.build
    }
}

impl Default for SemanticVersion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = SemanticVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = SemanticVersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<(i64, i64, i64)> for SemanticVersion {
    type Error = SemanticVersionError;

    fn try_from((major, minor, patch): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::from_signed(major, minor, patch, None, None)
    }
}

impl From<(u64, u64, u64)> for SemanticVersion {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Self::new(major, minor, patch)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SemanticVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SemanticVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = SemanticVersion::new(1, 2, 3);
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert!(v.is_stable());
        assert_eq!(v.build(), None);
    }

    #[test]
    fn test_with_metadata() {
        let v = SemanticVersion::with_metadata(1, 0, 0, Some("rc.1"), Some("sha.abc")).unwrap();
        assert_eq!(v.pre_release(), Some("rc.1"));
        assert_eq!(v.build(), Some("sha.abc"));

        let v = SemanticVersion::with_metadata(1, 0, 0, Some(""), Some("")).unwrap();
        assert_eq!(v.pre_release(), None);
        assert_eq!(v.build(), None);

        assert_eq!(
            SemanticVersion::with_metadata(1, 0, 0, Some("01"), None).unwrap_err(),
            SemanticVersionError::InvalidPreRelease("01".to_string())
        );
        assert_eq!(
            SemanticVersion::with_metadata(1, 0, 0, None, Some("a..b")).unwrap_err(),
            SemanticVersionError::InvalidBuild("a..b".to_string())
        );
    }

    #[test]
    fn test_from_signed() {
        let v = SemanticVersion::from_signed(1, 2, 3, Some("beta"), None).unwrap();
        assert_eq!(v.to_string(), "1.2.3-beta");

        assert_eq!(
            SemanticVersion::from_signed(-1, 0, 0, None, None).unwrap_err(),
            SemanticVersionError::NegativeComponent { component: "major", value: -1 }
        );
        assert_eq!(
            SemanticVersion::from_signed(0, -2, 0, None, None).unwrap_err(),
            SemanticVersionError::NegativeComponent { component: "minor", value: -2 }
        );
        assert_eq!(
            SemanticVersion::from_signed(0, 0, -3, None, None).unwrap_err(),
            SemanticVersionError::NegativeComponent { component: "patch", value: -3 }
        );
        assert!(SemanticVersion::from_signed(1, 0, 0, Some("bad_tag"), None).is_err());

        assert_eq!(SemanticVersion::try_from((4i64, 5i64, 6i64)).unwrap(), SemanticVersion::new(4, 5, 6));
        assert!(SemanticVersion::try_from((4i64, -5i64, 6i64)).is_err());
        assert_eq!(SemanticVersion::from((4u64, 5u64, 6u64)), SemanticVersion::new(4, 5, 6));
    }

    #[test]
    fn test_with_methods() {
        let v = SemanticVersion::parse("1.2.3-alpha+build.7").unwrap();

        assert_eq!(v.with_major(9).to_string(), "9.2.3-alpha+build.7");
        assert_eq!(v.with_minor(9).to_string(), "1.9.3-alpha+build.7");
        assert_eq!(v.with_patch(9).to_string(), "1.2.9-alpha+build.7");
        assert_eq!(v.with_pre_release(Some("beta.2")).unwrap().to_string(), "1.2.3-beta.2+build.7");
        assert_eq!(v.with_pre_release(None).unwrap().to_string(), "1.2.3+build.7");
        assert_eq!(v.with_build(Some("")).unwrap().to_string(), "1.2.3-alpha");
        assert_eq!(v.without_build().to_string(), "1.2.3-alpha");

        assert!(v.with_pre_release(Some("beta.02")).is_err());
        assert!(v.with_build(Some("+")).is_err());
        // the original is untouched
        assert_eq!(v.to_string(), "1.2.3-alpha+build.7");
    }

    #[test]
    fn test_next_versions() {
        let v = SemanticVersion::parse("1.2.3+b").unwrap();
        assert_eq!(v.next_major().to_string(), "2.0.0");
        assert_eq!(v.next_minor().to_string(), "1.3.0");
        assert_eq!(v.next_patch().to_string(), "1.2.4");

        let rc = SemanticVersion::parse("1.2.3-rc.1").unwrap();
        assert_eq!(rc.next_patch().to_string(), "1.2.3");
        assert_eq!(rc.next_minor().to_string(), "1.3.0");

        let max = SemanticVersion::new(u64::MAX, 0, 0);
        assert_eq!(max.next_major().major(), u64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(SemanticVersion::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(SemanticVersion::parse("v1.2.3-rc.1+001").unwrap().to_raw_value(), "1.2.3-rc.1+001");
        assert_eq!(SemanticVersion::parse("1.2.3+001").unwrap().to_string(), "1.2.3+001");
        assert_eq!(SemanticVersion::default().to_string(), "0.0.0");
    }

    #[test]
    fn test_from_str() {
        let v: SemanticVersion = "2.0.0-beta".parse().unwrap();
        assert_eq!(v.pre_release(), Some("beta"));
        assert!("2.0".parse::<SemanticVersion>().is_err());
        assert!(SemanticVersion::try_from("2.0.0").is_ok());
    }

    #[test]
    fn test_predicates() {
        let v = |s: &str| SemanticVersion::parse(s).unwrap();

        assert!(v("1.0.0").is_stable());
        assert!(!v("1.0.0").is_pre_release());
        assert!(v("1.0.0-alpha").is_pre_release());
        assert!(!v("1.0.0-alpha").is_stable());

        assert!(v("1.0.0").is_major_release());
        assert!(!v("0.0.0").is_major_release());
        assert!(!v("1.1.0").is_major_release());

        assert!(v("1.1.0").is_minor_release());
        assert!(v("0.1.0").is_minor_release());
        assert!(!v("1.0.0").is_minor_release());
        assert!(!v("1.1.1").is_minor_release());

        assert!(v("0.0.1").is_patch_release());
        assert!(!v("1.1.0").is_patch_release());

        assert!(v("0.0.0").is_zero());
        assert!(v("v0.0.0").is_initial_release());
        assert!(!v("0.0.0-alpha").is_zero());
        assert!(!v("0.0.0+build").is_zero());
        assert!(SemanticVersion::ZERO.is_zero());
    }

    #[test]
    fn test_eq_exact() {
        let a = SemanticVersion::parse("1.0.0+build1").unwrap();
        let b = SemanticVersion::parse("1.0.0+build2").unwrap();
        assert_eq!(a, b);
        assert!(!a.eq_exact(&b));
        assert!(a.eq_exact(&a.clone()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let v = SemanticVersion::parse("1.2.3-rc.1+sha.5").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.2.3-rc.1+sha.5\"");

        let back: SemanticVersion = serde_json::from_str(&json).unwrap();
        assert!(back.eq_exact(&v));

        assert!(serde_json::from_str::<SemanticVersion>("\"1.2\"").is_err());
    }
}
