//! Semver facade providing high-level operations over version strings

use crate::{SemanticVersion, VersionParser};

/// Main facade for working with lists of version strings
pub struct Semver;

impl Semver {
    /// Check if a string is a strict SemVer 2.0 version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Sort versions in ascending order, dropping unparseable entries
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    /// Highest version in the list, as originally written
    pub fn max(versions: &[&str]) -> Option<String> {
        Self::parse_all(versions)
            .into_iter()
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, i)| versions[i].to_string())
    }

    /// Lowest version in the list, as originally written
    pub fn min(versions: &[&str]) -> Option<String> {
        Self::parse_all(versions)
            .into_iter()
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, i)| versions[i].to_string())
    }

    fn parse_all(versions: &[&str]) -> Vec<(SemanticVersion, usize)> {
        let parser = VersionParser::new();

        versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((parser.parse_lenient(v).ok()?, i)))
            .collect()
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed = Self::parse_all(versions);

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
