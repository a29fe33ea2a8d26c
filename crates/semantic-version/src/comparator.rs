//! Version string comparison utilities

use crate::{Operator, SemanticVersion};

/// Comparator for comparing version strings
///
/// Inputs are parsed leniently, so `"1.2"` compares as `1.2.0`. A string that
/// fails to parse makes every comparison false.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator string
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        match Operator::from_str(operator) {
            Ok(op) => Self::compare_with(version1, op, version2),
            Err(e) => {
                log::debug!("{}", e);
                false
            }
        }
    }

    /// Compare version1 to version2 using a parsed operator
    pub fn compare_with(version1: &str, operator: Operator, version2: &str) -> bool {
        let (a, b) = match (
            SemanticVersion::parse_lenient(version1),
            SemanticVersion::parse_lenient(version2),
        ) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return false,
        };

        operator.evaluate(a.cmp(&b))
    }
}
