//! Parsing of user-typed grades and indices

use thiserror::Error;
use tracing::debug;

/// Errors from interpreting user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid choice: {0}")]
    UnknownChoice(String),

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Grade must be a finite number, got {0}")]
    NonFinite(String),

    #[error("Not a valid index: {0}")]
    InvalidIndex(String),
}

/// Parse a grade, rejecting NaN and infinities
pub fn parse_grade(s: &str) -> Result<f64, InputError> {
    let s = s.trim();
    let grade: f64 = s.parse().map_err(|_| InputError::InvalidNumber(s.to_string()))?;
    if !grade.is_finite() {
        debug!(%s, "parse_grade: rejected non-finite grade");
        return Err(InputError::NonFinite(s.to_string()));
    }
    Ok(grade)
}

/// Parse a signed index; range checking is left to the grade collection
pub fn parse_index(s: &str) -> Result<i64, InputError> {
    let s = s.trim();
    s.parse().map_err(|_| InputError::InvalidIndex(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("87.5").unwrap(), 87.5);
        assert_eq!(parse_grade("  100 ").unwrap(), 100.0);
        assert_eq!(parse_grade("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_grade_rejects_garbage() {
        assert_eq!(parse_grade("ninety"), Err(InputError::InvalidNumber("ninety".to_string())));
        assert!(parse_grade("").is_err());
    }

    #[test]
    fn test_parse_grade_rejects_non_finite() {
        assert_eq!(parse_grade("NaN"), Err(InputError::NonFinite("NaN".to_string())));
        assert!(matches!(parse_grade("inf"), Err(InputError::NonFinite(_))));
        assert!(matches!(parse_grade("-infinity"), Err(InputError::NonFinite(_))));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("2").unwrap(), 2);
        assert_eq!(parse_index("-1").unwrap(), -1);
        assert_eq!(parse_index("1.5"), Err(InputError::InvalidIndex("1.5".to_string())));
    }

    #[test]
    fn test_error_messages() {
        assert!(InputError::NonFinite("NaN".to_string()).to_string().contains("finite"));
        assert!(InputError::UnknownChoice("9".to_string()).to_string().contains("9"));
    }

    proptest! {
        #[test]
        fn prop_finite_grades_round_trip(grade in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            prop_assert_eq!(parse_grade(&grade.to_string()).unwrap(), grade);
        }

        #[test]
        fn prop_any_i64_index_parses(index in any::<i64>()) {
            prop_assert_eq!(parse_index(&index.to_string()).unwrap(), index);
        }
    }
}
