//! Set Input Validation
//!
//! Turns the raw weight/reps text fields into numbers before anything is
//! sent. Only basic numeric parsing happens here; range checks belong to
//! the API.

use crate::error::{JournalError, JournalResult};

/// Warning shown when the set form does not parse
pub const INVALID_SET_INPUT: &str = "Weight must be a number and reps must be an integer";

/// Parsed set form values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetInput {
    pub weight: f64,
    pub reps: i64,
}

/// Parse the weight and reps fields.
///
/// Weight must be a finite decimal. Reps must be a whole number within
/// `i64` range; `"10"` and `"10.0"` are accepted, `"3.5"` is not.
///
/// Blank fields are rejected, never read as 0.
pub fn parse_set_input(weight: &str, reps: &str) -> JournalResult<SetInput> {
    let weight = parse_finite(weight).ok_or_else(invalid)?;
    let reps = parse_finite(reps)
        .filter(|r| r.fract() == 0.0 && r.abs() < i64::MAX as f64)
        .ok_or_else(invalid)? as i64;

    Ok(SetInput { weight, reps })
}

fn parse_finite(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn invalid() -> JournalError {
    JournalError::Validation(INVALID_SET_INPUT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert_eq!(
            parse_set_input("42.5", "10").unwrap(),
            SetInput { weight: 42.5, reps: 10 }
        );
        assert_eq!(
            parse_set_input(" 60 ", "8.0").unwrap(),
            SetInput { weight: 60.0, reps: 8 }
        );
    }

    #[test]
    fn test_non_numeric_weight() {
        let err = parse_set_input("abc", "10").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_fractional_reps() {
        let err = parse_set_input("40", "3.5").unwrap_err();
        assert_eq!(err, JournalError::Validation(INVALID_SET_INPUT.to_string()));
    }

    #[test]
    fn test_non_finite_and_blank() {
        assert!(parse_set_input("inf", "5").is_err());
        assert!(parse_set_input("NaN", "5").is_err());
        assert!(parse_set_input("", "5").is_err());
        assert!(parse_set_input("20", "  ").is_err());
    }

    #[test]
    fn test_out_of_range_reps_rejected() {
        // 2^63 does not fit in i64 and must not clamp to i64::MAX
        assert!(parse_set_input("20", "9223372036854775808").is_err());
        assert!(parse_set_input("20", "1e300").is_err());
        assert_eq!(parse_set_input("20", "1000").unwrap().reps, 1000);
    }
}
