//! Client error types
//!
//! Every failure the journal can hit on its way to or from the API, plus
//! local input validation. Front-ends treat all of them the same way: a
//! transient notification, nothing fatal.

use thiserror::Error;

/// Errors produced by the journal client and view
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JournalError {
    /// The request never produced an HTTP response (DNS, connect, reset)
    #[error("Network error: {0}")]
    Transport(String),

    /// The API answered with a non-success status code
    #[error("{method} {path} -> {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },

    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Decode(String),

    /// User input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),
}

impl JournalError {
    /// Shorthand for a non-success status error
    pub fn status(method: &'static str, path: impl Into<String>, status: u16) -> Self {
        JournalError::Status {
            method,
            path: path.into(),
            status,
        }
    }

    /// True for failures caused by local input rather than the API
    pub fn is_validation(&self) -> bool {
        matches!(self, JournalError::Validation(_))
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Decode(err.to_string())
    }
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = JournalError::status("GET", "/sessions?limit=10", 503);
        assert_eq!(err.to_string(), "GET /sessions?limit=10 -> 503");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: JournalError = json_err.into();
        assert!(matches!(err, JournalError::Decode(_)));
        assert!(!err.is_validation());
    }
}
