//! Error types for the search crate.
//!
//! Scoring, ranking and highlighting are total and never return these.
//! They only surface at the boundaries: option validation and JSON decoding.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the search boundary.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search options out of range
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for programmatic handling by callers.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Search options out of range
    InvalidOptions = 11001,
    /// JSON encoding or decoding failed
    Json = 11002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidOptions(_) => SearchErrorCode::InvalidOptions,
            SearchError::Json(_) => SearchErrorCode::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = SearchError::InvalidOptions("min_score".into());
        assert_eq!(err.code() as u32, 11001);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SearchError = json_err.into();
        assert_eq!(err.code(), SearchErrorCode::Json);
    }

    #[test]
    fn test_error_display() {
        let err = SearchError::InvalidOptions("max_results must be positive".into());
        assert_eq!(err.to_string(), "Invalid search options: max_results must be positive");
    }
}
