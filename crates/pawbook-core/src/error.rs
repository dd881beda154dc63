//! Error types for the Pawbook data layer.
//!
//! One enum covers the whole crate: query validation, transport failures,
//! and response decoding. The view layer matches on variants where it needs
//! to distinguish a rejected filter value from a failed request.

use thiserror::Error;

/// Main error type for Pawbook operations.
#[derive(Debug, Error)]
pub enum PawbookError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Pawbook operations.
pub type Result<T> = std::result::Result<T, PawbookError>;

// Conversion implementations for common error types

impl From<reqwest::Error> for PawbookError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PawbookError::Timeout(std::time::Duration::from_secs(0))
        } else {
            PawbookError::Network {
                message: err.to_string(),
                cause: Some(err.to_string()),
            }
        }
    }
}

impl From<serde_json::Error> for PawbookError {
    fn from(err: serde_json::Error) -> Self {
        PawbookError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl PawbookError {
    /// Create a validation error for a named query key.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PawbookError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, PawbookError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PawbookError::validation("width", "is not a number");
        assert_eq!(err.to_string(), "Validation error for width: is not a number");
    }

    #[test]
    fn test_validation_predicate() {
        assert!(PawbookError::validation("height", "cannot be less than 0").is_validation());
        assert!(!PawbookError::Other("boom".into()).is_validation());
    }
}
