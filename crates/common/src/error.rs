//! Error types for socialdesk.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // === Client Errors ===
    /// A user-supplied URL could not be parsed.
    #[error("Invalid URL: {input}: {reason}")]
    InvalidUrl {
        /// The URL as supplied.
        input: String,
        /// Parser message.
        reason: String,
    },

    /// A named resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    // === Server Errors ===
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for user-facing messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "INVALID_URL",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns whether the error was caused by caller input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::NotFound(_) | Self::Validation(_)
        )
    }
}

// === From implementations ===

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::InvalidUrl {
            input: "not a url".to_string(),
            reason: "invalid domain character".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_URL");
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Invalid URL: not a url: invalid domain character"
        );

        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::NotFound("links".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(!err.is_client_error());
    }
}
