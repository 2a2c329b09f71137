//! Link tooling errors.

use socialdesk_common::AppError;
use thiserror::Error;

/// Errors raised while building links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The base URL could not be parsed, even after adding a scheme.
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl {
        /// The input exactly as the caller supplied it.
        input: String,
        /// Why the parser rejected it.
        #[source]
        reason: url::ParseError,
    },
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::InvalidUrl { input, reason } => Self::InvalidUrl {
                input,
                reason: reason.to_string(),
            },
        }
    }
}
