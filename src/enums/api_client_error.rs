use thiserror::Error;
use crate::errors::ConsoleError;

/// Failures raised while talking HTTP, before they reach the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiClientError {
    /// The backend answered with an error.
    #[error("{0}")]
    RequestFailed(String),
    /// No usable answer.
    #[error("Network Error: {0}")]
    NetworkError(String),
    /// The body could not be encoded or decoded.
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    /// The token was rejected.
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl ApiClientError {
    /// Attaches the operation name and URL.
    pub fn into_console_error(self, operation: &str, url: &str) -> ConsoleError {
        match self {
            Self::RequestFailed(message) | Self::AuthenticationError(message) => {
                ConsoleError::request_failed(operation, &message)
            }
            Self::NetworkError(reason) => ConsoleError::network_error(operation, Some(url), None, &reason),
            Self::SerializationError(reason) => {
                ConsoleError::parse_error("JSON", None, &reason, Some(operation))
            }
        }
    }
}
