//! Error types for the messaging crate.

use thiserror::Error;

/// Result type alias for messaging operations.
pub type Result<T> = std::result::Result<T, MessagingError>;

/// Errors that can occur while talking to the messaging service.
#[derive(Debug, Error)]
pub enum MessagingError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected status from the messaging service
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MessagingError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

impl From<MessagingError> for courier_core::Error {
    fn from(err: MessagingError) -> Self {
        courier_core::Error::transport(err.to_string())
    }
}
