//! Core error types for Courier.
//!
//! Transport crates convert their own errors into [`Error::Transport`] at the
//! [`AccountExistenceChecker`](crate::accounts::AccountExistenceChecker)
//! boundary, which keeps this type free of HTTP-specific details.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for Courier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raw identifier is not a hyphenated UUID.
    #[error("Invalid service id: '{0}'")]
    InvalidServiceId(String),

    /// The messaging transport failed to answer.
    #[error("Messaging transport failed: {0}")]
    Transport(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}
