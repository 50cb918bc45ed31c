//! Messaging transport contract used by the accounts slice.

use async_trait::async_trait;

use crate::errors::Result;
use crate::ids::ServiceId;

/// Capability to ask the messaging service whether an account exists.
///
/// Implemented by the HTTP transport in `courier-messaging`; tests provide
/// their own in-memory implementations.
#[async_trait]
pub trait AccountExistenceChecker: Send + Sync {
    /// Returns `true` if the service knows an account for `service_id`.
    ///
    /// A confirmed absence is `Ok(false)`. Errors are reserved for lookups
    /// that could not be answered.
    async fn check_account_existence(&self, service_id: &ServiceId) -> Result<bool>;
}
