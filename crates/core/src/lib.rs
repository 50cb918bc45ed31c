//! Courier Core - contact account-existence state, actions and store.
//!
//! This crate is transport-agnostic. It defines the
//! [`AccountExistenceChecker`](accounts::AccountExistenceChecker) trait that
//! the `courier-messaging` crate implements over HTTP.

pub mod accounts;
pub mod actions;
pub mod errors;
pub mod ids;
pub mod store;

pub use actions::Action;
pub use ids::ServiceId;
pub use store::{Dispatch, RootState, Store};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
