//! Courier Messaging - HTTP transport for account-existence lookups.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use courier_core::Store;
//! use courier_messaging::{MessagingClient, MessagingConfig};
//!
//! let client = MessagingClient::new(&MessagingConfig::from_env()?)?;
//! let store = Store::with_messaging(Arc::new(client));
//! store.check_for_account("3f2504e0-4f89-41d3-9a0c-0305e82c3301").await;
//! ```

mod client;
mod config;
mod error;

pub use client::MessagingClient;
pub use config::*;
pub use error::{MessagingError, Result};
