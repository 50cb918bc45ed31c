//! Account-existence state and the completion payload that updates it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Known account-existence results, keyed by contact identifier.
///
/// A missing key means the identifier was never queried. `false` means the
/// lookup came back negative or failed. The map is shared between snapshots
/// and copied only when a shared snapshot is updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsState {
    accounts: Arc<BTreeMap<String, bool>>,
}

impl AccountsState {
    /// Read-only view of every recorded result.
    pub fn accounts(&self) -> &BTreeMap<String, bool> {
        &self.accounts
    }

    /// Looks up one identifier. `None` if it was never queried.
    pub fn has_account(&self, identifier: &str) -> Option<bool> {
        self.accounts.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Returns a state with `identifier` set to `has_account`.
    ///
    /// Snapshots that still hold the previous map keep seeing it unchanged.
    pub(crate) fn with_account(mut self, identifier: &str, has_account: bool) -> Self {
        Arc::make_mut(&mut self.accounts).insert(identifier.to_string(), has_account);
        self
    }

    #[cfg(test)]
    pub(crate) fn shares_storage_with(&self, other: &AccountsState) -> bool {
        Arc::ptr_eq(&self.accounts, &other.accounts)
    }
}

impl FromIterator<(String, bool)> for AccountsState {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            accounts: Arc::new(iter.into_iter().collect()),
        }
    }
}

/// Returns the initial accounts state: no identifier queried yet.
pub fn get_empty_state() -> AccountsState {
    AccountsState::default()
}

/// Outcome of one account-existence lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub identifier: String,
    pub has_account: bool,
}
