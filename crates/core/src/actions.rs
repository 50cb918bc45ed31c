//! Messages folded into the store by reducers.

use serde::{Deserialize, Serialize};

use crate::accounts::AccountUpdate;

/// Every message the store understands.
///
/// Serializes to the `{ "type": ..., "payload": ... }` shape used on the
/// wire and in logs. `NOOP` carries `"payload": null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireAction", from = "WireAction")]
pub enum Action {
    /// Nothing happened. Reducers return their state unchanged.
    Noop,

    /// A single account-existence lookup settled.
    AccountsUpdate(AccountUpdate),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
enum WireAction {
    #[serde(rename = "NOOP")]
    Noop(()),

    #[serde(rename = "accounts/UPDATE")]
    AccountsUpdate(AccountUpdate),
}

impl From<Action> for WireAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Noop => WireAction::Noop(()),
            Action::AccountsUpdate(update) => WireAction::AccountsUpdate(update),
        }
    }
}

impl From<WireAction> for Action {
    fn from(wire: WireAction) -> Self {
        match wire {
            WireAction::Noop(()) => Action::Noop,
            WireAction::AccountsUpdate(update) => Action::AccountsUpdate(update),
        }
    }
}

impl Action {
    /// Creates an AccountsUpdate action.
    pub fn accounts_update(identifier: impl Into<String>, has_account: bool) -> Self {
        Self::AccountsUpdate(AccountUpdate {
            identifier: identifier.into(),
            has_account,
        })
    }

    /// The wire `type` tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Noop => "NOOP",
            Action::AccountsUpdate(_) => "accounts/UPDATE",
        }
    }
}
