//! Root state and the reducer that combines every slice.

use serde::{Deserialize, Serialize};

use crate::accounts::{self, AccountsState};
use crate::actions::Action;

/// State held by the store, one field per slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    pub accounts: AccountsState,
}

/// Applies `action` to each slice. A missing state starts from defaults.
pub fn root_reducer(state: Option<RootState>, action: &Action) -> RootState {
    let state = state.unwrap_or_default();
    RootState {
        accounts: accounts::reducer(Some(state.accounts), action),
    }
}
