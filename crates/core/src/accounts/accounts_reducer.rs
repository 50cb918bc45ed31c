use crate::actions::Action;

use super::accounts_model::{get_empty_state, AccountsState};

/// Folds an action into the accounts state.
///
/// A missing state starts from [`get_empty_state`]. Only `accounts/UPDATE`
/// changes anything; every other action returns the state as given.
pub fn reducer(state: Option<AccountsState>, action: &Action) -> AccountsState {
    let state = state.unwrap_or_else(get_empty_state);

    match action {
        Action::AccountsUpdate(update) => {
            state.with_account(&update.identifier, update.has_account)
        }
        Action::Noop => state,
    }
}
