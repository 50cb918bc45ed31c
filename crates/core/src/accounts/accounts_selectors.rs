//! Read helpers over the root state.

use crate::store::RootState;

use super::accounts_model::AccountsState;

pub fn get_accounts(state: &RootState) -> &AccountsState {
    &state.accounts
}

/// Recorded result for `identifier`, or `None` if it was never checked.
pub fn get_account(state: &RootState, identifier: &str) -> Option<bool> {
    get_accounts(state).has_account(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::store::root_reducer;

    #[test]
    fn test_get_account_distinguishes_unqueried() {
        let state = root_reducer(None, &Action::accounts_update("u1", false));

        assert_eq!(get_account(&state, "u1"), Some(false));
        assert_eq!(get_account(&state, "u2"), None);
        assert_eq!(get_accounts(&state).len(), 1);
    }
}
