//! Accounts module - account-existence state, action creators and reducer.

mod accounts_actions;
mod accounts_model;
mod accounts_reducer;
mod accounts_selectors;
mod accounts_traits;


// Re-export the public interface
pub use accounts_actions::{check_for_account, CheckForAccount};
pub use accounts_model::{get_empty_state, AccountUpdate, AccountsState};
pub use accounts_reducer::reducer;
pub use accounts_selectors::{get_account, get_accounts};
pub use accounts_traits::AccountExistenceChecker;
