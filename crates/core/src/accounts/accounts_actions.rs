//! Action creators for the accounts slice.

use log::{debug, info};

use crate::actions::Action;
use crate::ids::ServiceId;
use crate::store::ThunkContext;

/// Deferred account-existence lookup for a single identifier.
///
/// Nothing is dispatched until [`CheckForAccount::run`] is awaited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckForAccount {
    identifier: String,
}

/// Creates the lookup that records whether `identifier` has an account.
pub fn check_for_account(identifier: impl Into<String>) -> CheckForAccount {
    info!("account check_for_account");
    CheckForAccount {
        identifier: identifier.into(),
    }
}

impl CheckForAccount {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Performs the lookup and dispatches exactly one action.
    ///
    /// Dispatches [`Action::Noop`] when no messaging transport is installed.
    /// Otherwise dispatches `accounts/UPDATE`, with `has_account = false` when
    /// the identifier is malformed or the transport fails.
    pub async fn run(self, ctx: &ThunkContext<'_>) {
        let Some(messaging) = ctx.messaging() else {
            ctx.dispatch(Action::Noop);
            return;
        };

        let mut has_account = false;

        // Failed lookups are recorded as "no account".
        if let Ok(service_id) = ServiceId::parse(&self.identifier) {
            if let Ok(exists) = messaging.check_account_existence(&service_id).await {
                has_account = exists;
            }
        }

        debug!("account lookup settled, has_account: {}", has_account);
        ctx.dispatch(Action::accounts_update(self.identifier, has_account));
    }
}
