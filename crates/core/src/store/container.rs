use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use log::debug;
use tokio::task::JoinHandle;

use super::dispatch::{Dispatch, ThunkContext};
use super::root::{root_reducer, RootState};
use crate::accounts::{check_for_account, AccountExistenceChecker};
use crate::actions::Action;

/// Callback invoked with the new state after every dispatch.
pub type Listener = Box<dyn Fn(&RootState) + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// In-memory state container.
///
/// Dispatches are applied one at a time under a write lock, so concurrent
/// action creators never interleave inside the reducer. The messaging
/// transport is optional and may be installed after the store is built.
pub struct Store {
    state: RwLock<RootState>,
    messaging: RwLock<Option<Arc<dyn AccountExistenceChecker>>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl Store {
    /// Creates a store with empty state and no messaging transport.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RootState::default()),
            messaging: RwLock::new(None),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    pub fn with_messaging(messaging: Arc<dyn AccountExistenceChecker>) -> Self {
        let store = Self::new();
        store.set_messaging(Some(messaging));
        store
    }

    /// Snapshot of the current state. Later dispatches do not affect it.
    pub fn get_state(&self) -> RootState {
        self.state.read().expect("store state lock poisoned").clone()
    }

    /// Installs or removes the messaging transport.
    ///
    /// Lookups already in flight keep the transport they started with.
    pub fn set_messaging(&self, messaging: Option<Arc<dyn AccountExistenceChecker>>) {
        *self.messaging.write().expect("messaging lock poisoned") = messaging;
    }

    pub fn has_messaging(&self) -> bool {
        self.messaging
            .read()
            .expect("messaging lock poisoned")
            .is_some()
    }

    /// Registers a listener called after every dispatch.
    ///
    /// Listeners run while the listener list is locked and must not
    /// subscribe, unsubscribe or dispatch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&RootState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .expect("listener lock poisoned")
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().expect("listener lock poisoned");
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Context for running action creators against this store.
    pub fn context(&self) -> ThunkContext<'_> {
        let messaging = self
            .messaging
            .read()
            .expect("messaging lock poisoned")
            .clone();
        ThunkContext::new(self, messaging)
    }

    /// Runs [`check_for_account`] with this store as dispatcher.
    ///
    /// The caller must drive the returned future to completion. Dropping it
    /// mid-lookup dispatches nothing; use
    /// [`Store::spawn_check_for_account`] when the lookup has to outlive
    /// the caller.
    pub async fn check_for_account(&self, identifier: impl Into<String>) {
        let thunk = check_for_account(identifier);
        thunk.run(&self.context()).await;
    }

    /// Starts [`check_for_account`] on the tokio runtime.
    ///
    /// The lookup always runs to completion and dispatches exactly one action,
    /// even if the returned handle is dropped. Must be called from within a
    /// tokio runtime.
    pub fn spawn_check_for_account(
        self: &Arc<Self>,
        identifier: impl Into<String>,
    ) -> JoinHandle<()> {
        let thunk = check_for_account(identifier);
        let store = Arc::clone(self);
        tokio::spawn(async move {
            thunk.run(&store.context()).await;
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        debug!("dispatch {}", action.kind());

        let next = {
            let mut state = self.state.write().expect("store state lock poisoned");
            let previous = std::mem::take(&mut *state);
            *state = root_reducer(Some(previous), &action);
            state.clone()
        };

        for (_, listener) in self.listeners.lock().expect("listener lock poisoned").iter() {
            listener(&next);
        }
    }
}
