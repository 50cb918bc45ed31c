//! Dispatch seam between action creators and the store.

use std::sync::{Arc, Mutex};

use crate::accounts::AccountExistenceChecker;
use crate::actions::Action;

/// Receiver of actions produced by action creators.
///
/// # Design Rules
///
/// - `dispatch()` applies the action before returning and never fails
/// - Implementations serialize concurrent dispatches
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

/// Everything an action creator may touch while it runs.
pub struct ThunkContext<'a> {
    dispatch: &'a dyn Dispatch,
    messaging: Option<Arc<dyn AccountExistenceChecker>>,
}

impl<'a> ThunkContext<'a> {
    pub fn new(
        dispatch: &'a dyn Dispatch,
        messaging: Option<Arc<dyn AccountExistenceChecker>>,
    ) -> Self {
        Self {
            dispatch,
            messaging,
        }
    }

    pub fn dispatch(&self, action: Action) {
        self.dispatch.dispatch(action);
    }

    /// The messaging transport, if one has been installed.
    pub fn messaging(&self) -> Option<&dyn AccountExistenceChecker> {
        self.messaging.as_deref()
    }
}

/// Dispatcher that records actions instead of applying them.
#[derive(Clone, Default)]
pub struct RecordingDispatch {
    actions: Arc<Mutex<Vec<Action>>>,
}

impl RecordingDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded actions in dispatch order.
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    /// Clears recorded actions.
    pub fn clear(&self) {
        self.actions.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.actions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.lock().unwrap().is_empty()
    }
}

impl Dispatch for RecordingDispatch {
    fn dispatch(&self, action: Action) {
        self.actions.lock().unwrap().push(action);
    }
}
