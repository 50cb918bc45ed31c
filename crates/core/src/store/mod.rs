//! Store module - root state, dispatch seam and the state container.

mod container;
mod dispatch;
mod root;

pub use container::{Listener, Store, SubscriptionId};
pub use dispatch::{Dispatch, RecordingDispatch, ThunkContext};
pub use root::{root_reducer, RootState};
