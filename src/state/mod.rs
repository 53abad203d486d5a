//! State management module
//!
//! This module contains the timer state, the actions that change it, the pure
//! reducer and the store that ties them together.

pub mod action;
pub mod dispatcher;
pub mod reducer;
pub mod store;
pub mod timer_state;

// Re-export main types
pub use action::{Action, ActionError};
pub use dispatcher::Dispatcher;
pub use reducer::reduce;
pub use store::{Middleware, Store, Subscription};
pub use timer_state::{CompletedTask, TimerState, DEFAULT_START_TIME};
