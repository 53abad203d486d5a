//! Task Timer - A terminal countdown timer with a persistent task log
//!
//! This library provides the timer state machine, the store that drives it,
//! throttled snapshot persistence, the tick task and the terminal UI.

pub mod config;
pub mod persistence;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use persistence::{open_store, FileStorage};
pub use state::{Action, Dispatcher, Store, TimerState};
