//! Terminal user interface
//!
//! Renders the timer state with ratatui and turns key presses into actions.
//! The rest of the crate does not depend on anything in here.

pub mod app;
pub mod format;
pub mod render;
pub mod runtime;
pub mod terminal_guard;

pub use app::{App, Focus};
pub use runtime::run;
