//! Background tasks module
//!
//! This module contains background tasks that run alongside the terminal UI.

pub mod ticker;

// Re-export main functions
pub use ticker::{tick_task, TICK_PERIOD};
