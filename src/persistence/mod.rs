//! Persistence module
//!
//! Storage backends, the write throttle and the middleware that snapshots the
//! store after every transition.

pub mod middleware;
pub mod storage;
pub mod throttle;

// Re-export main types
pub use middleware::{
    load_state, open_store, save_state, PersistenceMiddleware, DEFAULT_SAVE_INTERVAL, STATE_KEY,
};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use throttle::Throttle;
