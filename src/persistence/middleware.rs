//! Snapshot loading and throttled snapshot writes

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{Storage, Throttle};
use crate::state::{Action, Middleware, Store, TimerState};

/// Key the snapshot lives under
pub const STATE_KEY: &str = "state";

/// Default minimum spacing between snapshot writes
pub const DEFAULT_SAVE_INTERVAL: Duration = Duration::from_millis(1000);

/// Read the last snapshot, if there is a usable one.
///
/// Missing data, unreadable storage and corrupted text all yield `None`.
pub fn load_state(storage: &dyn Storage) -> Option<TimerState> {
    let text = match storage.get_item(STATE_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!("No stored snapshot");
            return None;
        }
        Err(e) => {
            warn!("Could not read snapshot: {}", e);
            return None;
        }
    };

    match TimerState::from_snapshot(&text) {
        Ok(state) => {
            info!("Restored snapshot with {} logged tasks", state.tasks.len());
            Some(state)
        }
        Err(e) => {
            warn!("Ignoring corrupted snapshot: {}", e);
            None
        }
    }
}

/// Write `state` under [`STATE_KEY`]. Failures are logged and dropped.
pub fn save_state(storage: &mut dyn Storage, state: &TimerState) -> bool {
    let text = match state.to_snapshot() {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not serialize snapshot: {}", e);
            return false;
        }
    };

    match storage.set_item(STATE_KEY, &text) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not write snapshot: {}", e);
            false
        }
    }
}

/// Persists the committed state at most once per interval.
///
/// Transitions that land inside a closed window leave a pending flag; the
/// next open window or an explicit flush writes the latest state.
pub struct PersistenceMiddleware<S> {
    storage: S,
    throttle: Throttle,
    pending: bool,
}

impl<S: Storage> PersistenceMiddleware<S> {
    pub fn new(storage: S, interval: Duration) -> Self {
        Self {
            storage,
            throttle: Throttle::new(interval),
            pending: false,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether a change is waiting for the next write
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Handle one committed state observed at `now`
    pub fn persist_at(&mut self, state: &TimerState, now: Instant) {
        if self.throttle.try_acquire(now) {
            save_state(&mut self.storage, state);
            self.pending = false;
        } else {
            self.pending = true;
        }
    }

    /// Write `state` if a change is pending, ignoring the throttle
    pub fn flush_at(&mut self, state: &TimerState, now: Instant) {
        if !self.pending {
            return;
        }
        debug!("Flushing pending snapshot");
        save_state(&mut self.storage, state);
        self.throttle.mark(now);
        self.pending = false;
    }
}

impl<S: Storage> Middleware for PersistenceMiddleware<S> {
    fn after_commit(&mut self, _action: &Action, state: &TimerState) {
        self.persist_at(state, Instant::now());
    }

    fn flush(&mut self, state: &TimerState) {
        self.flush_at(state, Instant::now());
    }
}

/// Build a store seeded from `storage` that keeps writing back to it.
///
/// With `fresh` set any existing snapshot is ignored and later overwritten.
pub fn open_store<S: Storage + 'static>(storage: S, interval: Duration, fresh: bool) -> Store {
    let initial = if fresh {
        info!("Starting fresh, ignoring any stored snapshot");
        TimerState::default()
    } else {
        load_state(&storage).unwrap_or_default()
    };

    let mut store = Store::new(initial);
    store.add_middleware(Box::new(PersistenceMiddleware::new(storage, interval)));
    store
}
