//! Leading-edge throttle

use std::time::{Duration, Instant};

/// Allows at most one event per `interval`, letting the first one in each
/// window through
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_flush: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_flush: None,
        }
    }

    /// Returns true and opens a new window when `now` is outside the current one
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let open = match self.last_flush {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if open {
            self.last_flush = Some(now);
        }
        open
    }

    /// Record a flush that bypassed the throttle
    pub fn mark(&mut self, now: Instant) {
        self.last_flush = Some(now);
    }
}
