//! Countdown tick background task

use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::state::{Action, Dispatcher};

/// Default spacing between ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that dispatches `DecrementSecond` once per `period`.
///
/// The reducer decides whether a tick actually counts down. The task ends
/// when the store owner stops receiving.
pub async fn tick_task(dispatcher: Dispatcher, period: Duration) {
    info!("Starting tick task, period={}ms", period.as_millis());

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if !dispatcher.dispatch(Action::DecrementSecond) {
            debug!("Action queue closed, stopping tick task");
            break;
        }
    }
}
