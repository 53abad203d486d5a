//! Actions accepted by the store

use thiserror::Error;

/// A named state transition and its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One second elapsed; only counts down while running
    DecrementSecond,
    ToggleRunning,
    /// Restore the remaining time to the configured duration
    Reset,
    /// Replace the current task text
    ChangeTask(String),
    /// Log the current task as done at `time_end` (epoch millis)
    CompleteTask { time_end: i64 },
    /// Drop the logged task at this index
    RemoveTask(usize),
    ToggleEditStartTime,
    /// Set the countdown duration and the remaining time, in seconds
    ChangeStartTime(u64),
}

/// Reasons an action is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("task index {index} is out of range for a log of {len} entries")]
    TaskIndexOutOfRange { index: usize, len: usize },

    #[error("invalid start time '{input}': expected a whole number of seconds")]
    InvalidStartTime { input: String },
}

impl Action {
    /// Build a `ChangeStartTime` from user-entered text.
    ///
    /// Accepts a non-negative decimal integer, surrounding whitespace allowed.
    pub fn change_start_time(input: &str) -> Result<Self, ActionError> {
        input
            .trim()
            .parse::<u64>()
            .map(Action::ChangeStartTime)
            .map_err(|_| ActionError::InvalidStartTime {
                input: input.to_string(),
            })
    }

    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::DecrementSecond => "DECREMENT_SECOND",
            Action::ToggleRunning => "TOGGLE_RUNNING",
            Action::Reset => "RESET",
            Action::ChangeTask(_) => "CHANGE_TASK",
            Action::CompleteTask { .. } => "COMPLETE_TASK",
            Action::RemoveTask(_) => "REMOVE_TASK",
            Action::ToggleEditStartTime => "TOGGLE_EDIT_START_TIME",
            Action::ChangeStartTime(_) => "CHANGE_START_TIME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_time_accepts_digits() {
        assert_eq!(
            Action::change_start_time("90"),
            Ok(Action::ChangeStartTime(90))
        );
        assert_eq!(
            Action::change_start_time(" 0 "),
            Ok(Action::ChangeStartTime(0))
        );
    }

    #[test]
    fn start_time_rejects_garbage() {
        for input in ["", "abc", "-5", "1.5", "12s", "99999999999999999999999"] {
            assert!(
                matches!(
                    Action::change_start_time(input),
                    Err(ActionError::InvalidStartTime { .. })
                ),
                "accepted {input:?}"
            );
        }
    }
}
