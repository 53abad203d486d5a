//! Timer state structure and snapshot serialization

use serde::{Deserialize, Serialize};

/// Countdown length used when no snapshot exists (five minutes)
pub const DEFAULT_START_TIME: u64 = 5 * 60;

/// A task that was marked done, with the instant it was completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub text: String,
    /// Completion instant in milliseconds since the Unix epoch
    pub time_end: i64,
}

impl CompletedTask {
    pub fn new(text: impl Into<String>, time_end: i64) -> Self {
        Self {
            text: text.into(),
            time_end,
        }
    }
}

/// Whole application state: countdown, current task and the completed-task log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Configured countdown duration in seconds
    pub start_time: u64,
    /// Remaining seconds, never below zero
    pub time: u64,
    pub running: bool,
    /// Text of the task currently being worked on
    pub task: String,
    pub tasks: Vec<CompletedTask>,
    /// Whether the start-time editor is open
    pub edit_start_time: bool,
}

impl TimerState {
    /// Create the initial state used when nothing was persisted
    pub fn new() -> Self {
        Self {
            start_time: DEFAULT_START_TIME,
            time: DEFAULT_START_TIME,
            running: false,
            task: String::new(),
            tasks: Vec::new(),
            edit_start_time: false,
        }
    }

    /// Serialize into the snapshot text stored on disk
    pub fn to_snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot, failing on anything that is not a complete state record
    pub fn from_snapshot(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Check if the countdown has reached zero
    pub fn is_finished(&self) -> bool {
        self.time == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_minutes_idle() {
        let state = TimerState::default();
        assert_eq!(state.start_time, 300);
        assert_eq!(state.time, 300);
        assert!(!state.running);
        assert!(state.task.is_empty());
        assert!(state.tasks.is_empty());
        assert!(!state.edit_start_time);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let mut state = TimerState::new();
        state.tasks.push(CompletedTask::new("a", 1));
        let json: serde_json::Value = serde_json::from_str(&state.to_snapshot().unwrap()).unwrap();

        assert_eq!(json["startTime"], 300);
        assert_eq!(json["editStartTime"], false);
        assert_eq!(json["tasks"][0]["timeEnd"], 1);
        assert_eq!(json["tasks"][0]["text"], "a");
    }

    #[test]
    fn snapshot_round_trip_preserves_every_field() {
        let state = TimerState {
            start_time: 90,
            time: 12,
            running: true,
            task: "café ☕ \"quoted\"\nsecond line".to_string(),
            tasks: vec![
                CompletedTask::new("first", 1_700_000_000_000),
                CompletedTask::new("", -5),
            ],
            edit_start_time: true,
        };

        let text = state.to_snapshot().unwrap();
        assert_eq!(TimerState::from_snapshot(&text).unwrap(), state);
    }

    #[test]
    fn partial_snapshot_is_rejected() {
        assert!(TimerState::from_snapshot(r#"{"startTime":300,"time":300}"#).is_err());
    }

    #[test]
    fn negative_or_non_numeric_time_is_rejected() {
        let negative = r#"{"startTime":-1,"time":0,"running":false,"task":"","tasks":[],"editStartTime":false}"#;
        let nan = r#"{"startTime":null,"time":null,"running":false,"task":"","tasks":[],"editStartTime":false}"#;
        assert!(TimerState::from_snapshot(negative).is_err());
        assert!(TimerState::from_snapshot(nan).is_err());
    }
}
