//! Display formatting for durations and completion times

use std::fmt::Display;

use chrono::{Local, TimeZone};

/// Remaining seconds as `M:SS`; minutes are not capped at 59
pub fn format_time(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Epoch milliseconds as local wall-clock `H:MM:SS`
pub fn format_clock(epoch_millis: i64) -> String {
    format_clock_in(epoch_millis, &Local)
}

/// Epoch milliseconds as `H:MM:SS` in `tz`, `-:--:--` when out of range
pub fn format_clock_in<Tz>(epoch_millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(epoch_millis).single() {
        Some(instant) => instant.format("%-H:%M:%S").to_string(),
        None => "-:--:--".to_string(),
    }
}

/// Label shown for a logged task; empty text falls back to `Task`
pub fn task_label(text: &str) -> &str {
    if text.is_empty() { "Task" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn time_pads_seconds() {
        assert_eq!(format_time(300), "5:00");
        assert_eq!(format_time(297), "4:57");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(3601), "60:01");
    }

    #[test]
    fn clock_leaves_hour_unpadded() {
        assert_eq!(format_clock_in(0, &Utc), "0:00:00");
        assert_eq!(format_clock_in(1_700_000_000_000, &Utc), "22:13:20");
        assert_eq!(format_clock_in(1_700_000_000_999, &Utc), "22:13:20");
    }

    #[test]
    fn clock_applies_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_clock_in(1_700_000_000_000, &offset), "0:13:20");
    }

    #[test]
    fn clock_out_of_range() {
        assert_eq!(format_clock_in(i64::MAX, &Utc), "-:--:--");
    }

    #[test]
    fn empty_task_label() {
        assert_eq!(task_label(""), "Task");
        assert_eq!(task_label("write spec"), "write spec");
    }
}
