//! Human-readable time formatting.

use std::time::Duration;

use chrono::{DateTime, Local};

/// Formats a local timestamp as `HH:MM:SS`, the form shown in the activity
/// feed and the "last scan" stat.
#[must_use]
pub fn format_clock_time(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Formats a wait duration at the coarsest useful unit: `"2h 5m"`,
/// `"3m 20s"`, or `"45s"`.
#[must_use]
pub fn format_wait_time(wait: Duration) -> String {
    let seconds = wait.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}
