//! Activity feed entries.

use serde::{Deserialize, Serialize};

/// Category of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A scan completed without finding anything.
    Success,
    /// A synthetic scan error.
    Error,
    /// A degraded-but-not-failed scan.
    Warning,
    /// Lifecycle notices (session started/stopped).
    Info,
    /// An appointment slot was found.
    Appointment,
}

/// One immutable record in the activity feed.
///
/// Entries are created by the session engine (or its start/stop actions),
/// never mutated afterwards, and destroyed only when the bounded feed
/// truncates the oldest ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Monotonically increasing identifier, unique within a session engine.
    pub id: u64,
    /// Entry category, used for styling and for stats accounting.
    pub kind: ActivityKind,
    /// Primary message shown in the feed.
    pub message: String,
    /// Optional secondary line.
    pub details: Option<String>,
    /// Local wall-clock time, formatted `HH:MM:SS`.
    pub time: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}
