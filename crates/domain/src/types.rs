//! Common data types used throughout the application

pub mod activity;
pub mod preferences;
pub mod stats;

pub use activity::{ActivityEntry, ActivityKind};
pub use preferences::{Credentials, NotificationPrefs, Preferences};
pub use stats::ScanStats;
