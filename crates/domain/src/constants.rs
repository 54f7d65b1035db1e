//! Domain constants shared by the session engine and its callers.

use std::time::Duration;

/// Maximum number of entries kept in the activity feed.
pub const ACTIVITY_LOG_CAPACITY: usize = 50;

/// Delay between session start and the first synthetic scan.
pub const INITIAL_TICK_DELAY: Duration = Duration::from_secs(2);

/// Smallest accepted scan interval, in seconds.
pub const MIN_SCAN_INTERVAL_SECS: u32 = 60;

/// Largest accepted scan interval, in seconds.
pub const MAX_SCAN_INTERVAL_SECS: u32 = 3600;

/// Default scan interval, in seconds.
pub const DEFAULT_SCAN_INTERVAL_SECS: u32 = 300;

/// Default notification volume, percent.
pub const DEFAULT_VOLUME: u8 = 80;

/// Outcome weights in draw order: success, error, warning, appointment.
pub const OUTCOME_WEIGHTS: [f64; 4] = [0.70, 0.20, 0.08, 0.02];

/// Synthetic scan error messages, drawn uniformly on the error outcome.
pub const SCAN_ERROR_MESSAGES: [&str; 4] = [
    "Bağlantı hatası",
    "Kimlik doğrulama hatası",
    "Rate limit aşıldı",
    "Sayfa yüklenemedi",
];

/// Farthest a synthetic appointment date may lie in the future, in days.
pub const APPOINTMENT_HORIZON_DAYS: i64 = 30;

/// Vault key under which the account email is persisted.
pub const VAULT_KEY_EMAIL: &str = "vfs_email";

/// Vault key under which the account password is persisted.
pub const VAULT_KEY_PASSWORD: &str = "vfs_password";
