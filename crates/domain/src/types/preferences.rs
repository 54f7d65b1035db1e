//! User-facing monitoring preferences and account credentials.

use serde::{Deserialize, Serialize};

use crate::catalog::CountryId;
use crate::constants::{DEFAULT_SCAN_INTERVAL_SECS, DEFAULT_VOLUME};

/// Monitoring preferences edited through the dashboard forms.
///
/// Invariant: `selected_offices` is always a subset of the selected
/// country's office list. The session engine enforces this on every
/// mutation; in particular, changing the country clears the office set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Destination country whose offices are being monitored.
    pub selected_country: CountryId,
    /// Offices to scan, in the order the user picked them.
    pub selected_offices: Vec<String>,
    /// Seconds between synthetic scans; domain range is 60..=3600.
    pub scan_interval_secs: u32,
    /// Notification channel toggles.
    pub notifications: NotificationPrefs,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            selected_country: CountryId::default(),
            selected_offices: Vec::new(),
            scan_interval_secs: DEFAULT_SCAN_INTERVAL_SECS,
            notifications: NotificationPrefs::default(),
        }
    }
}

/// Notification channel settings.
///
/// Only the sound channel has a local effect (a best-effort preview play);
/// telegram and email are forwarded to collaborators that do not exist in
/// this build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    /// Send a Telegram message when an appointment is found.
    pub telegram: bool,
    /// Send an email when an appointment is found.
    pub email: bool,
    /// Play a sound when an appointment is found.
    pub sound: bool,
    /// Playback volume, percent (0..=100).
    pub volume: u8,
    /// Address used when `email` is enabled.
    pub email_address: String,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            telegram: true,
            email: false,
            sound: true,
            volume: DEFAULT_VOLUME,
            email_address: String::new(),
        }
    }
}

/// Account credentials gating session start.
///
/// Stored plaintext in the credential vault; both fields must be non-empty
/// before a monitoring session may start. No format validation is applied
/// here; see the mock validator in the core crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Returns `true` when both fields are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.selected_country, CountryId::Netherlands);
        assert!(prefs.selected_offices.is_empty());
        assert_eq!(prefs.scan_interval_secs, 300);
        assert!(prefs.notifications.telegram);
        assert!(!prefs.notifications.email);
        assert!(prefs.notifications.sound);
        assert_eq!(prefs.notifications.volume, 80);
        assert!(prefs.notifications.email_address.is_empty());
    }

    #[test]
    fn credentials_complete_only_when_both_fields_set() {
        assert!(!Credentials::default().is_complete());
        assert!(!Credentials { email: "a@b.c".into(), password: String::new() }.is_complete());
        assert!(!Credentials { email: String::new(), password: "secret".into() }.is_complete());
        assert!(Credentials { email: "a@b.c".into(), password: "secret".into() }.is_complete());
    }
}
