//! Port interfaces for the monitoring session.
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slotwatch_domain::Result;

/// Durable key-value storage for the two credential strings.
///
/// Writes happen synchronously on every credential edit; reads happen once
/// when session state is initialized. Values are plaintext: there is no
/// schema versioning and no encryption.
#[async_trait]
pub trait CredentialVault: Send + Sync {
    /// Read a stored value, `None` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Severity of a user-facing alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Positive outcome (session started, appointment found).
    Success,
    /// Rejection or failure the user should act on.
    Error,
    /// Neutral lifecycle notice.
    Info,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Visual severity.
    pub severity: AlertSeverity,
    /// Text shown to the user.
    pub message: String,
    /// Whether the presentation layer may dismiss the alert on its own.
    /// Appointment-found alerts set this to `false` so they stay visible.
    pub auto_dismiss: bool,
}

impl Alert {
    /// Auto-dismissing success alert.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: AlertSeverity::Success, message: message.into(), auto_dismiss: true }
    }

    /// Auto-dismissing error alert.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: AlertSeverity::Error, message: message.into(), auto_dismiss: true }
    }

    /// Auto-dismissing informational alert.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: AlertSeverity::Info, message: message.into(), auto_dismiss: true }
    }

    /// Marks the alert as requiring manual dismissal.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.auto_dismiss = false;
        self
    }
}

/// Delivery channel for user-facing alerts.
///
/// The real toast UI is out of scope; the default implementation logs
/// through tracing. Delivery is fire-and-forget; implementations must not
/// fail.
#[async_trait]
pub trait AlertChannel: Send + Sync {
    /// Deliver one alert.
    async fn notify(&self, alert: Alert);
}

/// On-demand playback of the bundled notification sound.
#[async_trait]
pub trait SoundPlayer: Send + Sync {
    /// Play the notification sound at `volume` percent (0..=100).
    ///
    /// # Errors
    ///
    /// Playback failure is reported but callers treat it as best-effort and
    /// swallow the error.
    async fn play(&self, volume: u8) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_constructors_set_severity_and_dismissal() {
        let alert = Alert::success("ok");
        assert_eq!(alert.severity, AlertSeverity::Success);
        assert!(alert.auto_dismiss);

        let alert = Alert::success("stay").persistent();
        assert!(!alert.auto_dismiss);

        assert_eq!(Alert::error("no").severity, AlertSeverity::Error);
        assert_eq!(Alert::info("fyi").severity, AlertSeverity::Info);
    }
}
