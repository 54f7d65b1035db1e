//! Monitoring session engine - core business logic
//!
//! The engine owns all session state: preferences, credentials, the bounded
//! activity feed, the scan counters, and the `Idle`/`Running` flag. One
//! [`tick`](SessionEngine::tick) synthesizes exactly one weighted-random
//! outcome. Pacing and cancellation live in the infra scheduler; the engine
//! re-checks its own state at the top of every tick, so a tick that was
//! already queued when the session stopped becomes a no-op instead of
//! appending stale entries.

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Local, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use slotwatch_common::time::format_clock_time;
use slotwatch_common::HistoryBuffer;
use slotwatch_domain::catalog::CountryId;
use slotwatch_domain::constants::{
    ACTIVITY_LOG_CAPACITY, MAX_SCAN_INTERVAL_SECS, MIN_SCAN_INTERVAL_SECS, VAULT_KEY_EMAIL,
    VAULT_KEY_PASSWORD,
};
use slotwatch_domain::{
    ActivityEntry, ActivityKind, Credentials, NotificationPrefs, Preferences, Result, ScanStats,
    SlotwatchError,
};
use tracing::{debug, info};

use super::outcome::{
    appointment_offset_days, pick_uniform, scan_error_message, Outcome, OutcomeTable,
};
use super::ports::{Alert, AlertChannel, CredentialVault, SoundPlayer};

/// Binary session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No monitoring session is active.
    Idle,
    /// A monitoring session is generating synthetic scans.
    Running,
}

/// Monitoring session engine.
pub struct SessionEngine {
    preferences: Preferences,
    credentials: Credentials,
    activities: HistoryBuffer<ActivityEntry>,
    stats: ScanStats,
    next_entry_id: u64,
    state: SessionState,
    outcomes: OutcomeTable,
    rng: StdRng,
    vault: Arc<dyn CredentialVault>,
    alerts: Arc<dyn AlertChannel>,
    sound: Arc<dyn SoundPlayer>,
}

impl SessionEngine {
    /// Create an engine with default preferences and an entropy-seeded RNG.
    pub fn new(
        vault: Arc<dyn CredentialVault>,
        alerts: Arc<dyn AlertChannel>,
        sound: Arc<dyn SoundPlayer>,
    ) -> Self {
        Self::with_rng(vault, alerts, sound, StdRng::from_entropy())
    }

    /// Create an engine with a caller-provided RNG.
    ///
    /// Tests seed the RNG to make outcome sequences reproducible.
    pub fn with_rng(
        vault: Arc<dyn CredentialVault>,
        alerts: Arc<dyn AlertChannel>,
        sound: Arc<dyn SoundPlayer>,
        rng: StdRng,
    ) -> Self {
        Self {
            preferences: Preferences::default(),
            credentials: Credentials::default(),
            activities: HistoryBuffer::new(ACTIVITY_LOG_CAPACITY),
            stats: ScanStats::default(),
            next_entry_id: 1,
            state: SessionState::Idle,
            outcomes: OutcomeTable::default(),
            rng,
            vault,
            alerts,
            sound,
        }
    }

    /// Replace the outcome table (used by tests to force a branch).
    #[must_use]
    pub fn with_outcome_table(mut self, outcomes: OutcomeTable) -> Self {
        self.outcomes = outcomes;
        self
    }

    /// Load the two persisted credential strings from the vault.
    ///
    /// Called once when session state is initialized; missing keys leave the
    /// corresponding field empty.
    pub async fn hydrate_credentials(&mut self) -> Result<()> {
        if let Some(email) = self.vault.get(VAULT_KEY_EMAIL).await? {
            self.credentials.email = email;
        }
        if let Some(password) = self.vault.get(VAULT_KEY_PASSWORD).await? {
            self.credentials.password = password;
        }
        Ok(())
    }

    /* ---------------------------------------------------------------- */
    /* Read model                                                        */
    /* ---------------------------------------------------------------- */

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Convenience for `state() == Running`.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Current preferences.
    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Current credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current scan counters.
    #[must_use]
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Newest-first snapshot of the activity feed.
    #[must_use]
    pub fn activities(&self) -> Vec<ActivityEntry> {
        self.activities.snapshot()
    }

    /// Configured scan interval as a [`std::time::Duration`].
    #[must_use]
    pub fn scan_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.preferences.scan_interval_secs))
    }

    /* ---------------------------------------------------------------- */
    /* Preference mutation                                               */
    /* ---------------------------------------------------------------- */

    /// Select a country. Always clears the office selection, because office
    /// names repeat across countries.
    pub fn set_country(&mut self, country: CountryId) {
        self.preferences.selected_country = country;
        self.preferences.selected_offices.clear();
    }

    /// Add or remove one office from the selection.
    ///
    /// # Errors
    ///
    /// Rejects offices that do not belong to the selected country.
    pub fn toggle_office(&mut self, office: &str) -> Result<()> {
        let country = self.preferences.selected_country;
        if !country.has_office(office) {
            return Err(SlotwatchError::InvalidInput(format!(
                "office {office:?} does not belong to {}",
                country.as_str()
            )));
        }

        let offices = &mut self.preferences.selected_offices;
        if let Some(idx) = offices.iter().position(|o| o == office) {
            offices.remove(idx);
        } else {
            offices.push(office.to_string());
        }
        Ok(())
    }

    /// Set the scan interval in seconds.
    ///
    /// # Errors
    ///
    /// Rejects values outside 60..=3600.
    pub fn set_scan_interval(&mut self, secs: u32) -> Result<()> {
        if !(MIN_SCAN_INTERVAL_SECS..=MAX_SCAN_INTERVAL_SECS).contains(&secs) {
            return Err(SlotwatchError::InvalidInput(format!(
                "scan interval must be between {MIN_SCAN_INTERVAL_SECS} and \
                 {MAX_SCAN_INTERVAL_SECS} seconds, got {secs}"
            )));
        }
        self.preferences.scan_interval_secs = secs;
        Ok(())
    }

    /// Replace the notification settings.
    ///
    /// # Errors
    ///
    /// Rejects volumes above 100 percent.
    pub fn set_notifications(&mut self, notifications: NotificationPrefs) -> Result<()> {
        if notifications.volume > 100 {
            return Err(SlotwatchError::InvalidInput(format!(
                "volume must be 0..=100, got {}",
                notifications.volume
            )));
        }
        self.preferences.notifications = notifications;
        Ok(())
    }

    /* ---------------------------------------------------------------- */
    /* Credential mutation                                               */
    /* ---------------------------------------------------------------- */

    /// Update the account email and write it through to the vault.
    pub async fn set_email(&mut self, email: String) -> Result<()> {
        self.vault.set(VAULT_KEY_EMAIL, &email).await?;
        self.credentials.email = email;
        Ok(())
    }

    /// Update the account password and write it through to the vault.
    pub async fn set_password(&mut self, password: String) -> Result<()> {
        self.vault.set(VAULT_KEY_PASSWORD, &password).await?;
        self.credentials.password = password;
        Ok(())
    }

    /* ---------------------------------------------------------------- */
    /* Session lifecycle                                                 */
    /* ---------------------------------------------------------------- */

    /// Start a monitoring session.
    ///
    /// Preconditions are checked in order and each failure leaves the state
    /// untouched: at least one office must be selected, then both credential
    /// fields must be non-empty.
    ///
    /// # Errors
    ///
    /// [`SlotwatchError::AlreadyRunning`], [`SlotwatchError::NoOfficesSelected`]
    /// or [`SlotwatchError::MissingCredentials`].
    pub async fn start(&mut self) -> Result<()> {
        if self.state == SessionState::Running {
            return Err(SlotwatchError::AlreadyRunning);
        }

        if self.preferences.selected_offices.is_empty() {
            self.alerts.notify(Alert::error("Lütfen en az bir ofis seçin!")).await;
            return Err(SlotwatchError::NoOfficesSelected);
        }

        if !self.credentials.is_complete() {
            self.alerts.notify(Alert::error("VFS hesap bilgilerinizi ayarlardan girin!")).await;
            return Err(SlotwatchError::MissingCredentials);
        }

        let office_count = self.preferences.selected_offices.len();
        self.state = SessionState::Running;
        self.push_entry(
            ActivityKind::Info,
            "Tarama başlatıldı".to_string(),
            Some(format!("{office_count} ofis taranıyor")),
        );
        self.alerts.notify(Alert::success("VFS taraması başlatıldı!")).await;
        info!(office_count, "monitoring session started");
        Ok(())
    }

    /// Stop the running monitoring session.
    ///
    /// # Errors
    ///
    /// [`SlotwatchError::NotRunning`] when no session is active.
    pub async fn stop(&mut self) -> Result<()> {
        if self.state != SessionState::Running {
            return Err(SlotwatchError::NotRunning);
        }

        self.state = SessionState::Idle;
        self.push_entry(
            ActivityKind::Info,
            "Tarama durduruldu".to_string(),
            Some("Kullanıcı tarafından sonlandırıldı".to_string()),
        );
        self.alerts.notify(Alert::info("Tarama durduruldu")).await;
        info!("monitoring session stopped");
        Ok(())
    }

    /// Perform one synthetic scan.
    ///
    /// The state check at the top makes cancellation authoritative: a tick
    /// that was queued before [`stop`](Self::stop) ran observes `Idle` here
    /// and does nothing.
    pub async fn tick(&mut self) {
        if self.state != SessionState::Running {
            debug!("tick skipped, session not running");
            return;
        }

        let offices = self.preferences.selected_offices.clone();
        let outcome = self.outcomes.draw(&mut self.rng);
        debug!(?outcome, "synthetic scan tick");

        match outcome {
            Outcome::Success => match pick_uniform(&mut self.rng, &offices) {
                Some(office) => {
                    let message = format!("{office} taraması tamamlandı");
                    self.push_entry(
                        ActivityKind::Success,
                        message,
                        Some("Randevu bulunamadı".to_string()),
                    );
                }
                None => self.push_empty_office_warning(),
            },
            Outcome::Error => {
                let message = scan_error_message(&mut self.rng).to_string();
                self.push_entry(
                    ActivityKind::Error,
                    message,
                    Some("VFS sistem hatası".to_string()),
                );
                self.stats.errors += 1;
            }
            Outcome::Warning => {
                self.push_entry(ActivityKind::Warning, "Tarama uyarısı".to_string(), None);
            }
            Outcome::Appointment => match pick_uniform(&mut self.rng, &offices).cloned() {
                Some(office) => self.handle_appointment(office).await,
                None => self.push_empty_office_warning(),
            },
        }

        self.stats.total_scans += 1;
        self.stats.last_scan = Some(format_clock_time(Local::now()));
    }

    async fn handle_appointment(&mut self, office: String) {
        let days = appointment_offset_days(&mut self.rng);
        let date = (Local::now() + ChronoDuration::days(days)).format("%d.%m.%Y");

        self.push_entry(
            ActivityKind::Appointment,
            format!("RANDEVU BULUNDU! {office}"),
            Some(format!("Tarih: {date} - Hemen rezerve edin!")),
        );
        self.stats.appointments_found += 1;

        // The appointment alert must stay until the user dismisses it.
        self.alerts
            .notify(Alert::success(format!("{office} ofisinde randevu bulundu!")).persistent())
            .await;

        if self.preferences.notifications.sound {
            let volume = self.preferences.notifications.volume;
            if let Err(error) = self.sound.play(volume).await {
                debug!(%error, "notification sound playback failed");
            }
        }
    }

    fn push_empty_office_warning(&mut self) {
        // Reachable only when the country changed while a session was live.
        self.push_entry(ActivityKind::Warning, "Ofis listesi boş".to_string(), None);
    }

    fn push_entry(&mut self, kind: ActivityKind, message: String, details: Option<String>) {
        let id = self.next_entry_id;
        self.next_entry_id += 1;

        self.activities.push(ActivityEntry {
            id,
            kind,
            message,
            details,
            time: format_clock_time(Local::now()),
            timestamp_ms: Utc::now().timestamp_millis(),
        });
    }
}
