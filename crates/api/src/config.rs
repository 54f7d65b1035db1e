//! Runtime configuration.
//!
//! Loaded from a TOML file when `SLOTWATCH_CONFIG` points at one, otherwise
//! defaults apply. Every section is optional; omitted fields fall back to
//! their defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use slotwatch_domain::{Result, SlotwatchError};
use tracing::debug;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "SLOTWATCH_CONFIG";

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlotwatchConfig {
    /// Where the credential vault file lives.
    pub vault_path: PathBuf,
    /// Scan scheduler settings.
    pub scheduler: SchedulerSettings,
    /// Notification sound settings.
    pub sound: SoundSettings,
}

impl Default for SlotwatchConfig {
    fn default() -> Self {
        Self {
            vault_path: PathBuf::from("slotwatch-vault.json"),
            scheduler: SchedulerSettings::default(),
            sound: SoundSettings::default(),
        }
    }
}

/// Scan scheduler settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerSettings {
    /// Milliseconds before the first tick of a fresh session.
    pub initial_delay_ms: u64,
    /// Milliseconds `stop` waits for the scan loop to finish.
    pub join_timeout_ms: u64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self { initial_delay_ms: 2000, join_timeout_ms: 5000 }
    }
}

impl SchedulerSettings {
    /// Initial tick delay as a [`Duration`].
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Join timeout as a [`Duration`].
    #[must_use]
    pub fn join_timeout(&self) -> Duration {
        Duration::from_millis(self.join_timeout_ms)
    }
}

/// Notification sound settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoundSettings {
    /// External player program. `None` disables playback entirely.
    pub player: Option<String>,
    /// Sound file handed to the player.
    pub file: PathBuf,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self { player: None, file: PathBuf::from("notification.mp3") }
    }
}

impl SlotwatchConfig {
    /// Parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SlotwatchError::Storage`] when the file cannot be read and
    /// [`SlotwatchError::InvalidInput`] when it is not valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|error| SlotwatchError::Storage(format!("read {}: {error}", path.display())))?;
        toml::from_str(&raw).map_err(|error| {
            SlotwatchError::InvalidInput(format!("parse {}: {error}", path.display()))
        })
    }

    /// Load configuration from `SLOTWATCH_CONFIG`, or defaults.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::from_file`] errors when the variable is set.
    pub fn load() -> Result<Self> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
