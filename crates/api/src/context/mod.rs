//! Application context - dependency injection container

use std::sync::Arc;

use slotwatch_core::{AlertChannel, CredentialVault, SessionEngine, SoundPlayer};
use slotwatch_domain::Result;
use slotwatch_infra::{
    CommandSoundPlayer, FileVault, NullSoundPlayer, SessionScheduler, SessionSchedulerConfig,
    TracingAlertChannel,
};
use tokio::sync::Mutex;
use tracing::info;

use crate::config::SlotwatchConfig;

/// Application context - holds the engine, scheduler and port adapters.
pub struct AppContext {
    /// Loaded configuration.
    pub config: SlotwatchConfig,
    /// Shared session engine. The scheduler ticks it; commands mutate it.
    pub engine: Arc<Mutex<SessionEngine>>,
    /// Scan scheduler driving the engine.
    pub scheduler: Mutex<SessionScheduler>,
    /// Sound player, also used directly by the sound test command.
    pub sound: Arc<dyn SoundPlayer>,
}

impl AppContext {
    /// Wire all services from configuration.
    ///
    /// Opens the credential vault and hydrates the engine's credentials from
    /// it, so a restart picks up what earlier edits persisted.
    ///
    /// # Errors
    ///
    /// Fails when the vault file exists but cannot be read or parsed.
    pub async fn initialize(config: SlotwatchConfig) -> Result<Arc<Self>> {
        let vault: Arc<dyn CredentialVault> = Arc::new(FileVault::open(&config.vault_path)?);
        let alerts: Arc<dyn AlertChannel> = Arc::new(TracingAlertChannel);
        let sound: Arc<dyn SoundPlayer> = match &config.sound.player {
            Some(program) => {
                Arc::new(CommandSoundPlayer::new(program.clone(), config.sound.file.clone()))
            }
            None => Arc::new(NullSoundPlayer),
        };

        let mut engine = SessionEngine::new(vault, alerts, Arc::clone(&sound));
        engine.hydrate_credentials().await?;
        let engine = Arc::new(Mutex::new(engine));

        let scheduler_config = SessionSchedulerConfig {
            initial_delay: config.scheduler.initial_delay(),
            join_timeout: config.scheduler.join_timeout(),
        };
        let scheduler = SessionScheduler::new(Arc::clone(&engine), scheduler_config);

        info!(vault_path = %config.vault_path.display(), "application context initialized");
        Ok(Arc::new(Self { config, engine, scheduler: Mutex::new(scheduler), sound }))
    }

    /// Stop the scheduler and the session, if either is still active.
    ///
    /// # Errors
    ///
    /// Propagates scheduler join failures.
    pub async fn shutdown(&self) -> Result<()> {
        let mut scheduler = self.scheduler.lock().await;
        if scheduler.is_running() {
            scheduler.stop().await?;
        }
        drop(scheduler);

        let mut engine = self.engine.lock().await;
        if engine.is_running() {
            engine.stop().await?;
        }

        info!("application context shut down");
        Ok(())
    }
}
