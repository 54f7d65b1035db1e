//! Scan scheduler for the monitoring session.
//!
//! Drives [`SessionEngine::tick`] on a fixed cadence: the first tick fires
//! after a short initial delay so the user sees activity right away, every
//! later tick waits the full scan interval. Cancellation goes through a
//! [`CancellationToken`]; the engine additionally re-checks its own state at
//! the top of each tick, so a tick that won the `select!` race against
//! cancellation still does nothing once the session has stopped.

use std::sync::Arc;
use std::time::Duration;

use slotwatch_core::SessionEngine;
use slotwatch_domain::constants::INITIAL_TICK_DELAY;
use slotwatch_domain::{Result, SlotwatchError};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the scan scheduler.
#[derive(Debug, Clone)]
pub struct SessionSchedulerConfig {
    /// Delay before the first tick of a fresh session.
    pub initial_delay: Duration,
    /// How long `stop` waits for the background task to finish.
    pub join_timeout: Duration,
}

impl Default for SessionSchedulerConfig {
    fn default() -> Self {
        Self { initial_delay: INITIAL_TICK_DELAY, join_timeout: Duration::from_secs(5) }
    }
}

/// Interval scheduler that drives the shared session engine.
pub struct SessionScheduler {
    engine: Arc<Mutex<SessionEngine>>,
    config: SessionSchedulerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl SessionScheduler {
    /// Create a scheduler over a shared engine.
    pub fn new(engine: Arc<Mutex<SessionEngine>>, config: SessionSchedulerConfig) -> Self {
        Self {
            engine,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start ticking at `interval`.
    ///
    /// The interval is captured here; changing the preference while a session
    /// runs takes effect on the next start.
    ///
    /// # Errors
    ///
    /// Returns [`SlotwatchError::AlreadyRunning`] if the background task is
    /// still alive.
    pub async fn start(&mut self, interval: Duration) -> Result<()> {
        if self.is_running() {
            return Err(SlotwatchError::AlreadyRunning);
        }

        // Fresh token so the scheduler can restart after a stop.
        self.cancellation_token = CancellationToken::new();

        let engine = Arc::clone(&self.engine);
        let cancel = self.cancellation_token.clone();
        let initial_delay = self.config.initial_delay;

        let handle = tokio::spawn(async move {
            Self::scan_loop(engine, initial_delay, interval, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        info!(interval_secs = interval.as_secs(), "scan scheduler started");
        Ok(())
    }

    /// Cancel the background task and await its completion.
    ///
    /// # Errors
    ///
    /// Returns [`SlotwatchError::NotRunning`] if no task is alive, or
    /// [`SlotwatchError::Internal`] if the task does not finish within the
    /// join timeout.
    pub async fn stop(&mut self) -> Result<()> {
        if !self.is_running() {
            return Err(SlotwatchError::NotRunning);
        }

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            tokio::time::timeout(self.config.join_timeout, handle)
                .await
                .map_err(|_| {
                    SlotwatchError::Internal(format!(
                        "scan loop did not stop within {:?}",
                        self.config.join_timeout
                    ))
                })?
                .map_err(|join_error| {
                    SlotwatchError::Internal(format!("scan loop panicked: {join_error}"))
                })?;
        }

        info!("scan scheduler stopped");
        Ok(())
    }

    /// Whether the background task is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }

    async fn scan_loop(
        engine: Arc<Mutex<SessionEngine>>,
        initial_delay: Duration,
        interval: Duration,
        cancel: CancellationToken,
    ) {
        let mut delay = initial_delay;
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("scan loop cancelled");
                    break;
                }
                () = tokio::time::sleep(delay) => {
                    engine.lock().await.tick().await;
                    delay = interval;
                }
            }
        }
    }
}

impl Drop for SessionScheduler {
    fn drop(&mut self) {
        // Best-effort cleanup; the async handle cannot be joined here.
        if !self.cancellation_token.is_cancelled() {
            warn!("SessionScheduler dropped while running; cancelling");
            self.cancellation_token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use slotwatch_core::{Alert, AlertChannel, CredentialVault, SoundPlayer};

    use super::*;

    struct NullVault;

    #[async_trait]
    impl CredentialVault for NullVault {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    struct NullAlerts;

    #[async_trait]
    impl AlertChannel for NullAlerts {
        async fn notify(&self, _alert: Alert) {}
    }

    struct NullSound;

    #[async_trait]
    impl SoundPlayer for NullSound {
        async fn play(&self, _volume: u8) -> Result<()> {
            Ok(())
        }
    }

    async fn running_engine() -> Arc<Mutex<SessionEngine>> {
        let mut engine = SessionEngine::with_rng(
            Arc::new(NullVault),
            Arc::new(NullAlerts),
            Arc::new(NullSound),
            StdRng::seed_from_u64(17),
        );
        engine.set_email("user@example.com".to_string()).await.unwrap();
        engine.set_password("hunter2".to_string()).await.unwrap();
        engine.toggle_office("Ankara").unwrap();
        engine.start().await.unwrap();
        Arc::new(Mutex::new(engine))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn lifecycle_start_stop_restart() {
        let engine = running_engine().await;
        let mut scheduler =
            SessionScheduler::new(Arc::clone(&engine), SessionSchedulerConfig::default());

        assert!(!scheduler.is_running());

        scheduler.start(Duration::from_secs(300)).await.unwrap();
        assert!(scheduler.is_running());

        let err = scheduler.start(Duration::from_secs(300)).await.unwrap_err();
        assert!(matches!(err, SlotwatchError::AlreadyRunning));

        scheduler.stop().await.unwrap();
        assert!(!scheduler.is_running());

        let err = scheduler.stop().await.unwrap_err();
        assert!(matches!(err, SlotwatchError::NotRunning));

        // A fresh token lets the scheduler run again.
        scheduler.start(Duration::from_secs(300)).await.unwrap();
        assert!(scheduler.is_running());
        scheduler.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_fires_after_initial_delay() {
        let engine = running_engine().await;
        let config = SessionSchedulerConfig {
            initial_delay: Duration::from_secs(2),
            join_timeout: Duration::from_secs(5),
        };
        let mut scheduler = SessionScheduler::new(Arc::clone(&engine), config);

        scheduler.start(Duration::from_secs(60)).await.unwrap();

        // Paused time auto-advances through the sleeps.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(engine.lock().await.stats().total_scans, 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(engine.lock().await.stats().total_scans, 1);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(engine.lock().await.stats().total_scans, 2);

        scheduler.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_stop() {
        let engine = running_engine().await;
        let config = SessionSchedulerConfig {
            initial_delay: Duration::from_secs(2),
            join_timeout: Duration::from_secs(5),
        };
        let mut scheduler = SessionScheduler::new(Arc::clone(&engine), config);

        scheduler.start(Duration::from_secs(60)).await.unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;
        scheduler.stop().await.unwrap();

        let scans_at_stop = engine.lock().await.stats().total_scans;
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(engine.lock().await.stats().total_scans, scans_at_stop);
    }
}
