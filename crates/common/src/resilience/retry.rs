//! Exponential-backoff retry for fallible async operations.
//!
//! The executor runs an operation up to `max_attempts` times, sleeping
//! `base_delay * 2^(attempt - 1)` (capped at `max_delay`) between attempts.
//! The last error is preserved and returned when every attempt fails.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced by [`retry_with_backoff`].
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// All attempts failed; carries the error from the final attempt.
    #[error("all {attempts} attempts failed: {source}")]
    Exhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// The error returned by the final attempt.
        source: E,
    },

    /// The configuration could not be used.
    #[error("invalid retry configuration: {0}")]
    InvalidConfiguration(String),
}

/// Configuration for [`retry_with_backoff`].
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles on each further attempt.
    pub base_delay: Duration,
    /// Upper bound applied to the computed delay.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Delay to sleep after the given 1-based failed attempt.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let delay = self.base_delay.saturating_mul(1u32 << exponent);
        delay.min(self.max_delay)
    }
}

/// Runs `operation` with exponential backoff until it succeeds or the
/// attempt budget is exhausted.
///
/// # Errors
///
/// Returns [`RetryError::InvalidConfiguration`] when `max_attempts` is zero,
/// or [`RetryError::Exhausted`] carrying the final attempt's error.
pub async fn retry_with_backoff<F, Fut, T, E>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Debug,
{
    if config.max_attempts == 0 {
        return Err(RetryError::InvalidConfiguration(
            "max_attempts must be greater than 0".to_string(),
        ));
    }

    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "operation succeeded after retries");
                }
                return Ok(value);
            }
            Err(error) if attempt >= config.max_attempts => {
                warn!(attempts = attempt, error = ?error, "retry budget exhausted");
                return Err(RetryError::Exhausted { attempts: attempt, source: error });
            }
            Err(error) => {
                let delay = config.delay_for_attempt(attempt);
                warn!(attempt, delay_ms = delay.as_millis() as u64, error = ?error,
                    "operation failed, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
