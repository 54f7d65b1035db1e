use std::time::Duration;

use slotwatch_domain::SlotwatchError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Safe to call more than once;
/// later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slotwatch=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
}

/// Log the outcome of a command execution with structured fields.
///
/// Keeps the command wrappers concise and the log shape uniform. Callers
/// must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `SlotwatchError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SlotwatchError) -> &'static str {
    match error {
        SlotwatchError::NoOfficesSelected => "no_offices_selected",
        SlotwatchError::MissingCredentials => "missing_credentials",
        SlotwatchError::AlreadyRunning => "already_running",
        SlotwatchError::NotRunning => "not_running",
        SlotwatchError::InvalidInput(_) => "invalid_input",
        SlotwatchError::Storage(_) => "storage",
        SlotwatchError::Internal(_) => "internal",
    }
}
