//! Credential commands

use std::sync::Arc;
use std::time::Instant;

use slotwatch_core::validation::{self, SIMULATED_CHECK_DELAY};
use slotwatch_core::ValidationStatus;
use slotwatch_domain::Result;
use tracing::{info, warn};

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Update the account email. Written through to the vault on every call, so
/// the settings form can invoke this per keystroke.
pub async fn set_credential_email(ctx: &Arc<AppContext>, email: String) -> Result<()> {
    let command_name = "credentials::set_credential_email";
    let start = Instant::now();

    // The value itself never goes into the log.
    let result = ctx.engine.lock().await.set_email(email).await;
    report(command_name, start, &result);
    result
}

/// Update the account password. Same write-through contract as the email.
pub async fn set_credential_password(ctx: &Arc<AppContext>, password: String) -> Result<()> {
    let command_name = "credentials::set_credential_password";
    let start = Instant::now();

    let result = ctx.engine.lock().await.set_password(password).await;
    report(command_name, start, &result);
    result
}

/// Run the mock credential check against the stored credentials.
///
/// Sleeps for the simulated round-trip before applying the format rules, so
/// the presentation layer can show its "validating" state.
pub async fn validate_credentials(ctx: &Arc<AppContext>) -> Result<ValidationStatus> {
    let command_name = "credentials::validate_credentials";
    let start = Instant::now();

    info!(command = command_name, "Validating credentials");
    let credentials = ctx.engine.lock().await.credentials().clone();

    tokio::time::sleep(SIMULATED_CHECK_DELAY).await;
    let status = validation::check(&credentials);

    info!(command = command_name, ?status, "Credential check finished");
    log_command_execution(command_name, start.elapsed(), true);
    Ok(status)
}

fn report(command_name: &str, start: Instant, result: &Result<()>) {
    if let Err(error) = result {
        warn!(command = command_name, error_type = error_label(error), %error, "command failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
}
