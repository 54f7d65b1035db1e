//! Preference commands

use std::sync::Arc;
use std::time::Instant;

use slotwatch_domain::catalog::CountryId;
use slotwatch_domain::{NotificationPrefs, Result};
use tracing::{info, warn};

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Select a destination country. Clears the office selection.
pub async fn select_country(ctx: &Arc<AppContext>, country: CountryId) -> Result<()> {
    let command_name = "settings::select_country";
    let start = Instant::now();

    info!(command = command_name, country = country.as_str(), "Selecting country");
    ctx.engine.lock().await.set_country(country);

    log_command_execution(command_name, start.elapsed(), true);
    Ok(())
}

/// Add or remove one office from the selection.
pub async fn toggle_office(ctx: &Arc<AppContext>, office: String) -> Result<()> {
    let command_name = "settings::toggle_office";
    let start = Instant::now();

    info!(command = command_name, office, "Toggling office");
    let result = ctx.engine.lock().await.toggle_office(&office);
    report(command_name, start, &result);
    result
}

/// Set the scan interval in seconds (60..=3600).
pub async fn set_scan_interval(ctx: &Arc<AppContext>, secs: u32) -> Result<()> {
    let command_name = "settings::set_scan_interval";
    let start = Instant::now();

    info!(command = command_name, secs, "Setting scan interval");
    let result = ctx.engine.lock().await.set_scan_interval(secs);
    report(command_name, start, &result);
    result
}

/// Replace the notification settings.
pub async fn update_notifications(
    ctx: &Arc<AppContext>,
    notifications: NotificationPrefs,
) -> Result<()> {
    let command_name = "settings::update_notifications";
    let start = Instant::now();

    info!(command = command_name, volume = notifications.volume, "Updating notifications");
    let result = ctx.engine.lock().await.set_notifications(notifications);
    report(command_name, start, &result);
    result
}

fn report(command_name: &str, start: Instant, result: &Result<()>) {
    if let Err(error) = result {
        warn!(command = command_name, error_type = error_label(error), %error, "command failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
}
