//! Monitoring lifecycle commands

use std::sync::Arc;
use std::time::Instant;

use slotwatch_domain::{Result, SlotwatchError};
use tracing::{info, warn};

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Start a monitoring session and the scan scheduler behind it.
pub async fn start_monitoring(ctx: &Arc<AppContext>) -> Result<()> {
    let command_name = "monitoring::start_monitoring";
    let start = Instant::now();

    info!(command = command_name, "Starting monitoring session");
    let result = start_inner(ctx).await;
    report(command_name, start, &result);
    result
}

async fn start_inner(ctx: &Arc<AppContext>) -> Result<()> {
    let interval = {
        let mut engine = ctx.engine.lock().await;
        engine.start().await?;
        engine.scan_interval()
    };

    if let Err(error) = ctx.scheduler.lock().await.start(interval).await {
        // Keep engine and scheduler state consistent.
        if let Err(stop_error) = ctx.engine.lock().await.stop().await {
            warn!(%stop_error, "failed to roll back session start");
        }
        return Err(error);
    }
    Ok(())
}

/// Stop the running monitoring session.
pub async fn stop_monitoring(ctx: &Arc<AppContext>) -> Result<()> {
    let command_name = "monitoring::stop_monitoring";
    let start = Instant::now();

    info!(command = command_name, "Stopping monitoring session");
    let result = stop_inner(ctx).await;
    report(command_name, start, &result);
    result
}

async fn stop_inner(ctx: &Arc<AppContext>) -> Result<()> {
    // Engine first: its state flip makes any already-queued tick a no-op.
    ctx.engine.lock().await.stop().await?;

    match ctx.scheduler.lock().await.stop().await {
        // The scan loop can have exited on its own already.
        Err(SlotwatchError::NotRunning) => Ok(()),
        other => other,
    }
}

/// Play the notification sound once at the configured volume.
pub async fn test_sound(ctx: &Arc<AppContext>) -> Result<()> {
    let command_name = "monitoring::test_sound";
    let start = Instant::now();

    let volume = ctx.engine.lock().await.preferences().notifications.volume;
    info!(command = command_name, volume, "Playing test sound");
    let result = ctx.sound.play(volume).await;
    report(command_name, start, &result);
    result
}

fn report(command_name: &str, start: Instant, result: &Result<()>) {
    if let Err(error) = result {
        warn!(command = command_name, error_type = error_label(error), %error, "command failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
}
