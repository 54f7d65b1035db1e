//! Alert delivery through structured logging.

use async_trait::async_trait;
use slotwatch_core::{Alert, AlertChannel, AlertSeverity};
use tracing::{info, warn};

/// Alert channel that renders alerts as tracing events.
///
/// Stands in for the toast UI. Error alerts log at `warn` so they surface
/// under the default filter; everything else logs at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAlertChannel;

#[async_trait]
impl AlertChannel for TracingAlertChannel {
    async fn notify(&self, alert: Alert) {
        match alert.severity {
            AlertSeverity::Error => {
                warn!(auto_dismiss = alert.auto_dismiss, "{}", alert.message);
            }
            AlertSeverity::Success | AlertSeverity::Info => {
                info!(
                    severity = ?alert.severity,
                    auto_dismiss = alert.auto_dismiss,
                    "{}",
                    alert.message
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivery_never_fails() {
        let channel = TracingAlertChannel;
        channel.notify(Alert::success("ok")).await;
        channel.notify(Alert::error("no")).await;
        channel.notify(Alert::info("fyi").persistent()).await;
    }
}
