//! Headless entry point.
//!
//! Wires the application context from configuration and keeps it alive until
//! Ctrl-C. All interaction goes through the command facade; this binary only
//! hosts the runtime.

use std::path::Path;

use anyhow::Context;
use slotwatch_api::utils::logging::init_logging;
use slotwatch_api::{AppContext, SlotwatchConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            SlotwatchConfig::from_file(Path::new(&path)).context("load configuration file")?
        }
        None => SlotwatchConfig::load().context("load configuration")?,
    };

    let ctx = AppContext::initialize(config).await.context("initialize application context")?;

    info!("slotwatch ready, press Ctrl-C to exit");
    tokio::signal::ctrl_c().await.context("wait for shutdown signal")?;

    ctx.shutdown().await.context("shut down cleanly")?;
    Ok(())
}
