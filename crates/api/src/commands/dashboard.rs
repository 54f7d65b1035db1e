//! Dashboard read-model commands

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use slotwatch_core::SessionState;
use slotwatch_domain::catalog::{catalog, CountryId};
use slotwatch_domain::{ActivityEntry, Credentials, Preferences, Result, ScanStats};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Everything the dashboard renders, in one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Session state.
    pub state: SessionState,
    /// Current preferences.
    pub preferences: Preferences,
    /// Current credentials. Plaintext by design; the settings form shows
    /// them back to the user.
    pub credentials: Credentials,
    /// Scan counters.
    pub stats: ScanStats,
    /// Derived success percentage, 0..=100.
    pub success_rate: u8,
    /// Activity feed, newest first, at most 50 entries.
    pub activities: Vec<ActivityEntry>,
}

/// One country as shown in the selector.
#[derive(Debug, Clone, Serialize)]
pub struct CountryView {
    /// Stable identifier used by `select_country`.
    pub id: CountryId,
    /// Display name.
    pub name: &'static str,
    /// Office list, in display order.
    pub offices: &'static [&'static str],
}

/// Get a consistent snapshot of all dashboard state.
pub async fn get_dashboard(ctx: &Arc<AppContext>) -> Result<DashboardSnapshot> {
    let command_name = "dashboard::get_dashboard";
    let start = Instant::now();

    let engine = ctx.engine.lock().await;
    let snapshot = DashboardSnapshot {
        state: engine.state(),
        preferences: engine.preferences().clone(),
        credentials: engine.credentials().clone(),
        stats: engine.stats().clone(),
        success_rate: engine.stats().success_rate(),
        activities: engine.activities(),
    };
    drop(engine);

    log_command_execution(command_name, start.elapsed(), true);
    Ok(snapshot)
}

/// List the static country catalog.
pub async fn list_countries(_ctx: &Arc<AppContext>) -> Result<Vec<CountryView>> {
    let command_name = "dashboard::list_countries";
    let start = Instant::now();

    let countries = catalog()
        .map(|(id, country)| CountryView { id, name: country.name, offices: country.offices })
        .collect();

    log_command_execution(command_name, start.elapsed(), true);
    Ok(countries)
}
