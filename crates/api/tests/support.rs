use std::sync::Arc;

use slotwatch_api::commands;
use slotwatch_api::{AppContext, SlotwatchConfig};
use tempfile::TempDir;

/// Shared context for integration tests.
pub struct TestContext {
    /// Application context under test.
    pub ctx: Arc<AppContext>,
    /// Keep the temporary vault directory alive for the test's lifetime.
    pub temp_dir: TempDir,
}

/// Create a fresh context with its vault in a temporary directory.
pub async fn setup_test_context() -> TestContext {
    let temp_dir = tempfile::tempdir().expect("failed to create temporary vault directory");
    let ctx = context_at(&temp_dir).await;
    TestContext { ctx, temp_dir }
}

/// Create a context whose vault lives in `temp_dir`, simulating a restart
/// when called twice with the same directory.
pub async fn context_at(temp_dir: &TempDir) -> Arc<AppContext> {
    let mut config = SlotwatchConfig::default();
    config.vault_path = temp_dir.path().join("vault.json");
    AppContext::initialize(config).await.expect("failed to initialize application context")
}

/// Store credentials and select one office, the minimum for a session start.
#[allow(dead_code)]
pub async fn seed_session(ctx: &Arc<AppContext>) {
    commands::set_credential_email(ctx, "user@example.com".to_string())
        .await
        .expect("failed to store email");
    commands::set_credential_password(ctx, "hunter2".to_string())
        .await
        .expect("failed to store password");
    commands::toggle_office(ctx, "Ankara".to_string()).await.expect("failed to select office");
}
