mod support;

use std::time::Duration;

use slotwatch_api::commands;
use slotwatch_core::SessionState;
use slotwatch_domain::{ActivityKind, SlotwatchError};
use support::{seed_session, setup_test_context};

#[tokio::test]
async fn start_requires_offices_then_credentials() {
    let test = setup_test_context().await;

    let err = commands::start_monitoring(&test.ctx).await.unwrap_err();
    assert!(matches!(err, SlotwatchError::NoOfficesSelected));

    commands::toggle_office(&test.ctx, "Ankara".to_string()).await.unwrap();
    let err = commands::start_monitoring(&test.ctx).await.unwrap_err();
    assert!(matches!(err, SlotwatchError::MissingCredentials));

    // Rejected starts leave no trace in the dashboard.
    let dashboard = commands::get_dashboard(&test.ctx).await.unwrap();
    assert_eq!(dashboard.state, SessionState::Idle);
    assert!(dashboard.activities.is_empty());
    assert_eq!(dashboard.stats.total_scans, 0);
}

#[tokio::test]
async fn stop_without_session_is_rejected() {
    let test = setup_test_context().await;

    let err = commands::stop_monitoring(&test.ctx).await.unwrap_err();
    assert!(matches!(err, SlotwatchError::NotRunning));
}

#[tokio::test]
async fn double_start_is_rejected() {
    let test = setup_test_context().await;
    seed_session(&test.ctx).await;

    commands::start_monitoring(&test.ctx).await.unwrap();
    let err = commands::start_monitoring(&test.ctx).await.unwrap_err();
    assert!(matches!(err, SlotwatchError::AlreadyRunning));

    commands::stop_monitoring(&test.ctx).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn session_ticks_and_stops_cleanly() {
    let test = setup_test_context().await;
    seed_session(&test.ctx).await;

    commands::start_monitoring(&test.ctx).await.unwrap();

    let dashboard = commands::get_dashboard(&test.ctx).await.unwrap();
    assert_eq!(dashboard.state, SessionState::Running);
    assert_eq!(dashboard.activities.len(), 1);
    assert_eq!(dashboard.activities[0].kind, ActivityKind::Info);
    assert_eq!(dashboard.activities[0].message, "Tarama başlatıldı");

    // Paused time auto-advances through the initial two-second delay.
    tokio::time::sleep(Duration::from_secs(3)).await;

    let dashboard = commands::get_dashboard(&test.ctx).await.unwrap();
    assert_eq!(dashboard.stats.total_scans, 1);
    assert!(dashboard.stats.last_scan.is_some());
    assert!(dashboard.success_rate <= 100);

    commands::stop_monitoring(&test.ctx).await.unwrap();

    let dashboard = commands::get_dashboard(&test.ctx).await.unwrap();
    assert_eq!(dashboard.state, SessionState::Idle);
    assert_eq!(dashboard.activities[0].message, "Tarama durduruldu");
    let scans_at_stop = dashboard.stats.total_scans;

    // No further ticks land after the stop.
    tokio::time::sleep(Duration::from_secs(600)).await;
    let dashboard = commands::get_dashboard(&test.ctx).await.unwrap();
    assert_eq!(dashboard.stats.total_scans, scans_at_stop);
}

#[tokio::test(start_paused = true)]
async fn session_can_restart_after_stop() {
    let test = setup_test_context().await;
    seed_session(&test.ctx).await;

    commands::start_monitoring(&test.ctx).await.unwrap();
    commands::stop_monitoring(&test.ctx).await.unwrap();

    commands::start_monitoring(&test.ctx).await.unwrap();
    tokio::time::sleep(Duration::from_secs(3)).await;

    let dashboard = commands::get_dashboard(&test.ctx).await.unwrap();
    assert_eq!(dashboard.state, SessionState::Running);
    assert!(dashboard.stats.total_scans >= 1);

    commands::stop_monitoring(&test.ctx).await.unwrap();
}

#[tokio::test]
async fn test_sound_uses_configured_player() {
    let test = setup_test_context().await;

    // The default configuration has no player, so the null player succeeds.
    commands::test_sound(&test.ctx).await.unwrap();
}
