//! App state integration tests: lifecycle events, remount, and input flow.

use std::sync::Arc;

use thanos_dashboard::tui::app::{App, LogLevel, LOG_ENTRIES_CAP};
use thanos_dashboard::tui::events::{apply_event, InputEvent};
use thanos_dashboard::{DashboardView, DemoReportSource, EndpointId, EndpointSet, Profile};

fn app_for(profile: Profile, source: DemoReportSource) -> App {
    let view = DashboardView::mount(EndpointSet::for_profile(profile), Arc::new(source))
        .expect("test: mount");
    App::new("Thanos", view)
}

fn instant_demo() -> DemoReportSource {
    DemoReportSource::new().with_delay_scale(0.0)
}

/// Ticks until every section is terminal, yielding between ticks.
async fn tick_until_settled(app: &mut App) {
    while !app.view.is_settled() {
        app.on_tick();
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_fresh_app_shows_every_section_pending() {
    let app = app_for(Profile::Links, DemoReportSource::new());
    assert_eq!(app.view.results().len(), 8);
    assert_eq!(app.view.pending_count(), 8);
    assert_eq!(app.selected, 0);
}

#[tokio::test]
async fn test_ticks_log_each_resolution_once() {
    let mut app = app_for(Profile::Links, instant_demo());
    tick_until_settled(&mut app).await;

    let loaded = app
        .log_entries
        .iter()
        .filter(|e| e.message == "Report loaded")
        .count();
    let failed: Vec<_> = app
        .log_entries
        .iter()
        .filter(|e| e.message == "Report failed")
        .collect();

    assert_eq!(loaded, 7);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].level, LogLevel::Error);
    assert!(failed[0].fields.contains("endpoint=season"));
    assert_eq!(
        app.log_entries.back().map(|e| e.message.as_str()),
        Some("All sections settled")
    );
}

#[tokio::test]
async fn test_tick_after_settle_is_a_noop() {
    let mut app = app_for(Profile::Combined, instant_demo());
    tick_until_settled(&mut app).await;
    let logged = app.log_entries.len();

    assert_eq!(app.on_tick(), 0);
    assert_eq!(app.log_entries.len(), logged);
}

#[tokio::test]
async fn test_remount_while_pending_logs_abort() {
    let mut app = app_for(Profile::Links, DemoReportSource::new());
    apply_event(&mut app, InputEvent::Remount);

    assert_eq!(app.mounts, 2);
    assert!(app
        .log_entries
        .iter()
        .any(|e| e.message == "Aborted in-flight requests" && e.fields == "count=8"));
    assert_eq!(
        app.log_entries.back().map(|e| e.message.as_str()),
        Some("Remounted")
    );
}

#[tokio::test]
async fn test_remount_after_settle_starts_fresh_round() {
    let mut app = app_for(Profile::Full, instant_demo());
    tick_until_settled(&mut app).await;

    app.remount();
    assert_eq!(app.view.pending_count(), 12);
    assert!(!app
        .log_entries
        .iter()
        .any(|e| e.message == "Aborted in-flight requests"));

    tick_until_settled(&mut app).await;
    assert_eq!(app.view.loaded_count() + app.view.failed_count(), 12);
}

#[tokio::test]
async fn test_failing_set_from_builder() {
    let source = instant_demo()
        .with_failing(["health", "decree"].into_iter().map(EndpointId::new));
    let mut app = app_for(Profile::Links, source);
    tick_until_settled(&mut app).await;

    assert_eq!(app.view.failed_count(), 2);
    assert!(app.view.result("season").map(|r| r.payload().is_some()).unwrap_or(false));
    assert_eq!(
        app.view.result("health").and_then(|r| r.error_message()),
        Some("HTTP 500 Internal Server Error")
    );
}

#[tokio::test]
async fn test_navigation_wraps_over_sections() {
    let mut app = app_for(Profile::Links, instant_demo());
    for _ in 0..8 {
        apply_event(&mut app, InputEvent::SelectNext);
    }
    assert_eq!(app.selected, 0);
    apply_event(&mut app, InputEvent::SelectPrev);
    assert_eq!(
        app.selected_section().map(|(e, _)| e.id.as_str()),
        Some("health")
    );
}

#[tokio::test]
async fn test_log_stays_bounded_across_remounts() {
    let mut app = app_for(Profile::Links, DemoReportSource::new());
    for _ in 0..LOG_ENTRIES_CAP {
        app.remount();
    }
    assert_eq!(app.log_entries.len(), LOG_ENTRIES_CAP);
    assert_eq!(app.mounts, LOG_ENTRIES_CAP as u64 + 1);
}
