//! Full-frame rendering tests through ratatui's `TestBackend`.
//!
//! Each test draws the whole dashboard and searches the resulting buffer
//! text, so layout changes that hide a section's body show up here.

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use thanos_dashboard::tui::app::{App, MIN_COLS, MIN_ROWS};
use thanos_dashboard::tui::ui;
use thanos_dashboard::{DashboardView, DemoReportSource, EndpointSet, Profile};

fn app_for(profile: Profile, source: DemoReportSource) -> App {
    let view = DashboardView::mount(EndpointSet::for_profile(profile), Arc::new(source))
        .expect("test: mount");
    App::new("Thanos Fantasy Dashboard", view)
}

async fn settled_links_app() -> App {
    let mut app = app_for(Profile::Links, DemoReportSource::new().with_delay_scale(0.0));
    app.view.settle().await;
    app
}

fn frame_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test: terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("test: draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn select(app: &mut App, id: &str) {
    while app.selected_section().map(|(e, _)| e.id.as_str()) != Some(id) {
        app.select_next();
    }
}

#[tokio::test]
async fn test_pending_frame_shows_placeholder() {
    let app = app_for(Profile::Links, DemoReportSource::new());
    let text = frame_text(&app, 120, 40);
    assert!(text.contains("Loading\u{2026}"));
    assert!(text.contains("PENDING"));
    assert!(text.contains("0 loaded"));
}

#[tokio::test]
async fn test_loaded_section_shows_pretty_json() {
    let mut app = settled_links_app().await;
    select(&mut app, "health");
    let text = frame_text(&app, 120, 40);
    assert!(text.contains("\"status\": \"healthy\""), "frame:\n{text}");
    assert!(text.contains("/api/health"));
}

#[tokio::test]
async fn test_failed_section_shows_error_text() {
    let mut app = settled_links_app().await;
    select(&mut app, "season");
    let text = frame_text(&app, 120, 40);
    assert!(text.contains("Error: HTTP 500 Internal Server Error"), "frame:\n{text}");
    assert!(!text.contains("playoff_odds"));
}

#[tokio::test]
async fn test_section_list_shows_every_status() {
    let app = settled_links_app().await;
    let text = frame_text(&app, 120, 40);
    assert!(text.contains("LOADED"));
    assert!(text.contains("FAILED"));
    assert!(text.contains("Council Decree"));
    assert!(text.contains("7 loaded"));
}

#[tokio::test]
async fn test_title_names_origin() {
    let app = app_for(Profile::Links, DemoReportSource::new());
    let text = frame_text(&app, 120, 40);
    let first_line = text.lines().next().unwrap_or_default();
    assert!(first_line.contains("Thanos Fantasy Dashboard"));
    assert!(first_line.contains("demo"));
}

#[tokio::test]
async fn test_log_pane_shows_mount() {
    let app = app_for(Profile::Combined, DemoReportSource::new());
    let text = frame_text(&app, 120, 40);
    assert!(text.contains("Mounted"));
    assert!(text.contains("profile=combined"));
}

#[tokio::test]
async fn test_empty_set_renders_placeholder_row() {
    let app = app_for(Profile::Custom, DemoReportSource::new());
    let text = frame_text(&app, 120, 40);
    assert!(text.contains("no endpoints configured"));
}

#[tokio::test]
async fn test_help_overlay_lists_keys() {
    let mut app = app_for(Profile::Links, DemoReportSource::new());
    app.show_help = true;
    let text = frame_text(&app, 120, 40);
    assert!(text.contains("Keybindings:"));
    assert!(text.contains("Remount"));
}

#[tokio::test]
async fn test_too_small_terminal_shows_warning() {
    let app = app_for(Profile::Links, DemoReportSource::new());
    let text = frame_text(&app, 50, 15);
    assert!(text.contains("Terminal too small"));
    assert!(!text.contains("SECTIONS"));
}

#[tokio::test]
async fn test_selected_row_visible_at_min_size() {
    let mut app = app_for(Profile::Full, DemoReportSource::new().with_delay_scale(0.0));
    app.view.settle().await;
    select(&mut app, "health");
    app.set_report_area(ui::layout(Rect::new(0, 0, MIN_COLS, MIN_ROWS)).report);

    let text = frame_text(&app, MIN_COLS, MIN_ROWS);
    assert!(text.contains("\u{25cf} Health"), "frame:\n{text}");
    assert!(!text.contains("Head Coach"), "list should have scrolled:\n{text}");
    assert!(text.contains("11 loaded"), "summary pinned below list:\n{text}");
    assert!(text.contains("\"status\": \"healthy\""), "frame:\n{text}");
}

#[tokio::test]
async fn test_long_report_lines_wrap_at_min_size() {
    let mut app = app_for(Profile::Full, DemoReportSource::new().with_delay_scale(0.0));
    app.view.settle().await;
    select(&mut app, "decree");

    let text = frame_text(&app, MIN_COLS, MIN_ROWS);
    // The consensus line is wider than the pane; its tail lands on the next row.
    assert!(text.contains("\"consensus\""), "frame:\n{text}");
    assert!(text.contains("of 3)."), "frame:\n{text}");
}
