//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard input into app state mutations.
//! Handles quit, remount, section selection, report scrolling, and the help overlay.
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always triggers quit

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Lines moved per PageUp / PageDown.
pub const REPORT_PAGE_LINES: u16 = 10;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed quit (q, Esc or Ctrl+C).
    Quit,
    /// User toggled help overlay.
    Help,
    /// User asked for a fresh mount.
    Remount,
    /// Highlight the next section.
    SelectNext,
    /// Highlight the previous section.
    SelectPrev,
    /// Scroll the report pane down.
    ScrollDown,
    /// Scroll the report pane up.
    ScrollUp,
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Returns `InputEvent::None` on timeout or on any crossterm polling error
/// (never panics).
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => translate_key(key),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
///
/// While the help overlay is open, any key other than quit just closes it.
pub fn apply_event(app: &mut App, event: InputEvent) {
    if app.show_help && !matches!(event, InputEvent::Quit | InputEvent::Resize(..) | InputEvent::None) {
        app.show_help = false;
        return;
    }

    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::Help => app.show_help = !app.show_help,
        InputEvent::Remount => app.remount(),
        InputEvent::SelectNext => app.select_next(),
        InputEvent::SelectPrev => app.select_prev(),
        InputEvent::ScrollDown => app.scroll_report_down(REPORT_PAGE_LINES),
        InputEvent::ScrollUp => app.scroll_report_up(REPORT_PAGE_LINES),
        InputEvent::Resize(_, _) | InputEvent::None => {}
    }
}

/// Translates a crossterm key event to an `InputEvent`.
fn translate_key(key: KeyEvent) -> InputEvent {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => InputEvent::Help,
        KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Remount,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => InputEvent::SelectNext,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => InputEvent::SelectPrev,
        KeyCode::PageDown | KeyCode::Char(' ') => InputEvent::ScrollDown,
        KeyCode::PageUp => InputEvent::ScrollUp,
        _ => InputEvent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoReportSource;
    use crate::endpoint::{EndpointSet, Profile};
    use crate::view::DashboardView;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn demo_app() -> App {
        let source = Arc::new(DemoReportSource::new().with_delay_scale(0.0));
        let view = DashboardView::mount(EndpointSet::for_profile(Profile::Links), source)
            .expect("test: mount");
        App::new("Test", view)
    }

    #[test]
    fn test_translate_key_q_quits() {
        assert_eq!(translate_key(key(KeyCode::Char('q'))), InputEvent::Quit);
        assert_eq!(translate_key(key(KeyCode::Char('Q'))), InputEvent::Quit);
    }

    #[test]
    fn test_translate_key_ctrl_c_quits() {
        let k = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(k), InputEvent::Quit);
    }

    #[test]
    fn test_translate_key_esc_quits() {
        assert_eq!(translate_key(key(KeyCode::Esc)), InputEvent::Quit);
    }

    #[test]
    fn test_translate_key_r_remounts() {
        assert_eq!(translate_key(key(KeyCode::Char('r'))), InputEvent::Remount);
    }

    #[test]
    fn test_translate_key_help_keys() {
        assert_eq!(translate_key(key(KeyCode::Char('h'))), InputEvent::Help);
        assert_eq!(translate_key(key(KeyCode::Char('?'))), InputEvent::Help);
    }

    #[test]
    fn test_translate_key_navigation() {
        assert_eq!(translate_key(key(KeyCode::Down)), InputEvent::SelectNext);
        assert_eq!(translate_key(key(KeyCode::Char('j'))), InputEvent::SelectNext);
        assert_eq!(translate_key(key(KeyCode::Up)), InputEvent::SelectPrev);
        assert_eq!(translate_key(key(KeyCode::Char('k'))), InputEvent::SelectPrev);
        assert_eq!(translate_key(key(KeyCode::PageDown)), InputEvent::ScrollDown);
        assert_eq!(translate_key(key(KeyCode::PageUp)), InputEvent::ScrollUp);
    }

    #[test]
    fn test_translate_key_unknown_returns_none() {
        assert_eq!(translate_key(key(KeyCode::Char('x'))), InputEvent::None);
    }

    #[tokio::test]
    async fn test_apply_event_quit_sets_flag() {
        let mut app = demo_app();
        apply_event(&mut app, InputEvent::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_apply_event_help_toggles_and_any_key_closes() {
        let mut app = demo_app();
        apply_event(&mut app, InputEvent::Help);
        assert!(app.show_help);
        apply_event(&mut app, InputEvent::SelectNext);
        assert!(!app.show_help);
        assert_eq!(app.selected, 0, "closing help must not also move selection");
    }

    #[tokio::test]
    async fn test_apply_event_quit_works_under_help() {
        let mut app = demo_app();
        app.show_help = true;
        apply_event(&mut app, InputEvent::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_apply_event_remount_counts_mounts() {
        let mut app = demo_app();
        apply_event(&mut app, InputEvent::Remount);
        assert_eq!(app.mounts, 2);
        assert_eq!(app.view.pending_count(), app.view.results().len());
    }

    #[tokio::test]
    async fn test_apply_event_none_and_resize_are_noops() {
        let mut app = demo_app();
        apply_event(&mut app, InputEvent::None);
        apply_event(&mut app, InputEvent::Resize(200, 60));
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert_eq!(app.selected, 0);
    }
}
