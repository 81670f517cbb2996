//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns the mounted [`DashboardView`] plus everything the terminal needs on
//! top of it: selected section, report scroll offset, help overlay, and a
//! bounded log tail of view lifecycle events.
//!
//! ## Guarantees
//! - `on_tick()` never blocks; it only drains completions that have arrived
//! - Selection always indexes an existing section (or 0 when there are none)
//! - `VecDeque` log is bounded and never grows unbounded

use std::collections::VecDeque;

use ratatui::layout::Rect;

use crate::endpoint::Endpoint;
use crate::render::{elapsed_display, section_body};
use crate::report::{EndpointResult, ResultStatus};
use crate::view::DashboardView;

/// Maximum number of log entries retained for display.
pub const LOG_ENTRIES_CAP: usize = 50;

/// Minimum terminal width for the dashboard to render.
pub const MIN_COLS: u16 = 60;

/// Minimum terminal height for the dashboard to render.
pub const MIN_ROWS: u16 = 20;

/// Primary application state for the TUI dashboard.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Page title.
    pub title: String,
    /// The mounted view.
    pub view: DashboardView,
    /// Index of the highlighted section.
    pub selected: usize,
    /// Vertical scroll offset of the report pane, in wrapped rows.
    pub report_scroll: u16,
    /// Text width of the report pane from the last layout; 0 until known.
    pub report_width: u16,
    /// How many times the view has been mounted, including the first.
    pub mounts: u64,
    /// Rolling log entries, newest at the back.
    pub log_entries: VecDeque<LogEntry>,
}

/// A single log entry for the log tail widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Formatted timestamp string, e.g. "14:32:01".
    pub timestamp: String,
    /// Severity level.
    pub level: LogLevel,
    /// Primary log message.
    pub message: String,
    /// Structured fields as a formatted string.
    pub fields: String,
}

impl LogEntry {
    /// Creates an entry stamped with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>, fields: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            level,
            message: message.into(),
            fields: fields.into(),
        }
    }
}

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message.
    Info,
    /// Warning condition.
    Warn,
    /// Error condition.
    Error,
}

impl App {
    /// Wraps a freshly mounted view.
    pub fn new(title: impl Into<String>, view: DashboardView) -> Self {
        let mut app = Self {
            should_quit: false,
            show_help: false,
            title: title.into(),
            view,
            selected: 0,
            report_scroll: 0,
            report_width: 0,
            mounts: 1,
            log_entries: VecDeque::with_capacity(LOG_ENTRIES_CAP),
        };
        app.log_mount("Mounted");
        app
    }

    /// Applies every completion that has arrived and logs each resolution.
    ///
    /// # Returns
    /// Number of sections that changed.
    pub fn on_tick(&mut self) -> usize {
        let pending_before: Vec<bool> = self
            .view
            .results()
            .iter()
            .map(|r| !r.is_terminal())
            .collect();

        let applied = self.view.apply_completions();
        if applied == 0 {
            return 0;
        }

        let entries: Vec<LogEntry> = self
            .view
            .results()
            .iter()
            .zip(pending_before)
            .filter(|(r, was_pending)| *was_pending && r.is_terminal())
            .map(|(r, _)| resolution_entry(r))
            .collect();
        for entry in entries {
            self.push_log(entry);
        }

        if self.view.is_settled() {
            self.push_log(LogEntry::now(
                LogLevel::Info,
                "All sections settled",
                format!(
                    "loaded={} failed={}",
                    self.view.loaded_count(),
                    self.view.failed_count()
                ),
            ));
        }
        applied
    }

    /// Tears the current mount down and mounts again.
    pub fn remount(&mut self) {
        let aborted = self.view.pending_count();
        match self.view.remount() {
            Ok(()) => {
                self.mounts += 1;
                self.report_scroll = 0;
                if aborted > 0 {
                    self.push_log(LogEntry::now(
                        LogLevel::Warn,
                        "Aborted in-flight requests",
                        format!("count={aborted}"),
                    ));
                }
                self.log_mount("Remounted");
            }
            Err(e) => self.push_log(LogEntry::now(LogLevel::Error, "Remount failed", e.to_string())),
        }
    }

    /// Pushes a log entry, evicting the oldest if at capacity.
    pub fn push_log(&mut self, entry: LogEntry) {
        if self.log_entries.len() >= LOG_ENTRIES_CAP {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
    }

    /// Moves the highlight to the next section, wrapping at the end.
    pub fn select_next(&mut self) {
        let count = self.view.results().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
        self.report_scroll = 0;
    }

    /// Moves the highlight to the previous section, wrapping at the start.
    pub fn select_prev(&mut self) {
        let count = self.view.results().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + count - 1) % count;
        self.report_scroll = 0;
    }

    /// Scrolls the report pane down one page, stopping at the last row.
    pub fn scroll_report_down(&mut self, page: u16) {
        let max = scroll_limit(self.selected_body_lines());
        self.report_scroll = self.report_scroll.saturating_add(page.max(1)).min(max);
    }

    /// Scrolls the report pane up one page.
    pub fn scroll_report_up(&mut self, page: u16) {
        self.report_scroll = self.report_scroll.saturating_sub(page.max(1));
    }

    /// The highlighted section, if any.
    pub fn selected_section(&self) -> Option<(&Endpoint, &EndpointResult)> {
        self.view.sections().nth(self.selected)
    }

    /// Records the report pane's outer area so scrolling can account for
    /// wrapped rows.
    pub fn set_report_area(&mut self, area: Rect) {
        self.report_width = area.width.saturating_sub(2);
    }

    /// Row count of the highlighted section's body once wrapped to the
    /// report pane.
    pub fn selected_body_lines(&self) -> usize {
        self.selected_section()
            .map(|(_, r)| wrapped_rows(&section_body(r), self.report_width as usize))
            .unwrap_or(0)
    }

    fn log_mount(&mut self, message: &str) {
        let fields = format!(
            "profile={} endpoints={} source={}",
            self.view.profile(),
            self.view.results().len(),
            self.view.origin()
        );
        self.push_log(LogEntry::now(LogLevel::Info, message, fields));
    }
}

/// Highest scroll offset that still shows the last of `rows` rows.
pub fn scroll_limit(rows: usize) -> u16 {
    u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
}

/// Rows `text` occupies at `width` columns; `width == 0` counts lines.
///
/// Word wrapping can only add rows to this character count, so the last
/// row is always reachable.
pub fn wrapped_rows(text: &str, width: usize) -> usize {
    text.lines()
        .map(|line| match width {
            0 => 1,
            w => line.chars().count().div_ceil(w).max(1),
        })
        .sum()
}

/// Log line for a slot that just became terminal.
fn resolution_entry(result: &EndpointResult) -> LogEntry {
    let elapsed = elapsed_display(result.elapsed());
    match result.status() {
        ResultStatus::Failed(message) => LogEntry::now(
            LogLevel::Error,
            "Report failed",
            format!("endpoint={} {elapsed} {message}", result.endpoint_id),
        ),
        _ => LogEntry::now(
            LogLevel::Info,
            "Report loaded",
            format!("endpoint={} {elapsed}", result.endpoint_id),
        ),
    }
}

impl LogLevel {
    /// Returns the display label for this log level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }
}
