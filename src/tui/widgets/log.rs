//! # Widget: Log Tail
//!
//! ## Responsibility
//! Renders the last N view lifecycle entries (mount, loaded, failed, remount)
//! with color-coded severity levels. INFO=white, WARN=yellow, ERROR=red.
//!
//! ## Guarantees
//! - Fixed-width timestamp column for alignment
//! - Long lines truncated with `…` rather than wrapping
//! - Handles empty log list gracefully
//! - Newest entries appear at the bottom

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, LogEntry, LogLevel};

/// Returns the display color for a log level.
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::White,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}

/// Truncates a string to at most `max_width` characters, adding `…` if
/// truncated.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_width - 1).collect();
    out.push('\u{2026}');
    out
}

/// Renders the log tail widget.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" LOG ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible_count = inner.height as usize;
    let max_line_width = inner.width as usize;

    let skip = app.log_entries.len().saturating_sub(visible_count);
    let lines: Vec<Line> = app
        .log_entries
        .iter()
        .skip(skip)
        .map(|entry| render_entry(entry, max_line_width))
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_entry(entry: &LogEntry, max_line_width: usize) -> Line<'static> {
    let color = level_color(entry.level);
    let prefix_len = entry.timestamp.chars().count() + 3 + entry.level.label().len() + 2;
    let remaining_width = max_line_width.saturating_sub(prefix_len);
    let body = if entry.fields.is_empty() {
        entry.message.clone()
    } else {
        format!("{:<26} {}", entry.message, entry.fields)
    };

    Line::from(vec![
        Span::styled(
            format!("[{}] ", entry.timestamp),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{}  ", entry.level.label()), Style::default().fg(color)),
        Span::styled(
            truncate_with_ellipsis(&body, remaining_width),
            Style::default().fg(color),
        ),
    ])
}
