//! # Widget: Section List
//!
//! ## Responsibility
//! Renders one row per endpoint with its lifecycle status:
//! - `◐` PENDING: yellow
//! - `●` LOADED: green, with resolution time
//! - `○` FAILED: red, with resolution time
//!
//! The highlighted row selects what the report pane shows. The list scrolls
//! to keep it visible, and the counts summary stays pinned below the list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::render::elapsed_display;
use crate::report::ResultStatus;
use crate::tui::app::App;
use crate::tui::widgets::log::truncate_with_ellipsis;

/// Widest a section title column gets.
const TITLE_WIDTH: usize = 18;

/// Columns taken by everything on a row except the title.
const ROW_CHROME: usize = 18;

/// Returns the display color for a result status.
pub fn status_color(status: &ResultStatus) -> Color {
    match status {
        ResultStatus::Pending => Color::Yellow,
        ResultStatus::Loaded(_) => Color::Green,
        ResultStatus::Failed(_) => Color::Red,
    }
}

/// One-line counts summary, e.g. `"5 loaded · 1 failed · 2 pending"`.
pub fn summary_line(app: &App) -> String {
    format!(
        "{} loaded \u{b7} {} failed \u{b7} {} pending",
        app.view.loaded_count(),
        app.view.failed_count(),
        app.view.pending_count()
    )
}

/// Title column width for a list `inner_width` columns wide.
pub fn title_width(inner_width: u16) -> usize {
    (inner_width as usize).saturating_sub(ROW_CHROME).clamp(6, TITLE_WIDTH)
}

/// Renders the section list widget.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" SECTIONS ({}) ", app.view.profile()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let summary = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            summary_line(app),
            Style::default().fg(Color::Cyan),
        )),
    ]);
    f.render_widget(summary, chunks[1]);

    if app.view.results().is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "no endpoints configured",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(placeholder, chunks[0]);
        return;
    }

    let width = title_width(inner.width);
    let items: Vec<ListItem> = app
        .view
        .sections()
        .map(|(endpoint, result)| {
            let color = status_color(result.status());
            let title = truncate_with_ellipsis(endpoint.display_title(), width);
            ListItem::new(Line::from(vec![
                Span::styled(result.status().symbol(), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(format!("{title:<width$}"), Style::default().fg(Color::White)),
                Span::styled(
                    format!(" {:<7}", result.status().label()),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {}", elapsed_display(result.elapsed())),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, chunks[0], &mut state);
}
