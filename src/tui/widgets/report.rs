//! # Widget: Report Pane
//!
//! ## Responsibility
//! Shows the highlighted section's body: pretty-printed JSON when loaded, the
//! error text when failed, a placeholder while pending. Payloads are shown
//! verbatim and never interpreted.
//!
//! ## Guarantees
//! - Failed sections render in red and never show payload text
//! - Long lines wrap instead of clipping, keeping their indentation
//! - Scrolling past the end is clamped by `App`, never by the widget

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::render::section_body;
use crate::report::ResultStatus;
use crate::tui::app::App;

/// Body color for a result status.
pub fn body_color(status: &ResultStatus) -> Color {
    match status {
        ResultStatus::Pending => Color::DarkGray,
        ResultStatus::Loaded(_) => Color::White,
        ResultStatus::Failed(_) => Color::Red,
    }
}

/// Renders the report pane.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some((endpoint, result)) = app.selected_section() else {
        let block = Block::default()
            .title(" REPORT ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(block, area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} \u{b7} {} ", endpoint.display_title(), endpoint.path))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let style = Style::default().fg(body_color(result.status()));
    let body = section_body(result);
    let lines: Vec<Line> = body
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.report_scroll, 0));
    f.render_widget(para, area);
}
