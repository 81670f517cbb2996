//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Orchestrates the overall dashboard layout by dividing the terminal into regions
//! and delegating to individual widget renderers. Handles the minimum size guard
//! and help overlay.
//!
//! ## Guarantees
//! - Minimum size guard displays a centered message if terminal is too small
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, MIN_COLS, MIN_ROWS};
use super::widgets;

/// Widest the section list column gets.
const SECTIONS_WIDTH: u16 = 44;

/// Height of the log tail region.
const LOG_HEIGHT: u16 = 8;

/// Renders the complete dashboard UI into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    let title = format!(
        " {} \u{b7} {} {:>width$} ",
        app.title,
        app.view.origin(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        width = (size.width as usize).saturating_sub(app.title.len() + app.view.origin().len() + 10),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let footer = Line::from(vec![Span::styled(
        " [q]uit  [\u{2191}\u{2193}] select  [PgUp/PgDn] scroll  [r]emount  [h]elp ",
        Style::default().fg(Color::DarkGray),
    )]);
    let footer_block = Block::default().title_bottom(footer).borders(Borders::NONE);

    let regions = layout(size);
    f.render_widget(outer_block, size);
    f.render_widget(footer_block, size);

    widgets::sections::render(f, regions.sections, app);
    widgets::report::render(f, regions.report, app);
    widgets::log::render(f, regions.log, app);

    if app.show_help {
        draw_help_overlay(f, size);
    }
}

/// Screen regions of the dashboard body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Section list, left of the report.
    pub sections: Rect,
    /// Report pane for the highlighted section.
    pub report: Rect,
    /// Log tail along the bottom.
    pub log: Rect,
}

/// Splits the full terminal area into dashboard regions.
///
/// The section column never takes more than half the width, so the report
/// pane keeps room for its JSON at the minimum terminal size.
pub fn layout(area: Rect) -> Regions {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(LOG_HEIGHT)])
        .split(inner);

    let sections_width = SECTIONS_WIDTH.min(inner.width / 2);
    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sections_width), Constraint::Min(16)])
        .split(main_chunks[0]);

    Regions {
        sections: top_chunks[0],
        report: top_chunks[1],
        log: main_chunks[1],
    }
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!("Terminal too small: resize to at least {MIN_COLS}x{MIN_ROWS}");
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Centered popup rect of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered(area, 50, 16);
    f.render_widget(Clear, popup_area);

    let key = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Thanos dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  Keybindings:", Style::default().fg(Color::White))),
        key("    [q] [Esc] Quit        [Ctrl+C] Force quit"),
        key("    [\u{2191}] [k]  Previous section"),
        key("    [\u{2193}] [j]  Next section"),
        key("    [PgUp] [PgDn] Scroll report"),
        key("    [r] Remount (one new round of requests)"),
        key("    [h] Toggle this help"),
        Line::from(""),
        key("  --demo     Canned reports, no backend"),
        key("  --profile  links | full | combined | custom"),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(help_text).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_size_constants() {
        assert_eq!(MIN_COLS, 60);
        assert_eq!(MIN_ROWS, 20);
    }

    #[test]
    fn test_popup_centering_calculation() {
        let popup = centered(Rect::new(0, 0, 120, 50), 50, 16);
        assert_eq!(popup, Rect::new(35, 17, 50, 16));
    }

    #[test]
    fn test_layout_splits_min_size_evenly() {
        let regions = layout(Rect::new(0, 0, MIN_COLS, MIN_ROWS));
        assert_eq!(regions.sections.width, 29);
        assert_eq!(regions.report.width, 29);
        assert_eq!(regions.log.height, LOG_HEIGHT);
        assert_eq!(regions.sections.height, MIN_ROWS - 2 - LOG_HEIGHT);
    }

    #[test]
    fn test_layout_caps_section_column_when_wide() {
        let regions = layout(Rect::new(0, 0, 160, 48));
        assert_eq!(regions.sections.width, SECTIONS_WIDTH);
        assert_eq!(regions.report.width, 158 - SECTIONS_WIDTH);
    }

    #[test]
    fn test_popup_centering_small_terminal() {
        let popup = centered(Rect::new(0, 0, 40, 15), 50, 16);
        assert_eq!(popup.width, 36);
        assert_eq!(popup.height, 11);
    }
}
