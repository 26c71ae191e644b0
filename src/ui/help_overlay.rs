//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Palette;

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();

    // Calculate centered overlay area
    let overlay_width = 52;
    let overlay_height = 19;
    let overlay_area = centered_rect(overlay_width, overlay_height, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation", bold)]),
        help_line("↑/k, ↓/j", "Move selection / scroll", palette),
        help_line("g / G", "Jump to top / last visible", palette),
        help_line("Enter", "Open post", palette),
        help_line("Esc", "Go back / Close", palette),
        help_line("q", "Quit application", palette),
        Line::from(""),
        Line::from(vec![Span::styled("Feed", bold)]),
        help_line("/", "Search (Enter applies now)", palette),
        help_line("c", "Cycle category", palette),
        help_line("s", "Toggle sort: date/title", palette),
        help_line("t", "Toggle dark/light theme", palette),
        help_line("r", "Refresh posts", palette),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(palette.dim),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg).fg(palette.fg))
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, overlay_area);
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", key),
            Style::default().fg(palette.accent),
        ),
        Span::raw(description.to_string()),
    ])
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
