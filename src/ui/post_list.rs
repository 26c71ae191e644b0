//! Post list screen rendering
//!
//! Renders the main view: header with the feed status, the search bar, the
//! revealed post rows, a sentinel row while more pages remain, and the footer
//! key hints. An empty filter result shows the "No posts found" state, which
//! is distinct from the fetch-error view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{excerpt_line, Post};
use crate::theme::Palette;

/// Renders the post list view
pub fn render_post_list(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // search bar
            Constraint::Min(1),    // post rows
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, app, &palette, chunks[0]);
    render_search_bar(frame, app, &palette, chunks[1]);

    let visible = app.visible_posts();
    if visible.is_empty() {
        render_empty_state(frame, &palette, chunks[2]);
    } else {
        render_rows(frame, app, &visible, &palette, chunks[2]);
    }

    render_footer(frame, &palette, chunks[3]);
}

/// Header: title plus the current category/sort/count status
fn render_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let status = format!(
        " {} of {} posts | category: {} | sort: {} | theme: {} ",
        app.visible_len(),
        app.filtered_len(),
        app.category,
        app.sort.as_str(),
        app.theme.as_str(),
    );

    let block = Block::default()
        .title(" WordPress Reader ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        status,
        Style::default().fg(palette.dim),
    )))
    .block(block);

    frame.render_widget(paragraph, area);
}

/// Search bar: the committed term, or the live draft with a cursor marker
fn render_search_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (text, style) = if app.search_editing {
        (
            format!("{}█", app.search_draft),
            Style::default().fg(palette.fg),
        )
    } else if app.search_term.is_empty() {
        (
            "press / to search".to_string(),
            Style::default().fg(palette.dim),
        )
    } else {
        (app.search_term.clone(), Style::default().fg(palette.fg))
    };

    let border_style = if app.search_editing {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

/// The revealed post rows plus the sentinel row when more pages remain
fn render_rows(frame: &mut Frame, app: &App, visible: &[&Post], palette: &Palette, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    // Two lines per post; show the window around the selection that fits
    let rows_that_fit = (area.height.saturating_sub(2) as usize / 2).max(1);
    let first = app
        .selected_index
        .saturating_sub(rows_that_fit.saturating_sub(1));

    for (i, post) in visible.iter().enumerate().skip(first).take(rows_that_fit) {
        let selected = i == app.selected_index;

        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(palette.accent)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(palette.accent)),
            Span::styled(post.title.clone(), title_style),
        ]));

        let date = post.date.format("%b %e, %Y").to_string();
        let excerpt = excerpt_line(post);
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(date, Style::default().fg(palette.dim)),
            Span::styled("  ".to_string(), Style::default()),
            Span::styled(excerpt, Style::default().fg(palette.dim)),
        ]));
    }

    if app.visible_len() < app.filtered_len() {
        lines.push(Line::from(Span::styled(
            "  ↓ more posts",
            Style::default().fg(palette.dim),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Empty state, distinct from the fetch-error view
fn render_empty_state(frame: &mut Frame, palette: &Palette, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No posts found",
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try adjusting your search or filter criteria",
            Style::default().fg(palette.dim),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Footer key hints
fn render_footer(frame: &mut Frame, palette: &Palette, area: Rect) {
    let hints = " j/k move | Enter open | / search | c category | s sort | t theme | r refresh | ? help | q quit";
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(palette.dim))),
        area,
    );
}
