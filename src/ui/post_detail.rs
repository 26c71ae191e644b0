//! Post detail screen rendering
//!
//! Renders a single post: title, dates, categories, canonical link, and the
//! body converted from HTML to readable text. The view scrolls with j/k; the
//! scroll offset is clamped against the rendered content height.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{collapse_whitespace, html_to_text, Post};
use crate::theme::Palette;

/// Renders the detail view for the given post id
pub fn render(frame: &mut Frame, app: &App, post_id: u64) {
    let palette = app.theme.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let Some(post) = app.post_by_id(post_id) else {
        render_missing(frame, &palette, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // metadata
            Constraint::Min(1),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_metadata(frame, post, &palette, chunks[0]);
    render_body(frame, app, post, &palette, chunks[1]);

    let hints = " j/k scroll | g top | Esc back | t theme | q quit";
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(palette.dim))),
        chunks[2],
    );
}

/// Title, dates, categories, and the canonical link
fn render_metadata(frame: &mut Frame, post: &Post, palette: &Palette, area: Rect) {
    let mut categories: Vec<&str> = post
        .categories
        .iter()
        .filter(|(_, member)| **member)
        .map(|(name, _)| name.as_str())
        .collect();
    categories.sort_unstable();

    let lines = vec![
        Line::from(Span::styled(
            format!("published {}", post.date.format("%B %e, %Y")),
            Style::default().fg(palette.dim),
        )),
        Line::from(Span::styled(
            if categories.is_empty() {
                "uncategorized".to_string()
            } else {
                categories.join(", ")
            },
            Style::default().fg(palette.dim),
        )),
        Line::from(Span::styled(
            post.url.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ", post.title))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The post body, HTML converted to readable text, scrolled and wrapped
fn render_body(frame: &mut Frame, app: &App, post: &Post, palette: &Palette, area: Rect) {
    let text = html_to_text(&post.content);
    let lines: Vec<Line> = text
        .lines()
        .map(|line| Line::from(collapse_whitespace(line)))
        .collect();

    // Clamp the scroll offset so the last line stays on screen
    let content_height = lines.len() as u16;
    let viewport = area.height.saturating_sub(2);
    let max_scroll = content_height.saturating_sub(viewport);
    let offset = app.detail_scroll_offset.min(max_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(palette.fg))
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));

    frame.render_widget(paragraph, area);
}

/// Shown if the selected id is no longer in the post set
fn render_missing(frame: &mut Frame, palette: &Palette, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(
        "Post not found",
        Style::default().fg(palette.error),
    ));
    frame.render_widget(paragraph, area);
}
