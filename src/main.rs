//! WordPress Reader CLI - Browse a WordPress blog from the terminal
//!
//! A terminal UI application that fetches posts from a WordPress.com site,
//! caches them locally, and renders a searchable, sortable, filterable post
//! list with light/dark theming.

mod app;
mod cache;
mod cli;
mod data;
mod debounce;
mod feed;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, AppState};
use cli::{Cli, StartupConfig};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match &app.state {
        AppState::Loading => {
            render_loading(frame, app);
        }
        AppState::PostList => {
            ui::render_post_list(frame, app);
        }
        AppState::PostDetail(post_id) => {
            ui::render_post_detail(frame, app, *post_id);
        }
        AppState::Error(message) => {
            render_error(frame, app, message);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame, &app.theme.palette());
    }
}

/// Renders a loading message while posts are being fetched
fn render_loading(frame: &mut ratatui::Frame, app: &App) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::Style,
        widgets::Paragraph,
    };

    let palette = app.theme.palette();
    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading posts...")
        .style(Style::default().fg(palette.accent).bg(palette.bg))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

/// Renders the fetch-error view
///
/// Distinct from the empty state: this appears only when the fetch itself
/// failed, never for an empty post set.
fn render_error(frame: &mut ratatui::Frame, app: &App, message: &str) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Modifier, Style},
        text::{Line, Span},
        widgets::Paragraph,
    };

    let palette = app.theme.palette();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(4),
            Constraint::Percentage(40),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "r retry | q quit",
            Style::default().fg(palette.dim),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Validate CLI arguments before touching the terminal
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance
    let mut app = App::with_startup_config(config);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Trigger initial data load (cache-aware)
    app.load_posts(false).await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Instant::now());
            }
        }

        // Commit any debounced search whose deadline has passed
        app.tick(Instant::now());

        // Manual refresh bypasses the cache
        if app.refresh_requested {
            app.refresh_requested = false;
            terminal.draw(|f| render_ui(f, &app))?;
            app.load_posts(true).await;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
