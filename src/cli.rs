//! Command-line interface parsing for WordPress Reader CLI
//!
//! This module handles parsing of CLI arguments using clap, turning them into
//! the startup configuration applied before the first fetch.

use clap::Parser;
use thiserror::Error;

use crate::data::posts::DEFAULT_SITE;
use crate::feed::SortKey;
use crate::theme::Theme;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified sort key is not recognized
    #[error("Invalid sort key: '{0}'. Valid keys: date, title")]
    InvalidSort(String),

    /// The specified theme name is not recognized
    #[error("Invalid theme: '{0}'. Valid themes: dark, light")]
    InvalidTheme(String),
}

/// WordPress Reader CLI - Browse a WordPress blog from the terminal
#[derive(Parser, Debug)]
#[command(name = "wpreader")]
#[command(about = "Read, search, and filter WordPress blog posts in the terminal")]
#[command(version)]
pub struct Cli {
    /// Start with this search term applied
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Start with only this category shown
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Sort order: date (newest first) or title (alphabetical)
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Color theme: dark or light (overrides the saved preference)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// WordPress.com site to read, e.g. example.wordpress.com
    #[arg(long, value_name = "DOMAIN", default_value = DEFAULT_SITE)]
    pub site: String,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Search term applied before the first render
    pub initial_search: String,
    /// Category selected before the first render
    pub initial_category: String,
    /// Sort order for the post list
    pub sort: SortKey,
    /// Theme override from the CLI, if given
    pub theme_override: Option<Theme>,
    /// Site to fetch posts from
    pub site: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            initial_search: String::new(),
            initial_category: crate::feed::ALL_CATEGORIES.to_string(),
            sort: SortKey::default(),
            theme_override: None,
            site: DEFAULT_SITE.to_string(),
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid sort key or theme was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let sort = match &cli.sort {
            None => SortKey::default(),
            Some(s) => SortKey::from_str(s).ok_or_else(|| CliError::InvalidSort(s.clone()))?,
        };

        let theme_override = match &cli.theme {
            None => None,
            Some(t) => Some(Theme::from_str(t).ok_or_else(|| CliError::InvalidTheme(t.clone()))?),
        };

        Ok(StartupConfig {
            initial_search: cli.search.clone().unwrap_or_default(),
            initial_category: cli
                .category
                .clone()
                .unwrap_or_else(|| crate::feed::ALL_CATEGORIES.to_string()),
            sort,
            theme_override,
            site: cli.site.clone(),
        })
    }
}
