//! Light/dark theming and theme persistence
//!
//! The active theme maps to a small palette of ratatui colors used by every
//! view. The chosen theme is persisted as a JSON preference file in the XDG
//! config directory and restored on the next start.

use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Color theme for the terminal UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colors used across all views for the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Background fill
    pub bg: Color,
    /// Primary text
    pub fg: Color,
    /// Titles, borders, and the selection highlight
    pub accent: Color,
    /// Secondary text (dates, excerpts, hints)
    pub dim: Color,
    /// Selected row background
    pub highlight_bg: Color,
    /// Error messages
    pub error: Color,
}

impl Theme {
    /// The other theme, for the toggle binding
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Parses a theme from its CLI/preference name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The name shown in the status line and stored in preferences
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The color palette for this theme
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                bg: Color::Reset,
                fg: Color::White,
                accent: Color::Cyan,
                dim: Color::DarkGray,
                highlight_bg: Color::DarkGray,
                error: Color::Red,
            },
            Theme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                dim: Color::Gray,
                highlight_bg: Color::LightBlue,
                error: Color::LightRed,
            },
        }
    }
}

/// On-disk shape of the preference file
#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    theme: Theme,
}

/// Key-value preference store backed by a JSON file
///
/// Lives in the XDG config directory (`~/.config/wpreader/` on Linux).
/// Missing or unreadable preferences fall back to defaults; save failures
/// are reported to the caller and never fatal.
#[derive(Debug, Clone)]
pub struct Preferences {
    config_dir: PathBuf,
}

impl Preferences {
    /// Creates a preference store in the XDG config directory
    ///
    /// Returns `None` if the config directory cannot be determined.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "wpreader")?;
        Some(Self {
            config_dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    /// Creates a preference store in a custom directory (for testing)
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn file_path(&self) -> PathBuf {
        self.config_dir.join("preferences.json")
    }

    /// Loads the persisted theme, if any
    pub fn load_theme(&self) -> Option<Theme> {
        let content = fs::read_to_string(self.file_path()).ok()?;
        let prefs: PreferenceFile = serde_json::from_str(&content).ok()?;
        Some(prefs.theme)
    }

    /// Persists the theme, overwriting any previous preference
    pub fn save_theme(&self, theme: Theme) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        let prefs = PreferenceFile { theme };
        let json = serde_json::to_string_pretty(&prefs)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(self.file_path(), json)
    }
}
