//! Configuration file support
//!
//! Loads settings from ~/.tintline.toml (or %USERPROFILE%\.tintline.toml on Windows)
//!
//! Example:
//! ```text
//! # tintline configuration
//! theme = "light"
//! line-numbers = true
//! tab-width = 4
//! terminal-languages = ["bash", "sh", "console", "ansi"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::error::Result;
use crate::syntax::TERMINAL_LANGUAGES;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Bundled theme name or path to a theme file
    pub theme: String,
    /// Whether to show line numbers
    pub line_numbers: bool,
    /// Tab width for display
    pub tab_width: usize,
    /// Languages that get placeholder rewriting and control-sequence removal
    pub terminal_languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            line_numbers: false,
            tab_width: 4,
            terminal_languages: TERMINAL_LANGUAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        let home = std::env::var("USERPROFILE");
        #[cfg(not(windows))]
        let home = std::env::var("HOME");

        home.ok().map(|home| PathBuf::from(home).join(".tintline.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file gives the defaults; a broken one is reported and
    /// ignored.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(&path).unwrap_or_else(|e| {
                warn!("ignoring {}: {}", path.display(), e);
                Config::default()
            }),
            _ => Config::default(),
        }
    }

    /// Load configuration from a file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.tab_width = config.tab_width.clamp(1, 16);
        Ok(config)
    }

    /// Check whether a language is configured as a terminal language
    pub fn is_terminal_language(&self, language: &str) -> bool {
        self.terminal_languages.iter().any(|l| l.eq_ignore_ascii_case(language))
    }
}
