//! Color themes
//!
//! A [`Theme`] is an immutable value built once per render from a
//! [`ThemeSource`] (usually VS Code or Shiki theme JSON). Construction
//! resolves the theme type and fills in the editor and terminal palette
//! colors the source leaves out, so `fg` and `bg` are always concrete.

mod bundled;
mod color;
mod jsonc;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::syntax::FontStyle;

pub use bundled::BUNDLED_THEMES;
pub use color::Rgb;
pub use jsonc::strip_jsonc;

const EDITOR_FOREGROUND: &str = "editor.foreground";
const EDITOR_BACKGROUND: &str = "editor.background";

/// Terminal palette keys, in ANSI color index order
const ANSI_COLOR_KEYS: [&str; 16] = [
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
];

const DARK_ANSI: [&str; 16] = [
    "#000000", "#cd3131", "#0dbc79", "#e5e510", "#2472c8", "#bc3fbc", "#11a8cd", "#e5e5e5",
    "#666666", "#f14c4c", "#23d18b", "#f5f543", "#3b8eea", "#d670d6", "#29b8db", "#e5e5e5",
];

const LIGHT_ANSI: [&str; 16] = [
    "#000000", "#cd3131", "#00bc00", "#949800", "#0451a5", "#bc05bc", "#0598bc", "#555555",
    "#666666", "#cd3131", "#14ce14", "#b5ba00", "#0451a5", "#bc05bc", "#0598bc", "#a5a5a5",
];

/// Light or dark theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeType {
    Light,
    Dark,
}

impl ThemeType {
    /// Parse a theme `type` value; `css` and anything else unknown is rejected
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "light" => Ok(ThemeType::Light),
            "dark" => Ok(ThemeType::Dark),
            other => Err(HighlightError::UnsupportedThemeType(other.to_string())),
        }
    }

    /// Guess the type from an editor background color
    ///
    /// Themes without a parseable background are assumed to be dark.
    pub fn guess(background: Option<&str>) -> Self {
        match background.and_then(Rgb::from_hex) {
            Some(rgb) if rgb.luminance() >= 0.5 => ThemeType::Light,
            _ => ThemeType::Dark,
        }
    }

    fn default_colors(self) -> HashMap<String, String> {
        let (fg, bg, ansi) = match self {
            ThemeType::Dark => ("#d4d4d4", "#1e1e1e", &DARK_ANSI),
            ThemeType::Light => ("#000000", "#ffffff", &LIGHT_ANSI),
        };
        let mut colors: HashMap<String, String> = ANSI_COLOR_KEYS
            .iter()
            .zip(ansi.iter())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        colors.insert(EDITOR_FOREGROUND.to_string(), fg.to_string());
        colors.insert(EDITOR_BACKGROUND.to_string(), bg.to_string());
        colors
    }
}

/// Scope selector of a token style rule: one string or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
    One(String),
    Many(Vec<String>),
}

impl ScopeSelector {
    /// Individual selectors; comma-separated strings are split
    ///
    /// Descendant selectors (`source.python string`) are reduced to their
    /// last scope.
    pub fn selectors(&self) -> Vec<&str> {
        let parts: Vec<&str> = match self {
            ScopeSelector::One(s) => s.split(',').collect(),
            ScopeSelector::Many(list) => list.iter().map(String::as_str).collect(),
        };
        parts
            .into_iter()
            .filter_map(|part| part.split_whitespace().last())
            .collect()
    }
}

/// Style settings of a token style rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStyleSettings {
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub font_style: Option<String>,
}

/// A scope-matching token style rule (`tokenColors` entry)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenStyleRule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scope: Option<ScopeSelector>,
    #[serde(default)]
    pub settings: TokenStyleSettings,
}

/// Resolved style for a scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStyle {
    pub color: Option<String>,
    pub font_style: FontStyle,
}

/// Theme input as found in theme files
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThemeSource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub theme_type: Option<String>,
    #[serde(default)]
    pub colors: Option<HashMap<String, String>>,
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default, alias = "tokenColors")]
    pub settings: Option<Vec<TokenStyleRule>>,
}

/// A resolved color theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub theme_type: ThemeType,
    /// Workbench colors, including defaults for keys the source omitted
    pub colors: HashMap<String, String>,
    /// Default foreground color
    pub fg: String,
    /// Background color
    pub bg: String,
    /// Token style rules, in source order
    pub settings: Vec<TokenStyleRule>,
}

impl Theme {
    /// Build a theme from its source description
    pub fn new(source: ThemeSource) -> Result<Self> {
        let user_colors = source.colors.unwrap_or_default();
        let theme_type = match source.theme_type.as_deref() {
            Some(value) => ThemeType::parse(value)?,
            None => ThemeType::guess(user_colors.get(EDITOR_BACKGROUND).map(String::as_str)),
        };
        let settings = source.settings.unwrap_or_default();

        // Old-style themes keep editor colors in a scope-less first rule
        let mut colors = theme_type.default_colors();
        if let Some(global) = settings.iter().find(|rule| rule.scope.is_none()) {
            if let Some(fg) = &global.settings.foreground {
                colors.insert(EDITOR_FOREGROUND.to_string(), fg.clone());
            }
            if let Some(bg) = &global.settings.background {
                colors.insert(EDITOR_BACKGROUND.to_string(), bg.clone());
            }
        }
        colors.extend(user_colors);

        let fg = source
            .fg
            .or_else(|| colors.get(EDITOR_FOREGROUND).cloned())
            .unwrap_or_default();
        let bg = source
            .bg
            .or_else(|| colors.get(EDITOR_BACKGROUND).cloned())
            .unwrap_or_default();

        Ok(Self {
            name: source.name.unwrap_or_default(),
            theme_type,
            colors,
            fg,
            bg,
            settings,
        })
    }

    /// Parse a theme from JSON or JSONC text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let source: ThemeSource = serde_json::from_str(&strip_jsonc(json))?;
        Self::new(source)
    }

    /// Load a theme file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load one of the built-in themes by name
    pub fn bundled(name: &str) -> Result<Self> {
        let (_, json) = BUNDLED_THEMES
            .iter()
            .find(|(theme_name, _)| *theme_name == name)
            .ok_or_else(|| HighlightError::UnknownTheme(name.to_string()))?;
        Self::from_json_str(json)
    }

    /// Resolve a bundled theme name or a theme file path
    pub fn resolve(name_or_path: &str) -> Result<Self> {
        if BUNDLED_THEMES.iter().any(|(name, _)| *name == name_or_path) {
            return Self::bundled(name_or_path);
        }
        let path = Path::new(name_or_path);
        if path.exists() {
            Self::from_path(path)
        } else {
            Err(HighlightError::UnknownTheme(name_or_path.to_string()))
        }
    }

    /// Look up the style of a dotted TextMate scope
    ///
    /// A selector matches when it equals the scope or is a prefix of it
    /// ending at a dot. Color and font style are resolved independently:
    /// the longest matching selector wins, later rules win ties.
    pub fn style_for_scope(&self, scope: &str) -> ScopeStyle {
        let mut color: Option<(usize, &str)> = None;
        let mut font_style: Option<(usize, &str)> = None;

        for rule in &self.settings {
            let Some(selector) = &rule.scope else {
                continue;
            };
            for sel in selector.selectors() {
                if !scope_matches(sel, scope) {
                    continue;
                }
                let score = sel.len();
                if let Some(fg) = &rule.settings.foreground {
                    if color.map_or(true, |(best, _)| score >= best) {
                        color = Some((score, fg));
                    }
                }
                if let Some(fs) = &rule.settings.font_style {
                    if font_style.map_or(true, |(best, _)| score >= best) {
                        font_style = Some((score, fs));
                    }
                }
            }
        }

        ScopeStyle {
            color: color.map(|(_, c)| c.to_string()),
            font_style: font_style.map_or(FontStyle::empty(), |(_, fs)| FontStyle::parse(fs)),
        }
    }

    /// Color of a 16-color terminal palette entry
    pub fn ansi_color(&self, index: u8) -> Option<&str> {
        ANSI_COLOR_KEYS
            .get(usize::from(index))
            .and_then(|key| self.colors.get(*key))
            .map(String::as_str)
    }
}

fn scope_matches(selector: &str, scope: &str) -> bool {
    scope
        .strip_prefix(selector)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}
