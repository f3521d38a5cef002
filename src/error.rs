//! Error types for tintline

use thiserror::Error;

/// Result type alias for tintline operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Theme type \"{0}\" is not supported")]
    UnsupportedThemeType(String),

    #[error("Invalid theme JSON: {0}")]
    ThemeParse(#[from] serde_json::Error),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// The tokenizer text cannot be produced from the line text by deletions alone
    #[error("Edited string contains characters not present in original (original: {original:?}, edited: {edited:?})")]
    NotASubsequence { original: String, edited: String },

    #[error("No syntax definition for language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
