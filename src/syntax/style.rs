//! Style types for annotated text
//!
//! This module provides the font style flags carried by tokens and the
//! column-anchored style annotations that are attached to lines.

use bitflags::bitflags;

bitflags! {
    /// Font style flags as encoded by the tokenizer.
    ///
    /// The bit values match the TextMate/Shiki encoding, so a raw bitmask
    /// can be converted with [`FontStyle::from_bits_truncate`].
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const ITALIC    = 0b001;
        const BOLD      = 0b010;
        const UNDERLINE = 0b100;
    }
}

impl FontStyle {
    /// Parse a theme `fontStyle` value such as `"bold italic"`
    ///
    /// Unknown words are ignored; an empty string clears all flags.
    pub fn parse(value: &str) -> Self {
        value
            .split_whitespace()
            .fold(FontStyle::empty(), |acc, word| match word {
                "italic" => acc | FontStyle::ITALIC,
                "bold" => acc | FontStyle::BOLD,
                "underline" => acc | FontStyle::UNDERLINE,
                _ => acc,
            })
    }
}

/// A style applied to a column range of a line
///
/// Columns are `char` indices into the line's current text. Ranges of
/// different annotations may overlap; the line keeps them all in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAnnotation {
    /// Foreground color (theme color string, e.g. `#d4d4d4`)
    pub color: String,
    /// Italic text
    pub italic: bool,
    /// Bold text
    pub bold: bool,
    /// Underlined text
    pub underline: bool,
    /// First column covered (inclusive)
    pub column_start: usize,
    /// Column where the annotation ends (exclusive)
    pub column_end: usize,
}

impl StyleAnnotation {
    /// Create an annotation from a color and font style flags
    pub fn new(color: impl Into<String>, font_style: FontStyle, column_start: usize, column_end: usize) -> Self {
        Self {
            color: color.into(),
            italic: font_style.contains(FontStyle::ITALIC),
            bold: font_style.contains(FontStyle::BOLD),
            underline: font_style.contains(FontStyle::UNDERLINE),
            column_start,
            column_end,
        }
    }

    /// Check if this annotation covers a column
    pub fn contains(&self, col: usize) -> bool {
        col >= self.column_start && col < self.column_end
    }

    /// Number of columns covered
    pub fn len(&self) -> usize {
        self.column_end.saturating_sub(self.column_start)
    }

    /// Check if the annotation covers no columns
    pub fn is_empty(&self) -> bool {
        self.column_start >= self.column_end
    }
}
