//! Line representation and text operations
//!
//! A [`Line`] holds one line of a code block together with the style
//! annotations layered over it. Columns are `char` indices, not bytes.

use unicode_width::UnicodeWidthStr;

use crate::syntax::StyleAnnotation;

/// The line operations the annotation mapper needs
pub trait LineModel {
    /// Current text of the line
    fn text(&self) -> &str;

    /// Replace the half-open column range with `replacement`
    fn edit_text(&mut self, column_start: usize, column_end: usize, replacement: &str);

    /// Attach an annotation anchored to the current text
    fn add_annotation(&mut self, annotation: StyleAnnotation);
}

/// A single line of a code block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// The text content (without trailing newline)
    text: String,
    /// Annotations in insertion order
    annotations: Vec<StyleAnnotation>,
}

impl Line {
    /// Create a new empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line from a string
    pub fn from_string(s: String) -> Self {
        Self {
            text: s,
            annotations: Vec::new(),
        }
    }

    /// Annotations attached so far
    pub fn annotations(&self) -> &[StyleAnnotation] {
        &self.annotations
    }

    /// Get the length in columns
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the line is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the display width of the line
    pub fn display_width(&self) -> usize {
        self.text.width()
    }

    /// Get the byte position of a column
    ///
    /// Columns past the end map to the end of the text.
    pub fn col_to_byte(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map_or(self.text.len(), |(pos, _)| pos)
    }

    /// The last annotation added that covers `col`, if any
    pub fn annotation_at(&self, col: usize) -> Option<&StyleAnnotation> {
        self.annotations.iter().rev().find(|a| a.contains(col))
    }
}

/// Map a column across an edit of `[start, end)` replaced by `inserted` columns
fn shift_column(col: usize, start: usize, end: usize, inserted: usize) -> usize {
    if col <= start {
        col
    } else if col >= end {
        col - (end - start) + inserted
    } else {
        start
    }
}

impl LineModel for Line {
    fn text(&self) -> &str {
        &self.text
    }

    fn edit_text(&mut self, column_start: usize, column_end: usize, replacement: &str) {
        let start_byte = self.col_to_byte(column_start);
        let end_byte = self.col_to_byte(column_end);
        self.text.replace_range(start_byte..end_byte, replacement);

        // Keep existing annotations anchored to the text they covered
        let inserted = replacement.chars().count();
        self.annotations.retain_mut(|ann| {
            let was_empty = ann.is_empty();
            ann.column_start = shift_column(ann.column_start, column_start, column_end, inserted);
            ann.column_end = shift_column(ann.column_end, column_start, column_end, inserted);
            was_empty || !ann.is_empty()
        });
    }

    fn add_annotation(&mut self, annotation: StyleAnnotation) {
        self.annotations.push(annotation);
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::from_string(s.to_string())
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

/// A block of code lines with its language
#[derive(Debug, Clone, Default)]
pub struct CodeBlock {
    /// Language identifier (e.g. `rust`, `bash`, `ansi`)
    pub language: String,
    /// Lines of the block
    pub lines: Vec<Line>,
}

impl CodeBlock {
    /// Split code into lines
    ///
    /// Accepts `\n` and `\r\n` line endings; one trailing `\r` is dropped
    /// from every line.
    pub fn new(code: &str, language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            lines: code
                .split('\n')
                .map(|line| Line::from(line.strip_suffix('\r').unwrap_or(line)))
                .collect(),
        }
    }

    /// The full code of the block, lines joined with `\n`
    pub fn code(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
