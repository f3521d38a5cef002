//! Terminal rendering of annotated code blocks
//!
//! Writes a block as styled terminal output using crossterm commands. For
//! each column the last annotation added that covers it decides the style.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use unicode_width::UnicodeWidthChar;

use crate::config::Config;
use crate::error::Result;
use crate::line::{CodeBlock, Line, LineModel};
use crate::theme::{Rgb, Theme};

/// Rendering settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show a line-number gutter
    pub line_numbers: bool,
    /// Columns per tab stop
    pub tab_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            tab_width: 4,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            line_numbers: config.line_numbers,
            tab_width: config.tab_width.max(1),
        }
    }
}

/// Style of a single rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: Color,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl CellStyle {
    fn at(line: &Line, col: usize, default_fg: Color) -> Self {
        match line.annotation_at(col) {
            Some(ann) => Self {
                fg: term_color(&ann.color).unwrap_or(default_fg),
                bold: ann.bold,
                italic: ann.italic,
                underline: ann.underline,
            },
            None => Self {
                fg: default_fg,
                bold: false,
                italic: false,
                underline: false,
            },
        }
    }
}

fn term_color(hex: &str) -> Option<Color> {
    Rgb::from_hex(hex).map(|Rgb { r, g, b }| Color::Rgb { r, g, b })
}

/// Width of a character at display column `width`
fn cell_width(ch: char, width: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        tab_width - width % tab_width
    } else {
        ch.width().unwrap_or(1)
    }
}

fn display_width(text: &str, tab_width: usize) -> usize {
    text.chars().fold(0, |width, ch| width + cell_width(ch, width, tab_width))
}

/// Write a highlighted block to `out`
///
/// Every line is padded with the theme background to the width of the
/// widest line.
pub fn render_block<W: Write>(out: &mut W, block: &CodeBlock, theme: &Theme, options: &RenderOptions) -> Result<()> {
    let tab_width = options.tab_width.max(1);
    let bg = term_color(&theme.bg).unwrap_or(Color::Reset);
    let fg = term_color(&theme.fg).unwrap_or(Color::Reset);
    let max_width = block
        .lines
        .iter()
        .map(|line| display_width(line.text(), tab_width))
        .max()
        .unwrap_or(0);
    let gutter = block.lines.len().to_string().len();

    for (idx, line) in block.lines.iter().enumerate() {
        queue!(out, SetBackgroundColor(bg))?;
        if options.line_numbers {
            queue!(
                out,
                SetForegroundColor(fg),
                SetAttribute(Attribute::Dim),
                Print(format!("{:>gutter$} ", idx + 1)),
                SetAttribute(Attribute::NormalIntensity)
            )?;
        }

        let mut current: Option<CellStyle> = None;
        let mut width = 0;
        for (col, ch) in line.text().chars().enumerate() {
            let style = CellStyle::at(line, col, fg);
            if current != Some(style) {
                queue!(out, SetAttribute(Attribute::Reset), SetBackgroundColor(bg), SetForegroundColor(style.fg))?;
                if style.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                if style.italic {
                    queue!(out, SetAttribute(Attribute::Italic))?;
                }
                if style.underline {
                    queue!(out, SetAttribute(Attribute::Underlined))?;
                }
                current = Some(style);
            }

            let cells = cell_width(ch, width, tab_width);
            match ch {
                '\t' => queue!(out, Print(" ".repeat(cells)))?,
                // Never pass raw control characters through to the terminal
                c if c.is_control() => queue!(out, Print('\u{fffd}'))?,
                c => queue!(out, Print(c))?,
            }
            width += cells;
        }

        queue!(
            out,
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(bg),
            Print(" ".repeat(max_width.saturating_sub(width))),
            ResetColor,
            Print("\n")
        )?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{AnsiTokenizer, FontStyle, StyleAnnotation, Tokenizer};

    /// Render and strip the escape sequences again
    fn render_plain(block: &CodeBlock, options: &RenderOptions) -> Vec<String> {
        let theme = Theme::bundled("dark").unwrap();
        let mut out = Vec::new();
        render_block(&mut out, block, &theme, options).unwrap();
        let text = String::from_utf8(out).unwrap();
        AnsiTokenizer
            .tokenize(&text, "ansi", &theme)
            .unwrap()
            .iter()
            .map(|tokens| tokens.iter().map(|t| t.content.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_lines_padded_to_widest() {
        let block = CodeBlock::new("ab\nabcd", "text");
        let lines = render_plain(&block, &RenderOptions::default());
        assert_eq!(lines, vec!["ab  ", "abcd", ""]);
    }

    #[test]
    fn test_line_numbers_and_tabs() {
        let block = CodeBlock::new("\tx", "text");
        let options = RenderOptions {
            line_numbers: true,
            tab_width: 4,
        };
        assert_eq!(render_plain(&block, &options)[0], "1     x");
    }

    #[test]
    fn test_wide_chars_padding() {
        let block = CodeBlock::new("你\nabc", "text");
        assert_eq!(render_plain(&block, &RenderOptions::default())[0], "你 ");
    }

    #[test]
    fn test_control_chars_replaced() {
        let block = CodeBlock::new("a\u{7}b", "text");
        assert_eq!(render_plain(&block, &RenderOptions::default())[0], "a\u{fffd}b");
    }

    #[test]
    fn test_latest_annotation_wins() {
        let mut line = Line::from("ab");
        line.add_annotation(StyleAnnotation::new("#ff0000", FontStyle::empty(), 0, 2));
        line.add_annotation(StyleAnnotation::new("#00ff00", FontStyle::BOLD, 1, 2));

        let first = CellStyle::at(&line, 0, Color::Reset);
        let second = CellStyle::at(&line, 1, Color::Reset);
        assert_eq!(first.fg, Color::Rgb { r: 255, g: 0, b: 0 });
        assert!(!first.bold);
        assert_eq!(second.fg, Color::Rgb { r: 0, g: 255, b: 0 });
        assert!(second.bold);
        assert_eq!(CellStyle::at(&line, 5, Color::Reset).fg, Color::Reset);
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            line_numbers: true,
            tab_width: 8,
            ..Config::default()
        };
        assert_eq!(
            RenderOptions::from(&config),
            RenderOptions {
                line_numbers: true,
                tab_width: 8
            }
        );
    }
}
