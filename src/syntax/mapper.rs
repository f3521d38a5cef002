//! Token annotation mapping
//!
//! Turns the token list of one line into style annotations on that line.
//! For terminal languages the tokenizer may have dropped characters
//! (control sequences), so those are first removed from the line itself,
//! range by range, leaving annotations that were already attached in place.

use std::borrow::Cow;
use std::sync::OnceLock;

use log::trace;
use regex::Regex;

use super::ranges::removed_ranges;
use super::style::StyleAnnotation;
use super::tokens::ThemedToken;
use crate::error::Result;
use crate::line::LineModel;
use crate::theme::Theme;

/// Language ids treated as terminal/shell content by default
pub const TERMINAL_LANGUAGES: [&str; 6] = ["shellscript", "shell", "bash", "sh", "zsh", "ansi"];

fn placeholder_regex() -> Option<&'static Regex> {
    static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"<([^>]*[^>\s])>").ok())
        .as_ref()
}

/// Replace the brackets of `<placeholder>` strings with `X`
///
/// Shell tokenizers read the closing `>` as a redirect. The rewrite keeps
/// the text length, so columns of the rewritten text match the original.
pub fn rewrite_placeholders(text: &str) -> Cow<'_, str> {
    match placeholder_regex() {
        Some(regex) => regex.replace_all(text, "X${1}X"),
        None => Cow::Borrowed(text),
    }
}

/// Annotate one line with its tokens
///
/// For terminal languages the concatenated token contents are compared
/// with the line text (placeholders rewritten the way the tokenizer saw
/// them) and the characters the tokenizer dropped are removed from the
/// line, highest column first. Then every token becomes one annotation,
/// its columns given by the running length of the tokens before it.
///
/// Annotations are always added, never merged with existing ones.
pub fn apply_tokens<L: LineModel>(
    line: &mut L,
    tokens: &[ThemedToken],
    theme: &Theme,
    is_terminal_language: bool,
) -> Result<()> {
    if is_terminal_language {
        let tokenizer_text: String = tokens.iter().map(|t| t.content.as_str()).collect();
        let ranges = removed_ranges(&rewrite_placeholders(line.text()), &tokenizer_text)?;
        for range in ranges.iter().rev() {
            trace!("removing columns {}..{}", range.start, range.end);
            line.edit_text(range.start, range.end, "");
        }
    }

    let mut col = 0;
    for token in tokens {
        let token_end = col + token.len();
        let color = token.color.as_deref().unwrap_or(theme.fg.as_str());
        line.add_annotation(StyleAnnotation::new(color, token.font_style, col, token_end));
        col = token_end;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HighlightError;
    use crate::line::Line;
    use crate::syntax::FontStyle;

    fn theme() -> Theme {
        Theme::bundled("dark").unwrap()
    }

    fn token(content: &str, color: &str, font_style: FontStyle) -> ThemedToken {
        ThemedToken::new(content, Some(color.to_string()), font_style)
    }

    #[test]
    fn test_tokens_to_annotations() {
        let mut line = Line::from("foobar");
        let tokens = vec![
            token("foo", "#fff", FontStyle::BOLD),
            token("bar", "#000", FontStyle::empty()),
        ];
        apply_tokens(&mut line, &tokens, &theme(), false).unwrap();

        assert_eq!(
            line.annotations(),
            &[
                StyleAnnotation {
                    color: "#fff".to_string(),
                    italic: false,
                    bold: true,
                    underline: false,
                    column_start: 0,
                    column_end: 3,
                },
                StyleAnnotation {
                    color: "#000".to_string(),
                    italic: false,
                    bold: false,
                    underline: false,
                    column_start: 3,
                    column_end: 6,
                },
            ]
        );
        assert_eq!(line.text(), "foobar");
    }

    #[test]
    fn test_missing_color_uses_theme_foreground() {
        let mut line = Line::from("ab");
        apply_tokens(&mut line, &[ThemedToken::plain("ab")], &theme(), false).unwrap();
        assert_eq!(line.annotations()[0].color, "#d4d4d4");
    }

    #[test]
    fn test_all_style_flags() {
        let mut line = Line::from("x");
        let all = FontStyle::ITALIC | FontStyle::BOLD | FontStyle::UNDERLINE;
        apply_tokens(&mut line, &[token("x", "#123456", all)], &theme(), false).unwrap();
        let ann = &line.annotations()[0];
        assert!(ann.italic && ann.bold && ann.underline);
    }

    #[test]
    fn test_multibyte_columns() {
        let mut line = Line::from("é = ü");
        let tokens = vec![ThemedToken::plain("é"), ThemedToken::plain(" = "), ThemedToken::plain("ü")];
        apply_tokens(&mut line, &tokens, &theme(), false).unwrap();
        let cols: Vec<_> = line.annotations().iter().map(|a| (a.column_start, a.column_end)).collect();
        assert_eq!(cols, vec![(0, 1), (1, 4), (4, 5)]);
    }

    #[test]
    fn test_terminal_removes_control_sequences() {
        let mut line = Line::from("\u{1b}[32mok\u{1b}[0m done");
        let tokens = vec![token("ok", "#0dbc79", FontStyle::empty()), ThemedToken::plain(" done")];
        apply_tokens(&mut line, &tokens, &theme(), true).unwrap();

        assert_eq!(line.text(), "ok done");
        let cols: Vec<_> = line.annotations().iter().map(|a| (a.column_start, a.column_end)).collect();
        assert_eq!(cols, vec![(0, 2), (2, 7)]);
    }

    #[test]
    fn test_terminal_keeps_existing_annotations_anchored() {
        let mut line = Line::from("\u{1b}[1mab\u{1b}[0mcd");
        // Marks "cd" before any removal
        line.add_annotation(StyleAnnotation::new("#abcabc", FontStyle::empty(), 10, 12));
        let tokens = vec![ThemedToken::plain("ab"), ThemedToken::plain("cd")];
        apply_tokens(&mut line, &tokens, &theme(), true).unwrap();

        assert_eq!(line.text(), "abcd");
        let marker = &line.annotations()[0];
        assert_eq!((marker.column_start, marker.column_end), (2, 4));
    }

    #[test]
    fn test_terminal_placeholder_not_removed() {
        let mut line = Line::from("echo <user>");
        let tokens = vec![ThemedToken::plain("echo"), ThemedToken::plain(" XuserX")];
        apply_tokens(&mut line, &tokens, &theme(), true).unwrap();

        assert_eq!(line.text(), "echo <user>");
        assert_eq!(line.annotations().len(), 2);
    }

    #[test]
    fn test_terminal_mismatch_is_an_error() {
        let mut line = Line::from("abc");
        let err = apply_tokens(&mut line, &[ThemedToken::plain("abx")], &theme(), true).unwrap_err();
        assert!(matches!(err, HighlightError::NotASubsequence { .. }));
        assert_eq!(line.text(), "abc");
        assert!(line.annotations().is_empty());
    }

    #[test]
    fn test_reapplying_adds_annotations() {
        let mut line = Line::from("foobar");
        let tokens = vec![token("foo", "#fff", FontStyle::BOLD), token("bar", "#000", FontStyle::empty())];
        apply_tokens(&mut line, &tokens, &theme(), false).unwrap();
        let first: Vec<_> = line.annotations().to_vec();

        apply_tokens(&mut line, &tokens, &theme(), false).unwrap();
        assert_eq!(line.text(), "foobar");
        assert_eq!(line.annotations().len(), 4);
        assert_eq!(&line.annotations()[2..], first.as_slice());
    }

    #[test]
    fn test_rewrite_placeholders() {
        assert_eq!(rewrite_placeholders("echo <user>"), "echo XuserX");
        assert_eq!(rewrite_placeholders("cp <src file> <dest>"), "cp Xsrc fileX XdestX");
        // Empty or whitespace-terminated brackets are left alone
        assert_eq!(rewrite_placeholders("a <> b"), "a <> b");
        assert_eq!(rewrite_placeholders("x <y > z"), "x <y > z");
        assert_eq!(rewrite_placeholders("cat a > b"), "cat a > b");
    }
}
