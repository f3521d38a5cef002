//! Tokenizer interface and the built-in rule tokenizer

use log::trace;

use super::registry::LanguageRegistry;
use super::rules::{ClassifiedSpan, LineState};
use super::tokens::ThemedToken;
use crate::error::{HighlightError, Result};
use crate::theme::Theme;

/// Language ids that are highlighted as unstyled text
const PLAIN_TEXT_IDS: [&str; 4] = ["text", "plaintext", "txt", "plain"];

/// Something that splits code into themed tokens
///
/// Returns one token list per `\n`-separated line of `code`. Token contents
/// of a line concatenate to the text the tokenizer saw for that line.
pub trait Tokenizer {
    fn tokenize(&self, code: &str, language: &str, theme: &Theme) -> Result<Vec<Vec<ThemedToken>>>;
}

/// Regex rule tokenizer over the built-in language definitions
#[derive(Default)]
pub struct RuleTokenizer {
    registry: LanguageRegistry,
}

impl RuleTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom set of languages
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, code: &str, language: &str, theme: &Theme) -> Result<Vec<Vec<ThemedToken>>> {
        let Some(lang) = self.registry.get(language) else {
            if PLAIN_TEXT_IDS.contains(&language.to_lowercase().as_str()) {
                return Ok(code.split('\n').map(plain_line).collect());
            }
            return Err(HighlightError::UnknownLanguage(language.to_string()));
        };

        let mut state = LineState::default();
        let mut lines = Vec::new();
        for text in code.split('\n') {
            let result = lang.highlight_line(text, state);
            trace!("{}: {} spans, end state {:?}", lang.name, result.spans.len(), result.end_state);
            state = result.end_state;
            lines.push(spans_to_tokens(text, &result.spans, theme));
        }
        Ok(lines)
    }
}

fn plain_line(text: &str) -> Vec<ThemedToken> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![ThemedToken::plain(text)]
    }
}

/// Turn classified spans into tokens covering the whole line
fn spans_to_tokens(text: &str, spans: &[ClassifiedSpan], theme: &Theme) -> Vec<ThemedToken> {
    let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0;
    for span in spans {
        if span.start > pos {
            tokens.push(ThemedToken::plain(&text[pos..span.start]));
        }
        let style = theme.style_for_scope(span.token_type.scope());
        tokens.push(ThemedToken::new(&text[span.start..span.end], style.color, style.font_style));
        pos = span.end;
    }
    if pos < text.len() {
        tokens.push(ThemedToken::plain(&text[pos..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::FontStyle;

    fn joined(line: &[ThemedToken]) -> String {
        line.iter().map(|t| t.content.as_str()).collect()
    }

    #[test]
    fn test_tokens_cover_every_line() {
        let tokenizer = RuleTokenizer::new();
        let theme = Theme::bundled("dark").unwrap();
        let code = "fn main() {\n    let x = 42; // answer\n\n}";
        let lines = tokenizer.tokenize(code, "rust", &theme).unwrap();

        assert_eq!(lines.len(), 4);
        for (tokens, text) in lines.iter().zip(code.split('\n')) {
            assert_eq!(joined(tokens), text);
        }
        assert!(lines[2].is_empty());
    }

    #[test]
    fn test_theme_styles_applied() {
        let tokenizer = RuleTokenizer::new();
        let theme = Theme::bundled("dark").unwrap();
        let lines = tokenizer.tokenize("x = 1 # note", "python", &theme).unwrap();
        let comment = lines[0].last().unwrap();

        assert_eq!(comment.content, "# note");
        assert_eq!(comment.color.as_deref(), Some("#6a9955"));
        assert_eq!(comment.font_style, FontStyle::ITALIC);
        // Gaps stay unstyled
        assert_eq!(lines[0][0], ThemedToken::plain("x "));
    }

    #[test]
    fn test_state_carries_across_lines() {
        let tokenizer = RuleTokenizer::new();
        let theme = Theme::bundled("dark").unwrap();
        let lines = tokenizer.tokenize("/* a\nb */ c", "rust", &theme).unwrap();

        assert_eq!(lines[1][0].content, "b */");
        assert_eq!(lines[1][0].color.as_deref(), Some("#6a9955"));
    }

    #[test]
    fn test_plain_text_and_unknown_language() {
        let tokenizer = RuleTokenizer::new();
        let theme = Theme::bundled("dark").unwrap();

        let lines = tokenizer.tokenize("hello\n", "text", &theme).unwrap();
        assert_eq!(lines, vec![vec![ThemedToken::plain("hello")], vec![]]);

        let err = tokenizer.tokenize("x", "cobol", &theme).unwrap_err();
        assert!(matches!(err, HighlightError::UnknownLanguage(id) if id == "cobol"));
    }
}
