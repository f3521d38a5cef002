//! Python language definition

use super::CALL_PATTERN;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

const KEYWORDS: &str = r"\b(and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|match|case|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python");
    lang.add_alias("py");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    // Triple-quoted strings come first so they win over plain quotes
    lang.add_multiline(MultilineRule::new("triple_double", r#"(?:\b[fFrRbBuU]{1,2})?""""#, r#"""""#, TokenType::String, 1));
    lang.add_multiline(MultilineRule::new("triple_single", r"(?:\b[fFrRbBuU]{1,2})?'''", r"'''", TokenType::String, 2));
    lang.add_multiline(MultilineRule::with_escape("double_string", r#"(?:\b[fFrRbBuU]{1,2})?""#, "\"", TokenType::String, 3, '\\'));
    lang.add_multiline(MultilineRule::with_escape("single_string", r"(?:\b[fFrRbBuU]{1,2})?'", "'", TokenType::String, 4, '\\'));

    lang.add_pattern(PatternRule::new("comment", r"#.*$", TokenType::Comment, 100));
    lang.add_pattern(PatternRule::new("decorator", r"@[\w.]+", TokenType::Attribute, 95));
    lang.add_pattern(PatternRule::new("keyword", KEYWORDS, TokenType::Keyword, 80));
    lang.add_pattern(PatternRule::new("constant", r"\b(True|False|None)\b", TokenType::Constant, 78));
    lang.add_pattern(PatternRule::new("self", r"\b(self|cls)\b", TokenType::Variable, 77));
    lang.add_pattern(PatternRule::with_group("call", CALL_PATTERN, 1, TokenType::Function, 70));
    lang.add_pattern(PatternRule::new("class_name", r"\b[A-Z][A-Za-z0-9_]*\b", TokenType::Type, 60));
    lang.add_pattern(PatternRule::new(
        "number",
        r"\b(?:0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?j?)\b",
        TokenType::Number,
        65,
    ));
    lang.add_pattern(PatternRule::new("operator", r"[+\-*/%&|^~<>=!]+", TokenType::Operator, 40));

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::LineState;

    #[test]
    fn test_python_def() {
        let lang = python_language();
        let text = "def greet(name):";
        let result = lang.highlight_line(text, LineState::default());
        let kinds: Vec<_> = result.spans.iter().map(|s| (&text[s.start..s.end], s.token_type)).collect();

        assert_eq!(kinds, vec![("def", TokenType::Keyword), ("greet", TokenType::Function)]);
    }

    #[test]
    fn test_python_docstring_spans_lines() {
        let lang = python_language();
        let first = lang.highlight_line("    \"\"\"Docs start", LineState::default());
        assert_eq!(first.end_state, LineState::inside(1));

        let second = lang.highlight_line("end.\"\"\" + 1", first.end_state);
        assert!(!second.end_state.is_inside_multiline());
        assert_eq!(second.spans[0].start, 0);
        assert_eq!(second.spans[0].end, 7);
        assert_eq!(second.spans[0].token_type, TokenType::String);
    }

    #[test]
    fn test_python_comment() {
        let lang = python_language();
        let result = lang.highlight_line("x = 1  # note", LineState::default());
        let last = result.spans.last().unwrap();
        assert_eq!(last.token_type, TokenType::Comment);
        assert_eq!(last.start, 7);
    }
}
