//! Rust language definition

use super::CALL_PATTERN;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

const KEYWORDS: &str = r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|type|union|unsafe|use|where|while)\b";

const TYPES: &str = r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64|[A-Z][A-Za-z0-9_]*)\b";

/// Create Rust language definition
pub fn rust_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("rust");
    lang.add_alias("rs");
    lang.add_extension("rs");

    lang.add_multiline(MultilineRule::new("block_comment", r"/\*", r"\*/", TokenType::Comment, 1));
    lang.add_multiline(MultilineRule::new("raw_string", r##"r#+""##, r##""#+"##, TokenType::String, 2));
    lang.add_multiline(MultilineRule::with_escape("string", r#"b?""#, "\"", TokenType::String, 3, '\\'));

    lang.add_pattern(PatternRule::new("line_comment", r"//.*$", TokenType::Comment, 100));
    lang.add_pattern(PatternRule::new("attribute", r"#!?\[[^\]]*\]", TokenType::Attribute, 95));
    lang.add_pattern(PatternRule::new("char", r"b?'(?:[^'\\]|\\.|\\u\{[0-9a-fA-F]+\})'", TokenType::Char, 90));
    lang.add_pattern(PatternRule::new("lifetime", r"'[A-Za-z_]\w*", TokenType::Lifetime, 89));
    lang.add_pattern(PatternRule::new("macro", r"\b[A-Za-z_]\w*!", TokenType::Macro, 85));
    lang.add_pattern(PatternRule::new("keyword", KEYWORDS, TokenType::Keyword, 80));
    lang.add_pattern(PatternRule::new("constant", r"\b(true|false|[A-Z][A-Z0-9_]+)\b", TokenType::Constant, 78));
    lang.add_pattern(PatternRule::new("type", TYPES, TokenType::Type, 75));
    lang.add_pattern(PatternRule::with_group("call", CALL_PATTERN, 1, TokenType::Function, 70));
    lang.add_pattern(PatternRule::new(
        "number",
        r"\b(?:0x[0-9a-fA-F_]+|0o[0-7_]+|0b[01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)(?:[iu](?:8|16|32|64|128|size)|f32|f64)?\b",
        TokenType::Number,
        65,
    ));
    lang.add_pattern(PatternRule::new("operator", r"[+\-*/%&|^!<>=@?]+", TokenType::Operator, 40));

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::{LineClassification, LineState};

    fn kinds(result: &LineClassification, text: &str) -> Vec<(String, TokenType)> {
        result
            .spans
            .iter()
            .map(|s| (text[s.start..s.end].to_string(), s.token_type))
            .collect()
    }

    #[test]
    fn test_rust_keywords() {
        let lang = rust_language();
        let text = "let mut x = 5;";
        let result = lang.highlight_line(text, LineState::default());
        let kinds = kinds(&result, text);

        assert_eq!(kinds[0], ("let".to_string(), TokenType::Keyword));
        assert_eq!(kinds[1], ("mut".to_string(), TokenType::Keyword));
        assert!(kinds.contains(&("5".to_string(), TokenType::Number)));
    }

    #[test]
    fn test_rust_string() {
        let lang = rust_language();
        let text = r#"let s = "hello";"#;
        let result = lang.highlight_line(text, LineState::default());

        assert!(kinds(&result, text).contains(&("\"hello\"".to_string(), TokenType::String)));
    }

    #[test]
    fn test_rust_comment() {
        let lang = rust_language();
        let result = lang.highlight_line("// this is a comment", LineState::default());

        // Entire line should be comment
        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.spans[0].start, 0);
        assert_eq!(result.spans[0].end, 20);
    }

    #[test]
    fn test_rust_macro_and_call() {
        let lang = rust_language();
        let text = "println!(\"{}\", run(x));";
        let result = lang.highlight_line(text, LineState::default());
        let kinds = kinds(&result, text);

        assert_eq!(kinds[0], ("println!".to_string(), TokenType::Macro));
        assert!(kinds.contains(&("run".to_string(), TokenType::Function)));
    }

    #[test]
    fn test_rust_lifetime_vs_char() {
        let lang = rust_language();
        let text = "fn f<'a>(c: char) -> bool { c == 'x' }";
        let result = lang.highlight_line(text, LineState::default());
        let kinds = kinds(&result, text);

        assert!(kinds.contains(&("'a".to_string(), TokenType::Lifetime)));
        assert!(kinds.contains(&("'x'".to_string(), TokenType::Char)));
    }
}
