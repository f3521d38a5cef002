//! TOML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

/// Create TOML language definition
pub fn toml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("toml");
    lang.add_extension("toml");

    lang.add_multiline(MultilineRule::new("multi_basic", r#"""""#, r#"""""#, TokenType::String, 1));
    lang.add_multiline(MultilineRule::new("multi_literal", r"'''", r"'''", TokenType::String, 2));
    lang.add_multiline(MultilineRule::with_escape("basic_string", "\"", "\"", TokenType::String, 3, '\\'));
    lang.add_multiline(MultilineRule::new("literal_string", "'", "'", TokenType::String, 4));

    lang.add_pattern(PatternRule::new("comment", r"#.*$", TokenType::Comment, 100));
    lang.add_pattern(PatternRule::new("table", r"^\s*\[\[?[^\]]*\]\]?", TokenType::Section, 95));
    lang.add_pattern(PatternRule::with_group("key", r"^\s*([A-Za-z0-9_.\-]+)\s*=", 1, TokenType::Variable, 90));
    lang.add_pattern(PatternRule::new("boolean", r"\b(true|false)\b", TokenType::Constant, 80));
    lang.add_pattern(PatternRule::new(
        "datetime",
        r"\b\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)?\b",
        TokenType::Number,
        70,
    ));
    lang.add_pattern(PatternRule::new("number", r"[+-]?\b\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?\b", TokenType::Number, 65));
    lang.add_pattern(PatternRule::new("operator", r"=", TokenType::Operator, 40));

    lang
}
