//! Shell language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

const KEYWORDS: &str = r"\b(if|then|else|elif|fi|for|while|until|do|done|case|esac|in|function|select|return|export|local|readonly)\b";

/// Create shell script language definition
pub fn shell_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("shellscript");
    for alias in ["shell", "bash", "sh", "zsh"] {
        lang.add_alias(alias);
    }
    for ext in ["sh", "bash", "zsh"] {
        lang.add_extension(ext);
    }

    lang.add_multiline(MultilineRule::with_escape("double_string", "\"", "\"", TokenType::String, 1, '\\'));
    lang.add_multiline(MultilineRule::new("single_string", "'", "'", TokenType::String, 2));

    lang.add_pattern(PatternRule::with_group("comment", r"(?:^|\s)(#.*)$", 1, TokenType::Comment, 100));
    lang.add_pattern(PatternRule::new("variable", r"\$\{[^}]*\}|\$[A-Za-z_]\w*|\$[@*#?$!0-9\-]", TokenType::Variable, 90));
    lang.add_pattern(PatternRule::new("keyword", KEYWORDS, TokenType::Keyword, 80));
    lang.add_pattern(PatternRule::with_group(
        "command",
        r"(?:^|[|;&(]|&&|\|\||\$\()\s*([A-Za-z_][\w.\-]*)",
        1,
        TokenType::Function,
        70,
    ));
    lang.add_pattern(PatternRule::new("number", r"\b\d+\b", TokenType::Number, 65));
    // Separators stay unclassified so the command rule can see them
    lang.add_pattern(PatternRule::new("operator", r"[<>]+|=", TokenType::Operator, 40));

    lang
}
