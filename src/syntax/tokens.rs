//! Token types for syntax highlighting
//!
//! [`ThemedToken`] is what a tokenizer hands back for each line: the
//! content it saw plus the resolved color and font style. [`TokenType`] is
//! the semantic classification used by the built-in rule tokenizer before
//! theme colors are resolved.

use super::style::FontStyle;

/// A token of one highlighted line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemedToken {
    /// Text covered by the token, as seen by the tokenizer
    pub content: String,
    /// Foreground color; `None` means the theme foreground
    pub color: Option<String>,
    /// Font style flags
    pub font_style: FontStyle,
}

impl ThemedToken {
    /// Create a token without color or style
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a colored token
    pub fn new(content: impl Into<String>, color: Option<String>, font_style: FontStyle) -> Self {
        Self {
            content: content.into(),
            color,
            font_style,
        }
    }

    /// Length of the content in columns (chars)
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Check if the token has no content
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Semantic token types recognized by the rule tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Source code comments
    Comment,
    /// String literals
    String,
    /// Character literals
    Char,
    /// Numeric literals (integers, floats)
    Number,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Type names
    Type,
    /// Function names and shell commands
    Function,
    /// Operators (+, -, |, >, etc.)
    Operator,
    /// Punctuation
    Punctuation,
    /// Macros (println!, vec!)
    Macro,
    /// Constants and booleans
    Constant,
    /// Variables and parameters ($HOME, self)
    Variable,
    /// Attributes and decorators
    Attribute,
    /// Lifetime annotations ('a)
    Lifetime,
    /// Table headers and section names
    Section,
    /// Default/plain text
    Default,
}

impl TokenType {
    /// TextMate scope used to look up the theme style for this token type
    pub fn scope(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Char => "string.quoted.single",
            TokenType::Number => "constant.numeric",
            TokenType::Keyword => "keyword",
            TokenType::Type => "entity.name.type",
            TokenType::Function => "entity.name.function",
            TokenType::Operator => "keyword.operator",
            TokenType::Punctuation => "punctuation",
            TokenType::Macro => "entity.name.function.macro",
            TokenType::Constant => "constant.language",
            TokenType::Variable => "variable",
            TokenType::Attribute => "meta.attribute",
            TokenType::Lifetime => "storage.modifier.lifetime",
            TokenType::Section => "entity.name.section",
            TokenType::Default => "source",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_len_counts_chars() {
        assert_eq!(ThemedToken::plain("abc").len(), 3);
        assert_eq!(ThemedToken::plain("héé").len(), 3);
        assert!(ThemedToken::plain("").is_empty());
    }

    #[test]
    fn test_plain_token_has_no_style() {
        let token = ThemedToken::plain("x");
        assert_eq!(token.color, None);
        assert_eq!(token.font_style, FontStyle::empty());
    }

    #[test]
    fn test_scopes_are_dotted_names() {
        for token_type in [TokenType::Comment, TokenType::Operator, TokenType::Macro] {
            assert!(!token_type.scope().is_empty());
            assert!(!token_type.scope().contains(' '));
        }
        assert!(TokenType::Operator.scope().starts_with(TokenType::Keyword.scope()));
    }
}
