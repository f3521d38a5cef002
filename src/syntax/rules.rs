//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match and classify
//! source code in the built-in rule tokenizer.

use log::warn;
use regex::Regex;

use super::tokens::TokenType;

/// Compile a rule regex, reporting the rule that failed
fn compile(rule: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("dropping syntax rule {}: {}", rule, e);
            None
        }
    }
}

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a token type to the match, or to
/// one capture group of it. When several rules match at the same
/// position the one with the highest priority wins.
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Capture group that is classified (0 = whole match)
    pub group: usize,
    /// Token type to assign to matches
    pub token_type: TokenType,
    /// Priority (higher = preferred on ties)
    pub priority: i32,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, token_type: TokenType, priority: i32) -> Option<Self> {
        Self::with_group(name, pattern, 0, token_type, priority)
    }

    /// Create a rule that only classifies one capture group of the match
    pub fn with_group(name: &str, pattern: &str, group: usize, token_type: TokenType, priority: i32) -> Option<Self> {
        compile(name, pattern).map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            group,
            token_type,
            priority,
        })
    }

    /// Find the first non-empty match at or after byte position `start`
    ///
    /// The whole line is kept as context so anchors and word boundaries
    /// behave as they would at `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        let found = if self.group == 0 {
            self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
        } else {
            self.pattern
                .captures_at(text, start)
                .and_then(|caps| caps.get(self.group))
                .map(|m| (m.start(), m.end()))
        };
        found.filter(|(s, e)| e > s)
    }
}

/// A multi-line construct rule (block comments, strings)
///
/// These rules track state across lines for constructs that
/// can span multiple lines.
pub struct MultilineRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    /// Token type for this construct
    pub token_type: TokenType,
    /// Escape character that prevents the end pattern from matching
    pub escape_char: Option<char>,
    /// Unique ID for this multiline state (1-255, 0 = normal)
    pub state_id: u8,
}

impl MultilineRule {
    /// Create a new multiline rule
    pub fn new(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
    ) -> Option<Self> {
        let start = compile(name, start_pattern)?;
        let end = compile(name, end_pattern)?;
        Some(Self {
            name: name.to_string(),
            start,
            end,
            token_type,
            escape_char: None,
            state_id,
        })
    }

    /// Create a multiline rule with escape support
    pub fn with_escape(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
        escape_char: char,
    ) -> Option<Self> {
        let mut rule = Self::new(name, start_pattern, end_pattern, token_type, state_id)?;
        rule.escape_char = Some(escape_char);
        Some(rule)
    }

    /// Find start of this construct in text
    pub fn find_start(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.start.find_at(text, start).map(|m| (m.start(), m.end()))
    }

    /// Find end of this construct in text, respecting escapes
    pub fn find_end(&self, text: &str, start: usize) -> Option<usize> {
        let mut pos = start;
        while pos <= text.len() {
            let m = self.end.find_at(text, pos)?;
            let escaped = self.escape_char.is_some_and(|esc| {
                let run = text[start..m.start()].chars().rev().take_while(|&c| c == esc).count();
                run % 2 == 1
            });
            if !escaped {
                return Some(m.end());
            }
            // Step past the escaped delimiter
            pos = m.end().max(m.start() + 1);
        }
        None
    }
}

/// Line state for tracking multi-line constructs
///
/// This is carried from one line to the next to track whether we're
/// inside a multi-line comment, string, etc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// 0 = normal, non-zero = inside multiline rule with this ID
    pub multiline_id: u8,
}

impl LineState {
    /// Create state for being inside a multiline construct
    pub fn inside(state_id: u8) -> Self {
        Self { multiline_id: state_id }
    }

    /// Check if we're inside a multiline construct
    pub fn is_inside_multiline(&self) -> bool {
        self.multiline_id != 0
    }
}

/// A classified byte range of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedSpan {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    pub token_type: TokenType,
}

/// Result of classifying a single line
#[derive(Debug)]
pub struct LineClassification {
    /// Non-overlapping spans in ascending order
    pub spans: Vec<ClassifiedSpan>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", TokenType::Number, 50).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at("no numbers", 0), None);
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        assert!(PatternRule::new("broken", r"(\d+", TokenType::Number, 50).is_none());
        assert!(MultilineRule::new("broken", r"/\*", r"[", TokenType::Comment, 1).is_none());
    }

    #[test]
    fn test_pattern_keeps_context() {
        let rule = PatternRule::new("number", r"\b\d+\b", TokenType::Number, 50).unwrap();
        // "x1" is an identifier, the 1 is not a separate word
        assert_eq!(rule.find_at("x1 22", 1), Some((3, 5)));
    }

    #[test]
    fn test_pattern_group() {
        let rule = PatternRule::with_group("call", r"\b([a-z_]\w*)\s*\(", 1, TokenType::Function, 30).unwrap();
        assert_eq!(rule.find_at("x = foo (1)", 0), Some((4, 7)));
    }

    #[test]
    fn test_multiline_rule() {
        let rule = MultilineRule::new("block_comment", r"/\*", r"\*/", TokenType::Comment, 1).unwrap();

        assert_eq!(rule.find_start("/* comment */", 0), Some((0, 2)));
        assert_eq!(rule.find_end("/* comment */", 2), Some(13));
        assert_eq!(rule.find_end("/* open", 2), None);
    }

    #[test]
    fn test_multiline_with_escape() {
        let rule = MultilineRule::with_escape("string", r#"""#, r#"""#, TokenType::String, 2, '\\').unwrap();

        // Regular end
        assert_eq!(rule.find_end(r#"hello""#, 0), Some(6));
        // Escaped quote
        assert_eq!(rule.find_end(r#"hello\"world""#, 0), Some(13));
        // Escaped backslash before the quote
        assert_eq!(rule.find_end(r#"a\\" b"#, 0), Some(4));
    }

    #[test]
    fn test_line_state() {
        assert!(!LineState::default().is_inside_multiline());
        assert!(LineState::inside(1).is_inside_multiline());
    }
}
