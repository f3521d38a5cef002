//! Syntax highlighting and annotation mapping
//!
//! This module provides:
//! - the tokenizer interface and two tokenizers (regex rules, ANSI output)
//! - removed-range resolution for text a tokenizer stripped
//! - the mapper that turns tokens into line annotations

mod ansi;
mod builtin;
mod language;
mod mapper;
mod ranges;
mod registry;
mod rules;
mod style;
mod tokenizer;
mod tokens;

pub use ansi::AnsiTokenizer;
pub use language::LanguageDefinition;
pub use mapper::{apply_tokens, rewrite_placeholders, TERMINAL_LANGUAGES};
pub use ranges::{removed_ranges, RemovedRange};
pub use registry::LanguageRegistry;
pub use rules::{LineState, MultilineRule, PatternRule};
pub use style::{FontStyle, StyleAnnotation};
pub use tokenizer::{RuleTokenizer, Tokenizer};
pub use tokens::{ThemedToken, TokenType};
