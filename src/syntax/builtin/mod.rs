//! Built-in language definitions
//!
//! This module provides syntax definitions for the languages the rule
//! tokenizer knows out of the box.

mod python;
mod rust;
mod shell;
mod toml_lang;

use super::language::LanguageDefinition;

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        rust::rust_language(),
        python::python_language(),
        toml_lang::toml_language(),
        shell::shell_language(),
    ]
}

/// Shared rule for function names followed by an argument list
pub(super) const CALL_PATTERN: &str = r"\b([A-Za-z_]\w*)\s*\(";
