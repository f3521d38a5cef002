//! Language registry
//!
//! Maps language ids, aliases and file extensions to the built-in
//! language definitions.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;

/// Lookup table of the languages known to the rule tokenizer
pub struct LanguageRegistry {
    /// Loaded language definitions by canonical name
    languages: HashMap<String, LanguageDefinition>,
    /// Alias to canonical name
    alias_map: HashMap<String, String>,
    /// Extension to canonical name
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            alias_map: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Create a registry with the built-in languages
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for lang in builtin::all_languages() {
            registry.add_language(lang);
        }
        registry
    }

    /// Add a language definition
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.to_lowercase();
        for alias in &lang.aliases {
            self.alias_map.insert(alias.to_lowercase(), name.clone());
        }
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.languages.insert(name, lang);
    }

    /// Get a language definition by id or alias (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&LanguageDefinition> {
        let id = id.to_lowercase();
        let name = self.alias_map.get(&id).unwrap_or(&id);
        self.languages.get(name)
    }

    /// Detect the language id from a filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
