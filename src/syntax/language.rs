//! Language definitions for the rule tokenizer
//!
//! This module provides the LanguageDefinition struct that combines
//! pattern rules and multiline rules for a programming language.

use super::rules::{ClassifiedSpan, LineClassification, LineState, MultilineRule, PatternRule};

/// A complete language definition for syntax highlighting
pub struct LanguageDefinition {
    /// Canonical language id (e.g. "rust", "shellscript")
    pub name: String,
    /// Other ids accepted for this language (e.g. "bash", "sh")
    pub aliases: Vec<String>,
    /// File extensions (e.g. ["rs"], ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Single-line pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    /// Multi-line rules for comments, strings, etc.
    pub multiline_rules: Vec<MultilineRule>,
}

/// The earliest construct found from a position
enum Candidate<'a> {
    Multiline(usize, usize, &'a MultilineRule),
    Pattern(usize, usize, &'a PatternRule),
}

impl Candidate<'_> {
    fn start(&self) -> usize {
        match self {
            Candidate::Multiline(start, _, _) | Candidate::Pattern(start, _, _) => *start,
        }
    }
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            extensions: Vec::new(),
            patterns: Vec::new(),
            multiline_rules: Vec::new(),
        }
    }

    /// Add an alternative language id
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_string());
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: Option<PatternRule>) {
        if let Some(rule) = rule {
            self.patterns.push(rule);
            // Keep sorted by priority (highest first)
            self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
    }

    /// Add a multiline rule
    pub fn add_multiline(&mut self, rule: Option<MultilineRule>) {
        if let Some(rule) = rule {
            self.multiline_rules.push(rule);
        }
    }

    /// Get multiline rule by state ID
    fn get_multiline_rule(&self, state_id: u8) -> Option<&MultilineRule> {
        self.multiline_rules.iter().find(|r| r.state_id == state_id)
    }

    /// Find the construct that starts first at or after `pos`
    ///
    /// Multiline rules win ties against patterns, and patterns are tried in
    /// priority order, so the first one found at a position is kept.
    fn next_candidate(&self, text: &str, pos: usize) -> Option<Candidate<'_>> {
        let mut best: Option<Candidate<'_>> = None;
        for rule in &self.multiline_rules {
            if let Some((start, end)) = rule.find_start(text, pos) {
                if best.as_ref().map_or(true, |b| start < b.start()) {
                    best = Some(Candidate::Multiline(start, end, rule));
                }
            }
        }
        for rule in &self.patterns {
            if let Some((start, end)) = rule.find_at(text, pos) {
                if best.as_ref().map_or(true, |b| start < b.start()) {
                    best = Some(Candidate::Pattern(start, end, rule));
                }
            }
        }
        best
    }

    /// Classify a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans and the state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: LineState) -> LineClassification {
        let mut spans = Vec::new();
        let mut pos = 0;

        // Finish a construct left open by the previous line
        if prev_state.is_inside_multiline() {
            if let Some(rule) = self.get_multiline_rule(prev_state.multiline_id) {
                match rule.find_end(text, 0) {
                    Some(end) => {
                        if end > 0 {
                            spans.push(ClassifiedSpan { start: 0, end, token_type: rule.token_type });
                        }
                        pos = end;
                    }
                    None => {
                        if !text.is_empty() {
                            spans.push(ClassifiedSpan { start: 0, end: text.len(), token_type: rule.token_type });
                        }
                        return LineClassification { spans, end_state: prev_state };
                    }
                }
            }
        }

        while pos < text.len() {
            let Some(candidate) = self.next_candidate(text, pos) else {
                break;
            };
            match candidate {
                Candidate::Multiline(start, open_end, rule) => match rule.find_end(text, open_end) {
                    Some(close) => {
                        spans.push(ClassifiedSpan { start, end: close, token_type: rule.token_type });
                        pos = close;
                    }
                    None => {
                        // Multiline continues to next line
                        spans.push(ClassifiedSpan { start, end: text.len(), token_type: rule.token_type });
                        return LineClassification {
                            spans,
                            end_state: LineState::inside(rule.state_id),
                        };
                    }
                },
                Candidate::Pattern(start, end, rule) => {
                    spans.push(ClassifiedSpan { start, end, token_type: rule.token_type });
                    pos = end;
                }
            }
        }

        LineClassification {
            spans,
            end_state: LineState::default(),
        }
    }
}
