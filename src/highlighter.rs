//! Code block highlighting
//!
//! The [`Highlighter`] runs a tokenizer over a whole [`CodeBlock`] and
//! hands each line's tokens to [`apply_tokens`].

use log::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::line::{CodeBlock, LineModel};
use crate::syntax::{apply_tokens, rewrite_placeholders, AnsiTokenizer, RuleTokenizer, ThemedToken, Tokenizer};
use crate::theme::Theme;

/// Language whose tokenizer strips escape sequences
const ANSI_LANGUAGE: &str = "ansi";

/// Rule tokenizer for source languages, ANSI tokenizer for `ansi`
#[derive(Default)]
pub struct BuiltinTokenizer {
    rules: RuleTokenizer,
    ansi: AnsiTokenizer,
}

impl Tokenizer for BuiltinTokenizer {
    fn tokenize(&self, code: &str, language: &str, theme: &Theme) -> Result<Vec<Vec<ThemedToken>>> {
        if language.eq_ignore_ascii_case(ANSI_LANGUAGE) {
            self.ansi.tokenize(code, language, theme)
        } else {
            self.rules.tokenize(code, language, theme)
        }
    }
}

/// Highlights code blocks with a tokenizer
pub struct Highlighter {
    tokenizer: Box<dyn Tokenizer>,
    config: Config,
}

impl Highlighter {
    /// Create a highlighter with the built-in tokenizers
    pub fn new(config: &Config) -> Self {
        Self::with_tokenizer(Box::new(BuiltinTokenizer::default()), config)
    }

    /// Create a highlighter around any tokenizer
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>, config: &Config) -> Self {
        Self {
            tokenizer,
            config: config.clone(),
        }
    }

    /// Check whether a language gets terminal treatment
    ///
    /// `ansi` always does: its tokenizer drops the escape sequences, so the
    /// line text has to lose them too.
    pub fn is_terminal_language(&self, language: &str) -> bool {
        language.eq_ignore_ascii_case(ANSI_LANGUAGE) || self.config.is_terminal_language(language)
    }

    /// Tokenize a block and annotate all of its lines
    ///
    /// Terminal-language blocks are tokenized with placeholders rewritten
    /// line by line; the stored line text keeps them. A line whose text
    /// cannot be reconciled with its tokens aborts the whole block.
    pub fn highlight(&self, block: &mut CodeBlock, theme: &Theme) -> Result<()> {
        let terminal = self.is_terminal_language(&block.language);
        let code = if terminal {
            block
                .lines
                .iter()
                .map(|line| rewrite_placeholders(line.text()))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            block.code()
        };

        debug!(
            "highlighting {} lines as {} with theme {:?} (terminal: {})",
            block.lines.len(),
            block.language,
            theme.name,
            terminal
        );
        let token_lines = self.tokenizer.tokenize(&code, &block.language, theme)?;

        if token_lines.len() != block.lines.len() {
            warn!(
                "tokenizer returned {} lines for a block of {}; annotating the first {}",
                token_lines.len(),
                block.lines.len(),
                token_lines.len().min(block.lines.len())
            );
        }

        for (line, tokens) in block.lines.iter_mut().zip(&token_lines) {
            apply_tokens(line, tokens, theme, terminal)?;
        }

        Ok(())
    }
}
