//! Tokenizer for terminal output with ANSI escape sequences
//!
//! Escape sequences are parsed with `vte`. SGR sequences (`ESC [ ... m`)
//! set the color and font style of the text that follows; every other
//! control sequence is dropped. The resulting token contents no longer
//! contain the escape sequences, so the line text and the token text differ
//! by exactly the removed sequences.

use log::trace;
use vte::{Params, Parser, Perform};

use super::style::FontStyle;
use super::tokenizer::Tokenizer;
use super::tokens::ThemedToken;
use crate::error::Result;
use crate::theme::{Rgb, Theme};

/// Levels of the 6x6x6 color cube in the 256-color palette
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Tokenizer for the `ansi` language
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiTokenizer;

/// Style set by the SGR sequences seen so far
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct SgrState {
    color: Option<String>,
    font_style: FontStyle,
}

impl SgrState {
    /// Apply the parameters of one SGR sequence
    ///
    /// Unknown codes leave the state alone.
    fn apply(&mut self, codes: &[u16], theme: &Theme) {
        if codes.is_empty() {
            *self = SgrState::default();
            return;
        }

        let mut i = 0;
        while i < codes.len() {
            match codes[i] {
                0 => *self = SgrState::default(),
                1 => self.font_style.insert(FontStyle::BOLD),
                3 => self.font_style.insert(FontStyle::ITALIC),
                4 => self.font_style.insert(FontStyle::UNDERLINE),
                22 => self.font_style.remove(FontStyle::BOLD),
                23 => self.font_style.remove(FontStyle::ITALIC),
                24 => self.font_style.remove(FontStyle::UNDERLINE),
                code @ 30..=37 => self.color = palette_color(code - 30, theme),
                code @ 90..=97 => self.color = palette_color(code - 90 + 8, theme),
                39 => self.color = None,
                code @ (38 | 48 | 58) => {
                    let (color, used) = extended_color(&codes[i + 1..], theme);
                    if code == 38 {
                        self.color = color;
                    }
                    i += used;
                }
                _ => {}
            }
            i += 1;
        }
    }
}

fn palette_color(index: u16, theme: &Theme) -> Option<String> {
    u8::try_from(index)
        .ok()
        .and_then(|index| theme.ansi_color(index))
        .map(str::to_string)
}

/// Parse the arguments after 38/48/58; returns the color and the number of
/// arguments consumed
fn extended_color(args: &[u16], theme: &Theme) -> (Option<String>, usize) {
    match args {
        [5, n, ..] => (color_256(*n, theme), 2),
        [2, r, g, b, ..] => {
            let channel = |v: u16| u8::try_from(v).unwrap_or(u8::MAX);
            (Some(Rgb::new(channel(*r), channel(*g), channel(*b)).to_hex()), 4)
        }
        [_, ..] => (None, 1),
        [] => (None, 0),
    }
}

fn color_256(n: u16, theme: &Theme) -> Option<String> {
    match n {
        0..=15 => palette_color(n, theme),
        16..=231 => {
            let n = n - 16;
            let level = |v: u16| CUBE_LEVELS[usize::from(v % 6)];
            Some(Rgb::new(level(n / 36), level(n / 6), level(n)).to_hex())
        }
        232..=255 => {
            let gray = u8::try_from(8 + (n - 232) * 10).unwrap_or(u8::MAX);
            Some(Rgb::new(gray, gray, gray).to_hex())
        }
        _ => None,
    }
}

/// Collects the tokens of one line from parser events
struct TokenSink<'t> {
    theme: &'t Theme,
    state: SgrState,
    tokens: Vec<ThemedToken>,
    pending: String,
}

impl<'t> TokenSink<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            state: SgrState::default(),
            tokens: Vec::new(),
            pending: String::new(),
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let content = std::mem::take(&mut self.pending);
            self.tokens
                .push(ThemedToken::new(content, self.state.color.clone(), self.state.font_style));
        }
    }

    /// Finish the current line, keeping the style for the next one
    fn take_line(&mut self) -> Vec<ThemedToken> {
        self.flush();
        std::mem::take(&mut self.tokens)
    }
}

impl Perform for TokenSink<'_> {
    fn print(&mut self, c: char) {
        self.pending.push(c);
    }

    fn execute(&mut self, byte: u8) {
        // Tabs are text; other C0 controls are dropped
        if byte == b'\t' {
            self.pending.push('\t');
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if action != 'm' || ignore || !intermediates.is_empty() {
            return;
        }
        // Colon subparameters are read like semicolon-separated ones
        let codes: Vec<u16> = params.iter().flatten().copied().collect();
        let mut next = self.state.clone();
        next.apply(&codes, self.theme);
        if next != self.state {
            self.flush();
            self.state = next;
        }
    }
}

impl Tokenizer for AnsiTokenizer {
    fn tokenize(&self, code: &str, _language: &str, theme: &Theme) -> Result<Vec<Vec<ThemedToken>>> {
        let mut sink = TokenSink::new(theme);
        let mut lines = Vec::new();

        for text in code.split('\n') {
            // A sequence left open at the end of a line does not swallow the next one
            let mut parser = Parser::new();
            parser.advance(&mut sink, text.as_bytes());
            let tokens = sink.take_line();
            trace!("ansi line: {} tokens", tokens.len());
            lines.push(tokens);
        }

        Ok(lines)
    }
}
