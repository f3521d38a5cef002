//! tintline - syntax-highlighted code rendering
//!
//! Code blocks are tokenized into themed tokens, the tokens are mapped onto
//! column-anchored style annotations, and the annotated lines are rendered
//! to the terminal. For terminal languages the characters a tokenizer drops
//! (escape sequences) are removed from the line text first.

pub mod config;
pub mod error;
pub mod highlighter;
pub mod line;
pub mod render;
pub mod syntax;
pub mod theme;

pub use config::Config;
pub use error::{HighlightError, Result};
pub use highlighter::{BuiltinTokenizer, Highlighter};
pub use line::{CodeBlock, Line, LineModel};
pub use render::{render_block, RenderOptions};
pub use syntax::{apply_tokens, removed_ranges, FontStyle, RemovedRange, StyleAnnotation, ThemedToken, Tokenizer};
pub use theme::{Theme, ThemeType};
