//! Built-in themes
//!
//! Stored as JSONC so they go through the same loader as user theme files.

/// `(name, JSONC source)` pairs of the themes shipped with the crate
pub const BUNDLED_THEMES: &[(&str, &str)] = &[("dark", DARK), ("light", LIGHT)];

const DARK: &str = r##"{
  "name": "dark",
  "type": "dark",
  "colors": {
    "editor.background": "#1e1e1e",
    "editor.foreground": "#d4d4d4",
  },
  "tokenColors": [
    { "scope": "comment", "settings": { "foreground": "#6a9955", "fontStyle": "italic" } },
    { "scope": ["string", "string.quoted.single"], "settings": { "foreground": "#ce9178" } },
    { "scope": "constant.numeric", "settings": { "foreground": "#b5cea8" } },
    { "scope": "constant.language", "settings": { "foreground": "#569cd6" } },
    { "scope": "keyword", "settings": { "foreground": "#c586c0" } },
    { "scope": "keyword.operator", "settings": { "foreground": "#d4d4d4" } },
    { "scope": "entity.name.type", "settings": { "foreground": "#4ec9b0" } },
    { "scope": "entity.name.function", "settings": { "foreground": "#dcdcaa" } },
    { "scope": "entity.name.function.macro", "settings": { "foreground": "#569cd6" } },
    { "scope": "entity.name.section", "settings": { "foreground": "#569cd6", "fontStyle": "bold" } },
    { "scope": "variable", "settings": { "foreground": "#9cdcfe" } },
    { "scope": "meta.attribute", "settings": { "foreground": "#9cdcfe" } },
    // Lifetimes read better underlined than recolored
    { "scope": "storage.modifier.lifetime", "settings": { "fontStyle": "italic underline" } },
  ],
}"##;

const LIGHT: &str = r##"{
  "name": "light",
  "type": "light",
  "colors": {
    "editor.background": "#ffffff",
    "editor.foreground": "#000000",
  },
  "tokenColors": [
    { "scope": "comment", "settings": { "foreground": "#008000", "fontStyle": "italic" } },
    { "scope": ["string", "string.quoted.single"], "settings": { "foreground": "#a31515" } },
    { "scope": "constant.numeric", "settings": { "foreground": "#098658" } },
    { "scope": "constant.language", "settings": { "foreground": "#0000ff" } },
    { "scope": "keyword", "settings": { "foreground": "#af00db" } },
    { "scope": "keyword.operator", "settings": { "foreground": "#000000" } },
    { "scope": "entity.name.type", "settings": { "foreground": "#267f99" } },
    { "scope": "entity.name.function", "settings": { "foreground": "#795e26" } },
    { "scope": "entity.name.function.macro", "settings": { "foreground": "#0000ff" } },
    { "scope": "entity.name.section", "settings": { "foreground": "#0000ff", "fontStyle": "bold" } },
    { "scope": "variable", "settings": { "foreground": "#001080" } },
    { "scope": "meta.attribute", "settings": { "foreground": "#001080" } },
    { "scope": "storage.modifier.lifetime", "settings": { "fontStyle": "italic underline" } },
  ],
}"##;
