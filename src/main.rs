//! tintline - print source code with syntax highlighting

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use log::debug;

use tintline::error::{HighlightError, Result};
use tintline::syntax::LanguageRegistry;
use tintline::{render_block, CodeBlock, Config, Highlighter, RenderOptions, Theme};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Command line options
#[derive(Debug, Default)]
struct Args {
    language: Option<String>,
    theme: Option<String>,
    line_numbers: bool,
    file: Option<PathBuf>,
}

enum Action {
    Highlight(Args),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> std::result::Result<Action, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Action::Help),
            "--version" | "-V" => return Ok(Action::Version),
            "--line-numbers" | "-n" => parsed.line_numbers = true,
            "--lang" | "-l" => {
                let value = iter.next().ok_or_else(|| format!("{} needs a value", arg))?;
                parsed.language = Some(value.clone());
            }
            "--theme" | "-t" => {
                let value = iter.next().ok_or_else(|| format!("{} needs a value", arg))?;
                parsed.theme = Some(value.clone());
            }
            "-" => parsed.file = None,
            other if other.starts_with('-') => return Err(format!("unknown option: {}", other)),
            other => parsed.file = Some(PathBuf::from(other)),
        }
    }

    Ok(Action::Highlight(parsed))
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(Action::Highlight(args)) => args,
        Ok(Action::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Action::Version) => {
            print_version();
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            process::exit(2);
        }
    };

    let mut config = Config::load();
    if args.line_numbers {
        config.line_numbers = true;
    }
    let theme_name = args.theme.as_deref().unwrap_or(&config.theme);
    let theme = Theme::resolve(theme_name)?;

    let registry = LanguageRegistry::new();
    let language = match (&args.language, &args.file) {
        (Some(lang), _) => lang.clone(),
        (None, Some(path)) => registry.detect_language(path).unwrap_or("text").to_string(),
        (None, None) => "text".to_string(),
    };

    let code = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            code
        }
    };
    // A trailing newline ends the last line rather than starting a new one
    let code = code.strip_suffix('\n').unwrap_or(&code);

    debug!("language {}, theme {}", language, theme.name);
    let mut block = CodeBlock::new(code, language);
    let highlighter = Highlighter::new(&config);
    highlighter.highlight(&mut block, &theme).map_err(|e| match e {
        HighlightError::UnknownLanguage(lang) => {
            HighlightError::UnknownLanguage(format!("{} (known: {})", lang, registry.list_languages().join(", ")))
        }
        other => other,
    })?;

    let mut stdout = io::stdout().lock();
    render_block(&mut stdout, &block, &theme, &RenderOptions::from(&config))
}

fn print_usage() {
    println!("tintline {} - print source code with syntax highlighting", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tintline [OPTIONS] [FILE]");
    println!();
    println!("Reads standard input when FILE is missing or '-'.");
    println!();
    println!("Options:");
    println!("  -l, --lang LANG     Language id (default: detected from FILE, else text)");
    println!("  -t, --theme THEME   Bundled theme name (dark, light) or theme file path");
    println!("  -n, --line-numbers  Show line numbers");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
    println!();
    println!("Settings are read from ~/.tintline.toml. Set RUST_LOG=debug for diagnostics.");
}

fn print_version() {
    println!("tintline {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        let Ok(Action::Highlight(parsed)) = parse_args(&args(&["-l", "rust", "--theme", "light", "-n", "main.rs"])) else {
            panic!("expected highlight action");
        };
        assert_eq!(parsed.language.as_deref(), Some("rust"));
        assert_eq!(parsed.theme.as_deref(), Some("light"));
        assert!(parsed.line_numbers);
        assert_eq!(parsed.file, Some(PathBuf::from("main.rs")));
    }

    #[test]
    fn test_help_and_version() {
        assert!(matches!(parse_args(&args(&["-h"])), Ok(Action::Help)));
        assert!(matches!(parse_args(&args(&["x", "--version"])), Ok(Action::Version)));
    }

    #[test]
    fn test_bad_options() {
        assert!(parse_args(&args(&["--lang"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }
}
