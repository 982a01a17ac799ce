// mailseed-cli: shared utilities for CLI tools.

use std::process;

use mailseed_core::{Lexicon, LexiconData};
use mailseed_gen::builtin_lexicon;

/// Environment variable pointing at a custom lexicon JSON file.
pub const LEXICON_ENV: &str = "MAILSEED_LEXICON";

/// Load the lexicon the tools should use.
///
/// Search order:
/// 1. `path` argument (if provided)
/// 2. `MAILSEED_LEXICON` environment variable
/// 3. Builtin category table
///
/// The file format is the serialized [`LexiconData`]:
/// `{ "categories": [{ "id", "name", "emoji", "words" }], "forbidden": [] }`.
pub fn load_lexicon(path: Option<&str>) -> Result<Lexicon, String> {
    let path = match path {
        Some(p) => Some(p.to_string()),
        None => std::env::var(LEXICON_ENV).ok(),
    };
    let Some(path) = path else {
        return Ok(builtin_lexicon());
    };

    let contents =
        std::fs::read_to_string(&path).map_err(|e| format!("failed to read {path}: {e}"))?;
    let data: LexiconData =
        serde_json::from_str(&contents).map_err(|e| format!("failed to parse {path}: {e}"))?;
    Lexicon::try_from(data).map_err(|e| format!("invalid lexicon {path}: {e}"))
}

/// Parse a `--lexicon=PATH` / `--lexicon PATH` / `-l PATH` argument.
///
/// Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut lexicon_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            lexicon_path = Some(val.to_string());
        } else if arg == "--lexicon" || arg == "-l" {
            if i + 1 < args.len() {
                lexicon_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (lexicon_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
