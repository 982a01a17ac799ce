// mailseed-categories: List the categories of the active lexicon.
//
// Usage:
//   mailseed-categories [OPTIONS]
//
// Options:
//   -l, --lexicon PATH   Lexicon JSON file (or MAILSEED_LEXICON env var)
//   --json               Print the category table as JSON
//   -h, --help           Print help

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = mailseed_cli::parse_lexicon_path(&args);

    if mailseed_cli::wants_help(&args) {
        println!("mailseed-categories: List alias categories.");
        println!();
        println!("Usage: mailseed-categories [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon JSON file (or MAILSEED_LEXICON env var)");
        println!("  --json               Print the category table as JSON");
        println!("  -h, --help           Print this help");
        return;
    }

    let json = args.iter().any(|a| a == "--json");
    let lexicon = mailseed_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| mailseed_cli::fatal(&e));

    if json {
        let out = serde_json::to_string_pretty(lexicon.categories())
            .unwrap_or_else(|e| mailseed_cli::fatal(&format!("failed to serialize: {e}")));
        println!("{out}");
        return;
    }

    for category in lexicon.categories() {
        println!(
            "{} {:<12} {:<12} ({} words)",
            category.emoji,
            category.id,
            category.name,
            category.words.len()
        );
    }
}
