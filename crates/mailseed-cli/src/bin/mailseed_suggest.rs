// mailseed-suggest: Generate email alias suggestions for a category.
//
// Usage:
//   mailseed-suggest [OPTIONS] [CATEGORY]
//
// Options:
//   -D, --domain DOMAIN   Domain appended after '@' (default: example.com)
//   -x, --exclude SEED    Seed to exclude (repeatable)
//   -s, --seed N          Seed the RNG for reproducible output
//   -l, --lexicon PATH    Lexicon JSON file (or MAILSEED_LEXICON env var)
//   --json                Print the result as JSON
//   -h, --help            Print help
//
// Unknown categories fall back to the last category in the lexicon.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use mailseed_gen::{Generator, rule_name};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = mailseed_cli::parse_lexicon_path(&args);

    if mailseed_cli::wants_help(&args) {
        println!("mailseed-suggest: Generate email alias suggestions.");
        println!();
        println!("Usage: mailseed-suggest [OPTIONS] [CATEGORY]");
        println!();
        println!("Options:");
        println!("  -D, --domain DOMAIN   Domain appended after '@' (default: example.com)");
        println!("  -x, --exclude SEED    Seed to exclude (repeatable)");
        println!("  -s, --seed N          Seed the RNG for reproducible output");
        println!("  -l, --lexicon PATH    Lexicon JSON file (or MAILSEED_LEXICON env var)");
        println!("  --json                Print the result as JSON");
        println!("  -h, --help            Print this help");
        return;
    }

    let mut domain = "example.com".to_string();
    let mut exclude: HashSet<String> = HashSet::new();
    let mut rng_seed: Option<u64> = None;
    let mut json = false;
    let mut category_id: Option<String> = None;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-D" || arg == "--domain" {
            if i + 1 < args.len() {
                domain = args[i + 1].clone();
                skip_next = true;
            } else {
                mailseed_cli::fatal("--domain requires a value");
            }
        } else if arg == "-x" || arg == "--exclude" {
            if i + 1 < args.len() {
                exclude.insert(args[i + 1].to_lowercase());
                skip_next = true;
            } else {
                mailseed_cli::fatal("--exclude requires a value");
            }
        } else if arg == "-s" || arg == "--seed" {
            if i + 1 < args.len() {
                let n = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| mailseed_cli::fatal("invalid number for --seed"));
                rng_seed = Some(n);
                skip_next = true;
            } else {
                mailseed_cli::fatal("--seed requires a value");
            }
        } else if arg == "--json" {
            json = true;
        } else if !arg.starts_with('-') {
            category_id = Some(arg.clone());
        } else {
            mailseed_cli::fatal(&format!("unknown option: {arg}"));
        }
    }

    let lexicon = mailseed_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| mailseed_cli::fatal(&e));
    let generator = Generator::new(lexicon);

    let category_id = category_id.unwrap_or_else(|| generator.lexicon().fallback().id.clone());
    let result = match rng_seed {
        Some(n) => {
            let mut rng = StdRng::seed_from_u64(n);
            generator.suggest_with(&category_id, &domain, &exclude, &mut rng)
        }
        None => generator.suggest(&category_id, &domain, &exclude),
    };

    if json {
        let out = serde_json::to_string_pretty(&result)
            .unwrap_or_else(|e| mailseed_cli::fatal(&format!("failed to serialize: {e}")));
        println!("{out}");
        return;
    }

    println!("{} {}", result.category.emoji, result.category.name);
    if result.suggestions.is_empty() {
        println!("  (no suggestions)");
        return;
    }
    for s in &result.suggestions {
        println!(
            "  {}  [{}]",
            s.email,
            rule_name(&result.category.name, &s.seed, &s.suffix)
        );
    }
}
