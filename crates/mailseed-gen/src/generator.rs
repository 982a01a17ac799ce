// Suggestion batch assembly: pool batch first, synthetic batch second.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use mailseed_core::{EmailSuggestion, GenerateResult, Lexicon};

use crate::analysis::analyze_seed;
use crate::data::builtin_lexicon;
use crate::picker::pick_unique_words;
use crate::synthetic::{DEFAULT_MAX_ATTEMPTS, synthesize_suffix};

/// Maximum suggestions whose seed and suffix both come from the pool.
pub const POOL_BATCH: usize = 3;
/// Maximum suggestions with a synthesized suffix.
pub const SYNTHETIC_BATCH: usize = 2;
/// Upper bound on the suggestion count per call.
pub const MAX_SUGGESTIONS: usize = POOL_BATCH + SYNTHETIC_BATCH;

/// Email alias suggestion generator.
///
/// Owns its lexicon and is otherwise stateless: every call works from the
/// immutable category table, the caller's exclusion set and a source of
/// randomness, so concurrent calls never interact.
pub struct Generator {
    lexicon: Lexicon,
    max_attempts: usize,
}

impl Generator {
    /// Create a generator over the given lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create a generator over the builtin category table.
    pub fn builtin() -> Self {
        Self::new(builtin_lexicon())
    }

    /// Set the attempt cap for synthetic suffix sampling.
    pub fn set_max_attempts(&mut self, max_attempts: usize) {
        self.max_attempts = max_attempts;
    }

    /// The lexicon this generator draws from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Generate up to five alias suggestions using the thread-local RNG.
    ///
    /// `exclude` holds lowercase seeds that must not be reused, typically
    /// the seeds of earlier batches in the same session.
    pub fn suggest(
        &self,
        category_id: &str,
        domain: &str,
        exclude: &HashSet<String>,
    ) -> GenerateResult<'_> {
        self.suggest_with(category_id, domain, exclude, &mut rand::thread_rng())
    }

    /// Generate up to five alias suggestions with an explicit RNG.
    ///
    /// An unknown `category_id` falls back to the last category in the
    /// table. Degenerate pools shrink the result instead of failing: each
    /// slot that cannot be filled is skipped, down to an empty list.
    pub fn suggest_with<R: Rng + ?Sized>(
        &self,
        category_id: &str,
        domain: &str,
        exclude: &HashSet<String>,
        rng: &mut R,
    ) -> GenerateResult<'_> {
        let category = self.lexicon.resolve(category_id);
        let pool = &category.words;
        let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);

        // Seeds consumed so far, lowercased: the caller's exclusions plus
        // every seed drawn in this call, including seeds whose slot ended
        // up empty.
        let mut used_seeds: HashSet<String> = exclude.iter().map(|s| s.to_lowercase()).collect();
        let mut used_suffixes: HashSet<String> = HashSet::new();

        // Pool batch: seed and suffix both drawn from the category pool.
        for seed in pick_unique_words(pool, POOL_BATCH, &used_seeds, rng) {
            let seed_lower = seed.to_lowercase();
            used_seeds.insert(seed_lower.clone());

            let candidates: Vec<&String> = pool
                .iter()
                .filter(|w| {
                    let lower = w.to_lowercase();
                    lower != seed_lower && !used_suffixes.contains(&lower)
                })
                .collect();
            if let Some(&suffix) = candidates.choose(rng) {
                used_suffixes.insert(suffix.to_lowercase());
                suggestions.push(EmailSuggestion::new(&seed, suffix, domain));
            }
        }

        // Synthetic batch: seed from the pool, suffix sampled to be
        // phonetically distinct from it.
        for seed in pick_unique_words(pool, SYNTHETIC_BATCH, &used_seeds, rng) {
            used_seeds.insert(seed.to_lowercase());
            let analysis = analyze_seed(&seed);
            if let Some(suffix) = synthesize_suffix(
                &seed,
                &analysis,
                &self.lexicon,
                &used_suffixes,
                self.max_attempts,
                rng,
            ) {
                used_suffixes.insert(suffix.clone());
                suggestions.push(EmailSuggestion::new(&seed, &suffix, domain));
            }
        }

        GenerateResult {
            suggestions,
            category,
        }
    }
}

/// Format the routing-rule name shown for a picked suggestion:
/// `"{category_name}: {seed}.{suffix}"`.
pub fn rule_name(category_name: &str, seed: &str, suffix: &str) -> String {
    format!("{category_name}: {seed}.{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailseed_core::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tiny_lexicon(words: &[&str]) -> Lexicon {
        let category = Category {
            id: "tiny".to_string(),
            name: "Tiny".to_string(),
            emoji: String::new(),
            words: words.iter().map(|w| w.to_string()).collect(),
        };
        Lexicon::new(vec![category], Vec::<String>::new()).unwrap()
    }

    #[test]
    fn result_never_exceeds_five_suggestions() {
        let generator = Generator::builtin();
        let mut rng = StdRng::seed_from_u64(20);
        for _ in 0..50 {
            let result = generator.suggest_with("dev", "mail.test", &HashSet::new(), &mut rng);
            assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
        }
    }

    #[test]
    fn seeds_are_distinct_within_a_result() {
        let generator = Generator::builtin();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let result = generator.suggest_with("social", "x.com", &HashSet::new(), &mut rng);
            let seeds: HashSet<String> = result
                .suggestions
                .iter()
                .map(|s| s.seed.to_lowercase())
                .collect();
            assert_eq!(seeds.len(), result.suggestions.len());
        }
    }

    #[test]
    fn suffixes_are_distinct_and_differ_from_own_seed() {
        let generator = Generator::builtin();
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..50 {
            let result = generator.suggest_with("finance", "x.com", &HashSet::new(), &mut rng);
            let suffixes: HashSet<String> = result
                .suggestions
                .iter()
                .map(|s| s.suffix.to_lowercase())
                .collect();
            assert_eq!(suffixes.len(), result.suggestions.len());
            for s in &result.suggestions {
                assert_ne!(s.seed.to_lowercase(), s.suffix.to_lowercase());
            }
        }
    }

    #[test]
    fn emails_are_formatted_from_parts() {
        let generator = Generator::builtin();
        let mut rng = StdRng::seed_from_u64(23);
        let result = generator.suggest_with("gaming", "mail.test", &HashSet::new(), &mut rng);
        for s in &result.suggestions {
            assert_eq!(s.email, format!("{}.{}@mail.test", s.seed, s.suffix));
        }
    }

    #[test]
    fn single_word_pool_yields_no_pool_suggestions() {
        // One pool word: it can serve as a seed but never gets a distinct
        // pool suffix, and the synthetic slot may or may not fill.
        let generator = Generator::new(tiny_lexicon(&["ab"]));
        let mut rng = StdRng::seed_from_u64(24);
        for _ in 0..20 {
            let result = generator.suggest_with("tiny", "x.com", &HashSet::new(), &mut rng);
            for s in &result.suggestions {
                assert_eq!(s.seed, "ab");
                assert_ne!(s.suffix, "ab");
                assert!(!s.suffix.contains("ab"));
            }
            assert!(result.suggestions.len() <= 1);
        }
    }

    #[test]
    fn empty_pool_yields_empty_result() {
        let generator = Generator::new(tiny_lexicon(&[]));
        let mut rng = StdRng::seed_from_u64(25);
        let result = generator.suggest_with("tiny", "x.com", &HashSet::new(), &mut rng);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn excluded_seeds_cover_the_synthetic_batch_too() {
        // Exclude all but two pool words: both remaining words may be
        // drawn as seeds, excluded ones never.
        let generator = Generator::new(tiny_lexicon(&["cart", "deal", "shop", "store"]));
        let exclude: HashSet<String> = ["cart", "deal"].iter().map(|s| s.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(26);
        for _ in 0..30 {
            let result = generator.suggest_with("tiny", "x.com", &exclude, &mut rng);
            for s in &result.suggestions {
                assert!(!exclude.contains(&s.seed.to_lowercase()), "reused {}", s.seed);
            }
        }
    }

    #[test]
    fn rule_name_formats_category_and_parts() {
        assert_eq!(rule_name("Dev", "git", "bafo"), "Dev: git.bafo");
    }

    #[test]
    fn max_attempts_zero_disables_synthetic_batch() {
        let mut generator = Generator::builtin();
        generator.set_max_attempts(0);
        let mut rng = StdRng::seed_from_u64(27);
        for _ in 0..10 {
            let result = generator.suggest_with("dev", "x.com", &HashSet::new(), &mut rng);
            // Only the pool batch can produce anything.
            assert!(result.suggestions.len() <= POOL_BATCH);
            for s in &result.suggestions {
                assert!(generator.lexicon().resolve("dev").words.iter().any(|w| w == &s.suffix));
            }
        }
    }
}
