// Synthetic suffix generation by rejection sampling.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use mailseed_core::Lexicon;
use mailseed_core::character::{CharKind, has_run_of};
use mailseed_core::distance::edit_distance;

use crate::analysis::{SeedAnalysis, consonant_substitutes, vowel_substitutes};

/// Default number of candidates tried before a synthetic slot is skipped.
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Shortest synthetic suffix.
const MIN_LEN: isize = 4;
/// Longest synthetic suffix.
const MAX_LEN: isize = 8;

/// Synthesize a pronounceable suffix for `seed`, or `None` if no valid
/// candidate is found within `max_attempts` tries.
///
/// Candidates alternate consonant/vowel (even positions consonant, odd
/// vowel), with each letter drawn uniformly from the substitution pools
/// derived from the seed's phonetics. The target length is chosen once as
/// the seed length plus or minus one, clamped to 4..=8.
///
/// A candidate is accepted only if all of the following hold:
///   - it differs from the seed (case-insensitively)
///   - it does not contain the seed as a case-insensitive substring
///   - it has no run of 3+ consonants or 3+ vowels
///   - its edit distance from the lowercased seed is at least half the
///     seed length, rounded up
///   - it is not in the lexicon's forbidden-word set
///   - it is not in `used_suffixes`
pub fn synthesize_suffix<R: Rng + ?Sized>(
    seed: &str,
    analysis: &SeedAnalysis,
    lexicon: &Lexicon,
    used_suffixes: &HashSet<String>,
    max_attempts: usize,
    rng: &mut R,
) -> Option<String> {
    let delta: isize = if rng.gen_bool(0.5) { 1 } else { -1 };
    let target_len = (analysis.length as isize + delta).clamp(MIN_LEN, MAX_LEN) as usize;

    let consonant_pool = consonant_substitutes(&analysis.consonants);
    let vowel_pool = vowel_substitutes(&analysis.vowels);
    if consonant_pool.is_empty() || vowel_pool.is_empty() {
        return None;
    }

    let min_edit = analysis.length.div_ceil(2);
    let seed_lower = seed.to_lowercase();

    for _ in 0..max_attempts {
        let suffix: String = (0..target_len)
            .map(|i| {
                let pool = if i % 2 == 1 {
                    &vowel_pool
                } else {
                    &consonant_pool
                };
                // Pools are non-empty, checked above.
                *pool.choose(rng).expect("substitution pool is non-empty")
            })
            .collect();

        if suffix == seed_lower || suffix == seed {
            continue;
        }
        if suffix.contains(seed_lower.as_str()) {
            continue;
        }
        if has_run_of(&suffix, CharKind::Consonant, 3) {
            continue;
        }
        if has_run_of(&suffix, CharKind::Vowel, 3) {
            continue;
        }
        if edit_distance(&seed_lower, &suffix) < min_edit {
            continue;
        }
        if lexicon.is_forbidden(&suffix) {
            continue;
        }
        if used_suffixes.contains(&suffix) {
            continue;
        }

        return Some(suffix);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailseed_core::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::analysis::analyze_seed;

    fn lexicon_with_forbidden(forbidden: &[&str]) -> Lexicon {
        let category = Category {
            id: "t".to_string(),
            name: "T".to_string(),
            emoji: String::new(),
            words: vec!["word".to_string()],
        };
        Lexicon::new(vec![category], forbidden.iter().copied()).unwrap()
    }

    fn synthesize(seed: &str, rng: &mut StdRng) -> Option<String> {
        let lexicon = lexicon_with_forbidden(&[]);
        synthesize_suffix(
            seed,
            &analyze_seed(seed),
            &lexicon,
            &HashSet::new(),
            DEFAULT_MAX_ATTEMPTS,
            rng,
        )
    }

    #[test]
    fn suffix_length_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(10);
        for seed in ["git", "cart", "digest", "headline"] {
            for _ in 0..20 {
                if let Some(suffix) = synthesize(seed, &mut rng) {
                    assert!(
                        (4..=8).contains(&suffix.chars().count()),
                        "bad length for {suffix:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn suffix_never_contains_seed() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            if let Some(suffix) = synthesize("git", &mut rng) {
                assert!(!suffix.contains("git"));
                assert_ne!(suffix, "git");
            }
        }
    }

    #[test]
    fn suffix_has_no_long_runs() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..50 {
            if let Some(suffix) = synthesize("cloud", &mut rng) {
                assert!(!has_run_of(&suffix, CharKind::Consonant, 3));
                assert!(!has_run_of(&suffix, CharKind::Vowel, 3));
            }
        }
    }

    #[test]
    fn suffix_keeps_edit_distance_from_seed() {
        let mut rng = StdRng::seed_from_u64(13);
        for seed in ["cart", "docker", "pulse"] {
            let min = seed.len().div_ceil(2);
            for _ in 0..20 {
                if let Some(suffix) = synthesize(seed, &mut rng) {
                    assert!(edit_distance(seed, &suffix) >= min);
                }
            }
        }
    }

    #[test]
    fn suffix_alternates_consonant_vowel() {
        let mut rng = StdRng::seed_from_u64(14);
        let suffix = synthesize("cart", &mut rng).expect("a suffix for cart");
        for (i, c) in suffix.chars().enumerate() {
            if i % 2 == 1 {
                assert!(mailseed_core::character::is_vowel(c), "odd position {c}");
            } else {
                assert!(!mailseed_core::character::is_vowel(c), "even position {c}");
            }
        }
    }

    #[test]
    fn used_suffixes_are_rejected() {
        let lexicon = lexicon_with_forbidden(&[]);
        let analysis = analyze_seed("cart");
        let mut rng = StdRng::seed_from_u64(15);

        let mut used = HashSet::new();
        for _ in 0..20 {
            if let Some(next) = synthesize_suffix(
                "cart",
                &analysis,
                &lexicon,
                &used,
                DEFAULT_MAX_ATTEMPTS,
                &mut rng,
            ) {
                assert!(!used.contains(&next));
                used.insert(next);
            }
        }
        assert!(!used.is_empty());
    }

    #[test]
    fn forbidden_suffixes_are_rejected() {
        let mut rng = StdRng::seed_from_u64(16);
        // Collect what the generator would produce unconstrained, then
        // forbid those exact strings and check they stop appearing.
        let mut produced = HashSet::new();
        for _ in 0..30 {
            if let Some(s) = synthesize("git", &mut rng) {
                produced.insert(s);
            }
        }
        let forbidden: Vec<&str> = produced.iter().map(|s| s.as_str()).collect();
        let lexicon = lexicon_with_forbidden(&forbidden);
        let analysis = analyze_seed("git");
        for _ in 0..30 {
            if let Some(s) = synthesize_suffix(
                "git",
                &analysis,
                &lexicon,
                &HashSet::new(),
                DEFAULT_MAX_ATTEMPTS,
                &mut rng,
            ) {
                assert!(!produced.contains(&s));
            }
        }
    }

    #[test]
    fn all_vowels_used_skips_the_slot() {
        let mut rng = StdRng::seed_from_u64(17);
        let lexicon = lexicon_with_forbidden(&[]);
        let seed = "aeiou";
        let result = synthesize_suffix(
            seed,
            &analyze_seed(seed),
            &lexicon,
            &HashSet::new(),
            DEFAULT_MAX_ATTEMPTS,
            &mut rng,
        );
        assert!(result.is_none());
    }

    #[test]
    fn zero_attempts_yields_none() {
        let mut rng = StdRng::seed_from_u64(18);
        let lexicon = lexicon_with_forbidden(&[]);
        let result = synthesize_suffix(
            "cart",
            &analyze_seed("cart"),
            &lexicon,
            &HashSet::new(),
            0,
            &mut rng,
        );
        assert!(result.is_none());
    }

    #[test]
    fn short_seed_still_produces_minimum_length() {
        // Scenario: a 2-char seed clamps the target length up to 4.
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..20 {
            if let Some(suffix) = synthesize("ab", &mut rng) {
                assert_eq!(suffix.chars().count(), 4);
                assert!(!suffix.contains("ab"));
            }
        }
    }
}
