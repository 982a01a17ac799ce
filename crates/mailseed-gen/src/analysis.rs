// Seed phonetic analysis and substitution-pool derivation.
//
// A synthetic suffix should feel different from its seed: the substitution
// pools deliberately avoid the letters the seed already uses and stay on
// the opposite side of the hard/soft consonant split where possible, while
// the alternating consonant/vowel skeleton keeps the result pronounceable.

use std::collections::HashSet;

use mailseed_core::character::{
    CONSONANTS, HARD_CONSONANTS, SOFT_CONSONANTS, VOWELS, is_consonant, is_hard_consonant,
    is_soft_consonant, is_vowel,
};

/// Phonetic composition of a seed word.
#[derive(Debug, Clone)]
pub struct SeedAnalysis {
    /// Character length of the seed.
    pub length: usize,
    /// Distinct consonants present in the seed (lowercase).
    pub consonants: HashSet<char>,
    /// Distinct vowels present in the seed (lowercase).
    pub vowels: HashSet<char>,
    /// Whether the seed contains any hard consonant.
    pub has_hard: bool,
    /// Whether the seed contains any soft consonant.
    pub has_soft: bool,
}

/// Classify each character of the seed as vowel or consonant and record
/// which hard/soft consonant sets it touches.
pub fn analyze_seed(seed: &str) -> SeedAnalysis {
    let mut consonants = HashSet::new();
    let mut vowels = HashSet::new();
    let mut has_hard = false;
    let mut has_soft = false;

    for c in seed.to_lowercase().chars() {
        if is_vowel(c) {
            vowels.insert(c);
        } else if is_consonant(c) {
            consonants.insert(c);
            if is_hard_consonant(c) {
                has_hard = true;
            } else if is_soft_consonant(c) {
                has_soft = true;
            }
        }
    }

    SeedAnalysis {
        length: seed.chars().count(),
        consonants,
        vowels,
        has_hard,
        has_soft,
    }
}

/// Consonants eligible for the synthetic suffix, given the seed's own
/// consonant set.
///
/// Hard consonants absent from the seed when the seed has a hard
/// consonant; soft consonants absent from the seed when the seed has a
/// soft consonant (or nothing was collected so far); any unused consonant
/// as a last resort when the seed exhausts both sets.
pub fn consonant_substitutes(seed_consonants: &HashSet<char>) -> Vec<char> {
    let mut pool = Vec::new();
    let seed_has_hard = seed_consonants.iter().any(|&c| is_hard_consonant(c));
    let seed_has_soft = seed_consonants.iter().any(|&c| is_soft_consonant(c));

    if seed_has_hard {
        pool.extend(
            HARD_CONSONANTS
                .iter()
                .copied()
                .filter(|c| !seed_consonants.contains(c)),
        );
    }
    if seed_has_soft || pool.is_empty() {
        pool.extend(
            SOFT_CONSONANTS
                .iter()
                .copied()
                .filter(|c| !seed_consonants.contains(c)),
        );
    }
    if pool.is_empty() {
        pool.extend(
            CONSONANTS
                .iter()
                .copied()
                .filter(|c| !seed_consonants.contains(c)),
        );
    }
    pool
}

/// Vowels absent from the seed.
pub fn vowel_substitutes(seed_vowels: &HashSet<char>) -> Vec<char> {
    VOWELS
        .iter()
        .copied()
        .filter(|v| !seed_vowels.contains(v))
        .collect()
}
