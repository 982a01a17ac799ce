// Character classification for alias phonetics.

// ---------------------------------------------------------------------------
// Phonetic constants
// ---------------------------------------------------------------------------

/// ASCII vowels: a e i o u.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Plosive-leaning "hard" consonants. Aliases whose seed sounds hard get
/// suffixes built from unused hard consonants, so the two halves of the
/// address keep a distinct feel.
pub const HARD_CONSONANTS: &[char] = &['k', 'p', 't', 'g', 'b', 'd', 'c', 'q', 'x', 'j'];

/// Fricative/nasal/liquid "soft" consonants.
pub const SOFT_CONSONANTS: &[char] = &['s', 'f', 'v', 'm', 'n', 'l', 'r', 'z', 'w', 'y', 'h'];

/// Consonant alphabet used for seed classification and as the last-resort
/// substitution pool. Note: `y` is deliberately absent; it substitutes as
/// a soft consonant but is never counted as a consonant of the seed.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z',
];

// ---------------------------------------------------------------------------
// Classification predicates
// ---------------------------------------------------------------------------

/// Check whether a character is an ASCII vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character is in the consonant alphabet (case-insensitive).
///
/// `y` returns `false` here; see [`CONSONANTS`].
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character is a hard consonant (case-insensitive).
pub fn is_hard_consonant(c: char) -> bool {
    HARD_CONSONANTS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character is a soft consonant (case-insensitive).
pub fn is_soft_consonant(c: char) -> bool {
    SOFT_CONSONANTS.contains(&c.to_ascii_lowercase())
}

// ---------------------------------------------------------------------------
// Run detection
// ---------------------------------------------------------------------------

/// Character kind for run detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Vowel,
    Consonant,
}

/// Check whether `s` contains a run of at least `count` consecutive
/// characters of the given kind.
///
/// For run purposes every non-vowel ASCII letter counts as a consonant
/// (including `y`). Characters outside `a..=z` after lowercasing are
/// skipped without resetting the current run.
pub fn has_run_of(s: &str, kind: CharKind, count: usize) -> bool {
    let mut streak = 0;
    for c in s.chars().map(|c| c.to_ascii_lowercase()) {
        if !c.is_ascii_lowercase() {
            continue;
        }
        let is_v = is_vowel(c);
        let matches = match kind {
            CharKind::Vowel => is_v,
            CharKind::Consonant => !is_v,
        };
        if matches {
            streak += 1;
            if streak >= count {
                return true;
            }
        } else {
            streak = 0;
        }
    }
    false
}
