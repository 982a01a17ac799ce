// Random word selection from category pools.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick up to `n` case-insensitively distinct words from `words`, skipping
/// anything whose lowercase form is in `exclude`.
///
/// The available words are shuffled into a uniform random permutation and
/// taken in order, so repeated calls with a growing exclusion set walk
/// through the pool without repeats. Returns fewer than `n` words when the
/// pool runs out.
pub fn pick_unique_words<R: Rng + ?Sized>(
    words: &[String],
    n: usize,
    exclude: &HashSet<String>,
    rng: &mut R,
) -> Vec<String> {
    let mut available: Vec<&String> = words
        .iter()
        .filter(|w| !exclude.contains(&w.to_lowercase()))
        .collect();
    available.shuffle(rng);

    let mut picked = Vec::with_capacity(n.min(available.len()));
    let mut seen = HashSet::new();
    for w in available {
        if picked.len() >= n {
            break;
        }
        if seen.insert(w.to_lowercase()) {
            picked.push(w.clone());
        }
    }
    picked
}
