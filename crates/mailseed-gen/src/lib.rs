// mailseed-gen: email alias suggestion generation.
//
// Produces batches of up to five `seed.suffix@domain` alias candidates for
// a category of seed words. The first three pair two distinct pool words;
// the last two pair a pool seed with a synthesized pronounceable suffix
// sampled to be phonetically distinct from it.
//
// Architecture:
//   - `data`: builtin category table and forbidden-word set
//   - `picker`: shuffle-and-take-distinct word selection
//   - `analysis`: seed phonetics and substitution-pool derivation
//   - `synthetic`: rejection-sampled suffix construction
//   - `generator`: batch assembly and the public `Generator` type

pub mod analysis;
pub mod data;
pub mod generator;
pub mod picker;
pub mod synthetic;

// Re-export key types for convenient access.
pub use data::builtin_lexicon;
pub use generator::{Generator, MAX_SUGGESTIONS, POOL_BATCH, SYNTHETIC_BATCH, rule_name};
pub use synthetic::DEFAULT_MAX_ATTEMPTS;
