// mailseed-core: shared types and text utilities for alias generation.
//
// This crate holds everything the generator, CLI and wasm crates share:
//   - `character`: vowel / hard-consonant / soft-consonant classification
//     and run detection used by the phonetic suffix synthesizer
//   - `distance`: Levenshtein edit distance
//   - `category`: the static category table (`Lexicon`) with its
//     forbidden-word set and validation
//   - `suggestion`: the `EmailSuggestion` / `GenerateResult` output types

pub mod category;
pub mod character;
pub mod distance;
pub mod suggestion;

// Re-export key types for convenient access.
pub use category::{Category, Lexicon, LexiconData, LexiconError};
pub use distance::edit_distance;
pub use suggestion::{EmailSuggestion, GenerateResult};
