// Category table and forbidden-word set.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

/// A named pool of seed words.
///
/// Word order is preserved as configured. Case-insensitive uniqueness of
/// the words is assumed by the generation logic, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier used to select the category.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Decorative icon, opaque to the generator.
    pub emoji: String,
    /// The seed word pool.
    pub words: Vec<String>,
}

/// Serializable lexicon description, e.g. loaded from a JSON file.
///
/// Converted into a validated [`Lexicon`] with `Lexicon::try_from`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconData {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub forbidden: Vec<String>,
}

/// Error type for lexicon validation.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon contains no categories")]
    Empty,
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),
}

/// The static word-pool table the generator draws from: an ordered list of
/// categories plus a case-insensitive forbidden-word set.
///
/// The last category in the table is the fallback used for unknown ids.
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
    forbidden: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from a category list and a forbidden-word set.
    ///
    /// Forbidden words are matched case-insensitively and may be given in
    /// any case. Fails if the table is empty or a category id repeats.
    pub fn new<I, S>(categories: Vec<Category>, forbidden: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if categories.is_empty() {
            return Err(LexiconError::Empty);
        }
        let mut index = HashMap::with_capacity(categories.len());
        for (i, category) in categories.iter().enumerate() {
            if index.insert(category.id.clone(), i).is_some() {
                return Err(LexiconError::DuplicateCategory(category.id.clone()));
            }
        }
        let forbidden = forbidden
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Ok(Self {
            categories,
            index,
            forbidden,
        })
    }

    /// Look up a category by id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index.get(id).map(|&i| &self.categories[i])
    }

    /// Look up a category by id, falling back to the last entry in the
    /// table when the id is unknown.
    pub fn resolve(&self, id: &str) -> &Category {
        self.get(id).unwrap_or_else(|| self.fallback())
    }

    /// The fallback category (last entry in the table).
    pub fn fallback(&self) -> &Category {
        // Non-empty by construction.
        self.categories.last().expect("lexicon is never empty")
    }

    /// All categories in configured order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Check whether a word is forbidden (case-insensitive).
    pub fn is_forbidden(&self, word: &str) -> bool {
        self.forbidden.contains(&word.to_lowercase())
    }
}

impl TryFrom<LexiconData> for Lexicon {
    type Error = LexiconError;

    fn try_from(data: LexiconData) -> Result<Self, Self::Error> {
        Lexicon::new(data.categories, data.forbidden)
    }
}
