// Suggestion result types.

use serde::Serialize;

use crate::category::Category;

/// A single alias candidate: `email = seed.suffix@domain`.
///
/// Ephemeral: produced fresh per generation call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailSuggestion {
    /// The full address, `{seed}.{suffix}@{domain}`.
    pub email: String,
    /// The pool word the local part starts with.
    pub seed: String,
    /// The second local-part component: another pool word or a synthetic
    /// pronounceable string.
    pub suffix: String,
}

impl EmailSuggestion {
    /// Assemble a suggestion from its parts.
    pub fn new(seed: &str, suffix: &str, domain: &str) -> Self {
        Self {
            email: format!("{seed}.{suffix}@{domain}"),
            seed: seed.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

/// The outcome of one generation call: up to five suggestions (pool batch
/// first, synthetic batch second) and the category they were drawn from.
#[derive(Debug, Serialize)]
pub struct GenerateResult<'a> {
    pub suggestions: Vec<EmailSuggestion>,
    pub category: &'a Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_assembles_email() {
        let s = EmailSuggestion::new("cart", "deal", "mail.test");
        assert_eq!(s.email, "cart.deal@mail.test");
        assert_eq!(s.seed, "cart");
        assert_eq!(s.suffix, "deal");
    }

    #[test]
    fn suggestion_serializes_to_json() {
        let s = EmailSuggestion::new("star", "moon", "x.com");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["email"], "star.moon@x.com");
        assert_eq!(json["seed"], "star");
        assert_eq!(json["suffix"], "moon");
    }
}
