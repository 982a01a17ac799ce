// WASM bindings for mailseed alias generation.
//
// Exports a `WasmMailseed` class via wasm-bindgen that wraps the
// `Generator` from mailseed-gen, so the dashboard can produce alias
// suggestions client-side. Results are serialized to JavaScript values
// with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const mailseed = new WasmMailseed();          // builtin lexicon
//   mailseed.suggest("dev", "mail.test");          // => { suggestions, category }
//   mailseed.suggest("dev", "mail.test", ["git"]); // exclude seeds
//   mailseed.categories();                         // => [{ id, name, ... }]
//   WasmMailseed.ruleName("Dev", "git", "bafo");   // => "Dev: git.bafo"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use mailseed_core::{Category, Lexicon, LexiconData};
use mailseed_gen::{Generator, rule_name};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of one suggestion.
#[derive(Serialize)]
struct JsSuggestion {
    email: String,
    seed: String,
    suffix: String,
}

/// Serializable representation of a category.
#[derive(Serialize)]
struct JsCategory {
    id: String,
    name: String,
    emoji: String,
    words: Vec<String>,
}

/// Serializable generation result.
#[derive(Serialize)]
struct JsGenerateResult {
    suggestions: Vec<JsSuggestion>,
    category: JsCategory,
}

fn js_category(category: &Category) -> JsCategory {
    JsCategory {
        id: category.id.clone(),
        name: category.name.clone(),
        emoji: category.emoji.clone(),
        words: category.words.clone(),
    }
}

// ============================================================================
// WasmMailseed
// ============================================================================

/// Email alias suggestion generator for WebAssembly.
#[wasm_bindgen]
pub struct WasmMailseed {
    generator: Generator,
}

#[wasm_bindgen]
impl WasmMailseed {
    /// Create a new instance over the builtin category table, or over a
    /// custom lexicon passed as `{ categories: [...], forbidden: [...] }`.
    #[wasm_bindgen(constructor)]
    pub fn new(lexicon: JsValue) -> Result<WasmMailseed, JsError> {
        let generator = if lexicon.is_undefined() || lexicon.is_null() {
            Generator::builtin()
        } else {
            let data: LexiconData = serde_wasm_bindgen::from_value(lexicon)
                .map_err(|e| JsError::new(&e.to_string()))?;
            let lexicon = Lexicon::try_from(data).map_err(|e| JsError::new(&e.to_string()))?;
            Generator::new(lexicon)
        };
        Ok(WasmMailseed { generator })
    }

    /// Generate up to five alias suggestions.
    ///
    /// - `category_id`: unknown ids fall back to the last category
    /// - `domain`: appended after '@', not validated here
    /// - `exclude`: lowercase seeds that must not be reused
    ///
    /// Returns `{ suggestions: [{ email, seed, suffix }], category }`.
    pub fn suggest(
        &self,
        category_id: &str,
        domain: &str,
        exclude: Option<Vec<String>>,
    ) -> Result<JsValue, JsError> {
        let exclude = exclude
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect();
        let result = self.generator.suggest(category_id, domain, &exclude);
        let js_result = JsGenerateResult {
            suggestions: result
                .suggestions
                .into_iter()
                .map(|s| JsSuggestion {
                    email: s.email,
                    seed: s.seed,
                    suffix: s.suffix,
                })
                .collect(),
            category: js_category(result.category),
        };
        serde_wasm_bindgen::to_value(&js_result).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The category table in configured order.
    pub fn categories(&self) -> Result<JsValue, JsError> {
        let js_categories: Vec<JsCategory> = self
            .generator
            .lexicon()
            .categories()
            .iter()
            .map(js_category)
            .collect();
        serde_wasm_bindgen::to_value(&js_categories).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Format the routing-rule name for a picked suggestion.
    #[wasm_bindgen(js_name = "ruleName")]
    pub fn rule_name(category_name: &str, seed: &str, suffix: &str) -> String {
        rule_name(category_name, seed, suffix)
    }

    /// Set the attempt cap for synthetic suffix sampling.
    #[wasm_bindgen(js_name = "setMaxAttempts")]
    pub fn set_max_attempts(&mut self, value: usize) {
        self.generator.set_max_attempts(value);
    }
}
