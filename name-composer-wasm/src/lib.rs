//! WASM bindings for name-composer: the host invocation boundary.
//!
//! A host calls a zero-argument export and receives a UTF-8 string. Entropy
//! comes from the host through `getrandom`'s `js` backend.

use wasm_bindgen::prelude::*;

use name_composer::core::engine::NameEngine;
use name_composer::schema::lexicon::Lexicon;
use name_composer::schema::tier::FragmentTier;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct TierInfo {
    tier: &'static str,
    entries: usize,
    empty: usize,
}

#[derive(serde::Serialize)]
struct LexiconInfo {
    tiers: Vec<TierInfo>,
    middle_probability: f64,
    title_probability: f64,
}

fn describe(lexicon: &Lexicon, middle: f64, title: f64) -> LexiconInfo {
    LexiconInfo {
        tiers: FragmentTier::ALL
            .iter()
            .map(|tier| TierInfo {
                tier: tier.name(),
                entries: lexicon.tier(*tier).len(),
                empty: lexicon.tier(*tier).empty_count(),
            })
            .collect(),
        middle_probability: middle,
        title_probability: title,
    }
}

// ---------------------------------------------------------------------------
// Zero-argument entry points
// ---------------------------------------------------------------------------

/// Generate one fantasy character name, e.g. "Galdorthorn the Wise".
#[wasm_bindgen(js_name = generateCharacterName)]
pub fn generate_character_name() -> String {
    name_composer::generate()
}

/// Generate one `adjective-noun` handle, e.g. "jolly-narwhal".
#[wasm_bindgen(js_name = generateHyphenatedName)]
pub fn generate_hyphenated_name() -> String {
    name_composer::generate_hyphenated()
}

/// Return a JSON description of the built-in lexicon.
#[wasm_bindgen(js_name = lexiconSummary)]
pub fn lexicon_summary() -> String {
    let defaults = name_composer::core::composer::Probabilities::default();
    let info = describe(Lexicon::shared(), defaults.middle, defaults.title);
    serde_json::to_string(&info).unwrap_or_else(|_| "{}".to_string())
}

// ---------------------------------------------------------------------------
// NameDemo: seeded generator for the interactive web demo
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct NameDemo {
    engine: NameEngine,
    lexicon_source: Option<String>,
}

#[wasm_bindgen]
impl NameDemo {
    /// Create a reproducible generator over the built-in lexicon.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<NameDemo, JsError> {
        Self::build(seed, None)
    }

    /// Create a generator over a custom lexicon given as RON text.
    #[wasm_bindgen(js_name = withLexicon)]
    pub fn with_lexicon(seed: u64, lexicon_ron: &str) -> Result<NameDemo, JsError> {
        Self::build(seed, Some(lexicon_ron.to_string()))
    }

    pub fn generate(&mut self) -> String {
        self.engine.generate()
    }

    #[wasm_bindgen(js_name = generateHyphenated)]
    pub fn generate_hyphenated(&mut self) -> String {
        self.engine.generate_hyphenated()
    }

    /// Generate several names. Returns a JSON array of strings.
    #[wasm_bindgen(js_name = generateBatch)]
    pub fn generate_batch(&mut self, count: usize) -> Result<String, JsError> {
        let names = self.engine.generate_batch(count);
        serde_json::to_string(&names)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Generate one name with its raw fragment draws, as JSON.
    #[wasm_bindgen(js_name = composeDetailed)]
    pub fn compose_detailed(&mut self) -> Result<String, JsError> {
        let composed = self.engine.compose();
        serde_json::to_string(&composed)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return a JSON description of this demo's lexicon.
    #[wasm_bindgen(js_name = lexiconSummary)]
    pub fn lexicon_summary(&self) -> String {
        let p = self.engine.probabilities();
        let info = describe(self.engine.lexicon(), p.middle, p.title);
        serde_json::to_string(&info).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reset the generator with a new seed (same lexicon).
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        let fresh = Self::build(seed, self.lexicon_source.clone())?;
        self.engine = fresh.engine;
        self.lexicon_source = fresh.lexicon_source;
        Ok(())
    }
}

// Private helpers
impl NameDemo {
    fn build(seed: u64, lexicon_source: Option<String>) -> Result<NameDemo, JsError> {
        let mut builder = NameEngine::builder().seed(seed);
        if let Some(ref source) = lexicon_source {
            let lexicon = Lexicon::parse_ron(source)
                .map_err(|e| JsError::new(&format!("Lexicon parse error: {e}")))?;
            builder = builder.with_lexicon(lexicon);
        }
        let engine = builder
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;
        Ok(NameDemo {
            engine,
            lexicon_source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_return_names() {
        assert!(!generate_character_name().is_empty());
        assert_eq!(generate_hyphenated_name().matches('-').count(), 1);
    }

    #[test]
    fn demo_reset_replays_sequence() {
        let mut demo = NameDemo::new(11).unwrap_or_else(|_| panic!("demo construction failed"));
        let first: Vec<String> = (0..5).map(|_| demo.generate()).collect();
        demo.reset(11).unwrap_or_else(|_| panic!("demo construction failed"));
        let second: Vec<String> = (0..5).map(|_| demo.generate()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn summary_lists_every_tier() {
        let summary = lexicon_summary();
        for tier in FragmentTier::ALL {
            assert!(summary.contains(tier.name()));
        }
    }
}
