//! Name Composer: procedural fantasy character names.
//!
//! Builds names such as "Thalmorheart the Bold" by drawing fragments from
//! curated word lists, gating the optional tiers behind inclusion rolls,
//! and normalizing the capitalization of the assembled word. A second
//! mode produces GitHub-style `adjective-noun` handles.

pub mod core;
pub mod schema;

use crate::core::composer::NameComposer;
use crate::schema::lexicon::Lexicon;

/// Generate one character name from the built-in lexicon.
///
/// Uses the calling thread's generator, which is seeded from OS entropy
/// once per thread, so concurrent callers share no mutable state.
pub fn generate() -> String {
    NameComposer::new(Lexicon::shared()).generate(&mut rand::thread_rng())
}

/// Generate one `adjective-noun` handle from the built-in lexicon.
pub fn generate_hyphenated() -> String {
    NameComposer::new(Lexicon::shared()).generate_hyphenated(&mut rand::thread_rng())
}
