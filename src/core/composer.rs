//! Name composition: fragment draws, inclusion rolls, and assembly.

use log::trace;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::random::EntropySource;
use crate::schema::lexicon::{FragmentSet, Lexicon};
use crate::schema::name::{ComposedName, HyphenatedName};
use crate::schema::tier::FragmentTier;

/// Chance of rolling for a middle fragment.
pub const DEFAULT_MIDDLE_PROBABILITY: f64 = 0.7;
/// Chance of rolling for a title.
pub const DEFAULT_TITLE_PROBABILITY: f64 = 0.4;

#[derive(Debug, Error)]
pub enum ComposerError {
    #[error("{name} probability must be within [0.0, 1.0], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Inclusion-roll thresholds.
///
/// These decide whether a tier is rolled at all. What the roll yields is
/// decided separately by the tier's own entries, empty ones included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Probabilities {
    #[serde(default = "default_middle")]
    pub middle: f64,
    #[serde(default = "default_title")]
    pub title: f64,
}

fn default_middle() -> f64 {
    DEFAULT_MIDDLE_PROBABILITY
}

fn default_title() -> f64 {
    DEFAULT_TITLE_PROBABILITY
}

impl Default for Probabilities {
    fn default() -> Self {
        Self {
            middle: DEFAULT_MIDDLE_PROBABILITY,
            title: DEFAULT_TITLE_PROBABILITY,
        }
    }
}

impl Probabilities {
    pub fn validate(&self) -> Result<(), ComposerError> {
        check_probability("middle", self.middle)?;
        check_probability("title", self.title)
    }

    /// Load a profile from a RON file, e.g. `(middle: 0.5, title: 0.9)`.
    /// Omitted fields keep their defaults.
    pub fn load_from_ron(path: &Path) -> Result<Probabilities, ComposerError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<Probabilities, ComposerError> {
        let probabilities: Probabilities = ron::from_str(input)?;
        probabilities.validate()?;
        Ok(probabilities)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ComposerError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ComposerError::InvalidProbability { name, value })
    }
}

/// Composes names from a borrowed lexicon.
///
/// Holds no mutable state; all randomness comes from the source passed to
/// each call, so one composer can serve any number of callers.
#[derive(Debug, Clone, Copy)]
pub struct NameComposer<'a> {
    lexicon: &'a Lexicon,
    probabilities: Probabilities,
}

impl<'a> NameComposer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            probabilities: Probabilities::default(),
        }
    }

    pub fn with_probabilities(
        lexicon: &'a Lexicon,
        probabilities: Probabilities,
    ) -> Result<Self, ComposerError> {
        probabilities.validate()?;
        Ok(Self {
            lexicon,
            probabilities,
        })
    }

    /// Skips validation; callers hold probabilities that already passed it.
    pub(crate) fn from_validated(lexicon: &'a Lexicon, probabilities: Probabilities) -> Self {
        Self {
            lexicon,
            probabilities,
        }
    }

    /// Draw every fragment for one character name.
    ///
    /// Draw order: prefix, middle roll, [middle], suffix, title roll, [title].
    pub fn compose<S: EntropySource + ?Sized>(&self, source: &mut S) -> ComposedName {
        let prefix = self.draw(FragmentTier::Prefix, source);

        let middle_rolled = source.roll(self.probabilities.middle);
        let middle = if middle_rolled {
            self.draw(FragmentTier::Middle, source)
        } else {
            ""
        };

        let suffix = self.draw(FragmentTier::Suffix, source);

        let title_rolled = source.roll(self.probabilities.title);
        let title = if title_rolled {
            self.draw(FragmentTier::Title, source)
        } else {
            ""
        };

        trace!(
            "composed prefix={prefix:?} middle={middle:?} suffix={suffix:?} title={title:?}"
        );

        ComposedName {
            prefix: prefix.to_string(),
            middle_rolled,
            middle: middle.to_string(),
            suffix: suffix.to_string(),
            title_rolled,
            title: title.to_string(),
        }
    }

    /// Generate one character name, e.g. `"Thalmorheart the Bold"`.
    pub fn generate<S: EntropySource + ?Sized>(&self, source: &mut S) -> String {
        self.compose(source).to_string()
    }

    /// Draw one adjective and one noun.
    pub fn compose_hyphenated<S: EntropySource + ?Sized>(&self, source: &mut S) -> HyphenatedName {
        let adjective = self.draw(FragmentTier::Adjective, source);
        let noun = self.draw(FragmentTier::Noun, source);
        HyphenatedName {
            adjective: adjective.to_string(),
            noun: noun.to_string(),
        }
    }

    /// Generate one `adjective-noun` handle, e.g. `"daring-narwhal"`.
    pub fn generate_hyphenated<S: EntropySource + ?Sized>(&self, source: &mut S) -> String {
        self.compose_hyphenated(source).to_string()
    }

    fn draw<S: EntropySource + ?Sized>(&self, tier: FragmentTier, source: &mut S) -> &'a str {
        pick(self.lexicon.tier(tier), source)
    }
}

fn pick<'s, S: EntropySource + ?Sized>(set: &'s FragmentSet, source: &mut S) -> &'s str {
    // Lexicons are validated non-empty, so the index is always in range.
    let index = source.pick_index(set.len());
    set.get(index).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn all_zero_script_yields_reference_name() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::new(&lexicon);
        let mut source = ScriptedSource::new();
        assert_eq!(composer.generate(&mut source), "Aeradadan the Brave");
    }

    #[test]
    fn all_zero_script_yields_reference_handle() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::new(&lexicon);
        let mut source = ScriptedSource::new();
        assert_eq!(composer.generate_hyphenated(&mut source), "admirable-eagle");
    }

    #[test]
    fn failed_rolls_skip_middle_and_title_draws() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::new(&lexicon);
        // prefix "Thor" (57), suffix "heart" (35); both rolls above threshold
        let mut source = ScriptedSource::new()
            .with_indices([57, 35])
            .with_units([0.95, 0.95]);
        let name = composer.compose(&mut source);
        assert!(!name.middle_rolled);
        assert!(!name.title_rolled);
        assert_eq!(name.to_string(), "Thorheart");
        assert_eq!(source.index_draws(), 2);
        assert_eq!(source.unit_draws(), 2);
    }

    #[test]
    fn roll_thresholds_are_strict() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::new(&lexicon);
        // u == threshold fails; u just below succeeds
        let mut source = ScriptedSource::new().with_units([0.7, 0.399]);
        let name = composer.compose(&mut source);
        assert!(!name.middle_rolled);
        assert!(name.title_rolled);
    }

    #[test]
    fn middle_roll_landing_on_empty_entry() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::new(&lexicon);
        // middle index 56 is the first designed empty entry
        let mut source = ScriptedSource::new()
            .with_indices([0, 56, 0, 0])
            .with_units([0.0, 0.99]);
        let name = composer.compose(&mut source);
        assert!(name.middle_rolled);
        assert_eq!(name.middle, "");
        assert_eq!(name.to_string(), "Aeradan");
    }

    #[test]
    fn title_roll_landing_on_empty_entry() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::new(&lexicon);
        let mut source = ScriptedSource::new()
            .with_indices([0, 0, 0, 52])
            .with_units([0.0, 0.0]);
        let name = composer.generate(&mut source);
        assert_eq!(name, "Aeradadan");
        assert!(!name.ends_with(' '));
    }

    #[test]
    fn zero_probabilities_never_roll() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::with_probabilities(
            &lexicon,
            Probabilities {
                middle: 0.0,
                title: 0.0,
            },
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let name = composer.compose(&mut rng);
            assert!(!name.middle_rolled);
            assert!(!name.title_rolled);
            assert!(!name.to_string().contains(' '));
        }
    }

    #[test]
    fn out_of_range_probability_rejected() {
        let lexicon = Lexicon::builtin();
        let bad = Probabilities {
            middle: 1.5,
            title: 0.4,
        };
        assert!(matches!(
            NameComposer::with_probabilities(&lexicon, bad),
            Err(ComposerError::InvalidProbability { name: "middle", .. })
        ));
        let nan = Probabilities {
            middle: 0.7,
            title: f64::NAN,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn profile_defaults_missing_fields() {
        let p = Probabilities::parse_ron("(title: 0.9)").unwrap();
        assert_eq!(p.middle, DEFAULT_MIDDLE_PROBABILITY);
        assert_eq!(p.title, 0.9);
    }

    #[test]
    fn profile_rejects_misspelled_fields() {
        assert!(matches!(
            Probabilities::parse_ron("(midle: 0.0, titel: 0.0)"),
            Err(ComposerError::Ron(_))
        ));
    }

    #[test]
    fn profile_rejects_negative() {
        assert!(Probabilities::parse_ron("(middle: -0.1)").is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let lexicon = Lexicon::builtin();
        let composer = NameComposer::new(&lexicon);
        let mut a = StdRng::seed_from_u64(2026);
        let mut b = StdRng::seed_from_u64(2026);
        for _ in 0..20 {
            assert_eq!(composer.generate(&mut a), composer.generate(&mut b));
        }
    }
}
