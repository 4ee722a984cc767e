//! Fragment sets and the lexicon that groups them: types, loading, and
//! validation.

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use super::builtin;
use super::tier::FragmentTier;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("tier '{0}' has no entries")]
    EmptyTier(FragmentTier),
    #[error("tier '{tier}' entry {index} is blank, but this tier must always contribute text")]
    BlankFragment { tier: FragmentTier, index: usize },
    #[error("tier '{tier}' entry {index} ({value:?}) contains characters not allowed in this tier")]
    InvalidFragment {
        tier: FragmentTier,
        index: usize,
        value: String,
    },
}

/// An ordered, index-addressable set of fragments for one tier.
///
/// Order carries no meaning but is stable, so a given index always
/// resolves to the same fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentSet {
    entries: Vec<String>,
}

impl FragmentSet {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn from_static(entries: &[&str]) -> Self {
        Self {
            entries: entries.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e == value)
    }

    /// Number of designed empty entries.
    pub fn empty_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_empty()).count()
    }

    /// Length of the shortest non-empty entry, if any.
    pub fn shortest(&self) -> Option<usize> {
        self.entries
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| e.len())
            .min()
    }

    /// Non-empty entries that appear more than once, in first-repeat order.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut reported = FxHashSet::default();
        let mut dupes = Vec::new();
        for entry in self.entries.iter().filter(|e| !e.is_empty()) {
            if !seen.insert(entry.as_str()) && reported.insert(entry.as_str()) {
                dupes.push(entry.as_str());
            }
        }
        dupes
    }
}

/// The complete set of tiers a composer draws from.
///
/// A lexicon is immutable once built: either the compiled-in reference
/// data or a RON file that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    prefix: FragmentSet,
    middle: FragmentSet,
    suffix: FragmentSet,
    title: FragmentSet,
    adjective: FragmentSet,
    noun: FragmentSet,
}

// RON files may omit the handle tiers (or leave them empty); the built-in
// lists fill them in.
#[derive(Debug, Deserialize)]
#[serde(rename = "Lexicon", deny_unknown_fields)]
struct RonLexicon {
    prefix: Vec<String>,
    middle: Vec<String>,
    suffix: Vec<String>,
    title: Vec<String>,
    #[serde(default)]
    adjective: Vec<String>,
    #[serde(default)]
    noun: Vec<String>,
}

impl Lexicon {
    /// The reference word lists.
    pub fn builtin() -> Self {
        Self {
            prefix: FragmentSet::from_static(builtin::PREFIXES),
            middle: FragmentSet::from_static(builtin::MIDDLES),
            suffix: FragmentSet::from_static(builtin::SUFFIXES),
            title: FragmentSet::from_static(builtin::TITLES),
            adjective: FragmentSet::from_static(builtin::ADJECTIVES),
            noun: FragmentSet::from_static(builtin::NOUNS),
        }
    }

    /// The built-in lexicon, constructed on first use and shared for the
    /// rest of the process.
    pub fn shared() -> &'static Lexicon {
        static SHARED: OnceLock<Lexicon> = OnceLock::new();
        SHARED.get_or_init(Lexicon::builtin)
    }

    /// Build a lexicon from explicit sets, validating every tier.
    pub fn new(
        prefix: FragmentSet,
        middle: FragmentSet,
        suffix: FragmentSet,
        title: FragmentSet,
        adjective: FragmentSet,
        noun: FragmentSet,
    ) -> Result<Self, LexiconError> {
        let lexicon = Self {
            prefix,
            middle,
            suffix,
            title,
            adjective,
            noun,
        };
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load a lexicon from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Lexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        let lexicon = Self::parse_ron(&contents)?;
        debug!(
            "loaded lexicon from {} ({} prefixes, {} middles, {} suffixes, {} titles)",
            path.display(),
            lexicon.prefix.len(),
            lexicon.middle.len(),
            lexicon.suffix.len(),
            lexicon.title.len()
        );
        Ok(lexicon)
    }

    /// Parse a lexicon from a RON string.
    pub fn parse_ron(input: &str) -> Result<Lexicon, LexiconError> {
        let raw: RonLexicon = ron::from_str(input)?;
        let adjective = if raw.adjective.is_empty() {
            FragmentSet::from_static(builtin::ADJECTIVES)
        } else {
            FragmentSet::new(raw.adjective)
        };
        let noun = if raw.noun.is_empty() {
            FragmentSet::from_static(builtin::NOUNS)
        } else {
            FragmentSet::new(raw.noun)
        };
        Self::new(
            FragmentSet::new(raw.prefix),
            FragmentSet::new(raw.middle),
            FragmentSet::new(raw.suffix),
            FragmentSet::new(raw.title),
            adjective,
            noun,
        )
    }

    pub fn tier(&self, tier: FragmentTier) -> &FragmentSet {
        match tier {
            FragmentTier::Prefix => &self.prefix,
            FragmentTier::Middle => &self.middle,
            FragmentTier::Suffix => &self.suffix,
            FragmentTier::Title => &self.title,
            FragmentTier::Adjective => &self.adjective,
            FragmentTier::Noun => &self.noun,
        }
    }

    /// Shortest possible core word, in bytes.
    pub fn min_core_len(&self) -> usize {
        self.prefix.shortest().unwrap_or(0) + self.suffix.shortest().unwrap_or(0)
    }

    /// Check every tier against its content rules.
    pub fn validate(&self) -> Result<(), LexiconError> {
        for tier in FragmentTier::ALL {
            validate_tier(tier, self.tier(tier))?;
        }
        Ok(())
    }
}

fn validate_tier(tier: FragmentTier, set: &FragmentSet) -> Result<(), LexiconError> {
    if set.is_empty() {
        return Err(LexiconError::EmptyTier(tier));
    }

    for (index, value) in set.iter().enumerate() {
        if value.is_empty() {
            if tier.allows_empty() {
                continue;
            }
            return Err(LexiconError::BlankFragment { tier, index });
        }
        if value.trim().is_empty() && !tier.allows_empty() {
            return Err(LexiconError::BlankFragment { tier, index });
        }

        let valid = if tier.is_core() {
            value.chars().all(|c| c.is_ascii_alphabetic())
        } else if tier.is_handle() {
            value.chars().all(|c| c.is_ascii_lowercase())
        } else {
            // Titles are free text, but the single separating space is ours.
            value.trim() == value
        };

        if !valid {
            return Err(LexiconError::InvalidFragment {
                tier,
                index,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}
