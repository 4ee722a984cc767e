use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a fragment plays in a generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentTier {
    /// Opening syllables of the core word. Always contributes.
    Prefix,
    /// Optional connective syllables. Contains empty entries.
    Middle,
    /// Closing syllables of the core word. Always contributes.
    Suffix,
    /// Epithet appended after a space. Contains empty entries.
    Title,
    /// First half of a hyphenated handle.
    Adjective,
    /// Second half of a hyphenated handle.
    Noun,
}

impl FragmentTier {
    /// Every tier, in lexicon order.
    pub const ALL: [FragmentTier; 6] = [
        Self::Prefix,
        Self::Middle,
        Self::Suffix,
        Self::Title,
        Self::Adjective,
        Self::Noun,
    ];

    /// Returns the lowercase field name used in lexicon files (e.g., "prefix").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Middle => "middle",
            Self::Suffix => "suffix",
            Self::Title => "title",
            Self::Adjective => "adjective",
            Self::Noun => "noun",
        }
    }

    /// Whether the tier may hold empty entries as an implicit second
    /// inclusion layer.
    pub fn allows_empty(&self) -> bool {
        matches!(self, Self::Middle | Self::Title)
    }

    /// Whether the tier feeds the core word (and therefore must be
    /// purely alphabetic).
    pub fn is_core(&self) -> bool {
        matches!(self, Self::Prefix | Self::Middle | Self::Suffix)
    }

    /// Whether the tier feeds the hyphenated mode (lowercase words only).
    pub fn is_handle(&self) -> bool {
        matches!(self, Self::Adjective | Self::Noun)
    }
}

impl fmt::Display for FragmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
