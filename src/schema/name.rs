use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::casing::capitalize_core;

/// The raw draws behind one generated character name.
///
/// `Display` renders the final name: the normalized core word, then the
/// title (verbatim) after a single space when one was drawn and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedName {
    pub prefix: String,
    /// Whether the middle inclusion roll succeeded.
    pub middle_rolled: bool,
    /// The middle fragment drawn, empty when the roll failed or landed on
    /// an empty entry.
    pub middle: String,
    pub suffix: String,
    /// Whether the title inclusion roll succeeded.
    pub title_rolled: bool,
    /// The title drawn, empty when the roll failed or landed on an empty
    /// entry.
    pub title: String,
}

impl ComposedName {
    /// The core word after normalization, without any title.
    pub fn core_word(&self) -> String {
        let mut raw =
            String::with_capacity(self.prefix.len() + self.middle.len() + self.suffix.len());
        raw.push_str(&self.prefix);
        raw.push_str(&self.middle);
        raw.push_str(&self.suffix);
        capitalize_core(&raw)
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

impl fmt::Display for ComposedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.core_word())?;
        if self.has_title() {
            write!(f, " {}", self.title)?;
        }
        Ok(())
    }
}

/// An `adjective-noun` handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyphenatedName {
    pub adjective: String,
    pub noun: String,
}

impl fmt::Display for HyphenatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.adjective, self.noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(prefix: &str, middle: &str, suffix: &str, title: &str) -> ComposedName {
        ComposedName {
            prefix: prefix.to_string(),
            middle_rolled: !middle.is_empty(),
            middle: middle.to_string(),
            suffix: suffix.to_string(),
            title_rolled: !title.is_empty(),
            title: title.to_string(),
        }
    }

    #[test]
    fn renders_core_and_title() {
        assert_eq!(
            name("Aer", "ad", "adan", "the Brave").to_string(),
            "Aeradadan the Brave"
        );
    }

    #[test]
    fn untitled_has_no_trailing_space() {
        assert_eq!(name("Thor", "", "heart", "").to_string(), "Thorheart");
    }

    #[test]
    fn title_casing_is_kept() {
        // Only the core word is normalized.
        assert_eq!(
            name("GRIM", "", "Wrath", "Titan's Hand").to_string(),
            "Grimwrath Titan's Hand"
        );
    }

    #[test]
    fn rolled_title_landing_on_empty_renders_bare() {
        let mut n = name("Kal", "", "us", "");
        n.title_rolled = true;
        assert!(!n.has_title());
        assert_eq!(n.to_string(), "Kalus");
    }

    #[test]
    fn hyphenated_display() {
        let h = HyphenatedName {
            adjective: "admirable".to_string(),
            noun: "eagle".to_string(),
        };
        assert_eq!(h.to_string(), "admirable-eagle");
    }
}
