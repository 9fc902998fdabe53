//! The `Emoji` value type.
//!
//! An `Emoji` wraps one grapheme cluster and exposes its Unicode identifier,
//! its display name and the curated override used for flags.

use crate::flags;
use crate::skin_tone::SkinTone;
use crate::unicode_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// A single emoji character (grapheme cluster).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Emoji {
    char: String,
}

impl Emoji {
    /// Wrap `text` as an emoji. The text is NFC-normalized and trimmed.
    pub fn new<T: AsRef<str>>(text: T) -> Self {
        Self {
            char: libkeyset_core::utils::normalize(text.as_ref()),
        }
    }

    /// Split `text` into emoji, one per grapheme cluster.
    /// Whitespace clusters are skipped.
    pub fn all_in(text: &str) -> Vec<Emoji> {
        text.graphemes(true)
            .filter(|g| !g.trim().is_empty())
            .map(Emoji::new)
            .collect()
    }

    /// Build the flag emoji for a two-letter country code.
    pub fn flag(region: &str) -> Option<Emoji> {
        flags::flag_for(region).map(Emoji::new)
    }

    pub fn as_str(&self) -> &str {
        &self.char
    }

    /// Raw identifier, e.g. `\N{GRINNING FACE}`.
    pub fn unicode_identifier(&self) -> String {
        unicode_name::identifier(&self.char)
    }

    /// Display name: the override if there is one, the cleaned identifier
    /// otherwise.
    pub fn unicode_name(&self) -> String {
        self.unicode_name_override()
            .unwrap_or_else(|| unicode_name::display_name(&self.unicode_identifier()))
    }

    /// Curated display name. Only flags with a known region have one.
    pub fn unicode_name_override(&self) -> Option<String> {
        let code = self.region_code()?;
        flags::flag_name(&code)
    }

    /// Identifier and display name in one call.
    pub fn resolve(&self) -> (String, String) {
        let identifier = self.unicode_identifier();
        let name = match self.unicode_name_override() {
            Some(name) => name,
            None => unicode_name::display_name(&identifier),
        };
        (identifier, name)
    }

    pub fn is_flag(&self) -> bool {
        flags::is_flag(&self.char)
    }

    /// Region code of a flag emoji (`KE`, `GB-ENG`).
    pub fn region_code(&self) -> Option<String> {
        flags::region_code(&self.char)
    }

    /// Skin tone modifier applied to this emoji, if any.
    pub fn skin_tone(&self) -> Option<SkinTone> {
        self.char.chars().find_map(SkinTone::from_char)
    }

    /// This emoji with any skin tone modifier removed.
    pub fn without_skin_tone(&self) -> Emoji {
        Emoji {
            char: self
                .char
                .chars()
                .filter(|&c| SkinTone::from_char(c).is_none())
                .collect(),
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.char)
    }
}

impl From<String> for Emoji {
    fn from(s: String) -> Self {
        Emoji::new(s)
    }
}

impl From<Emoji> for String {
    fn from(emoji: Emoji) -> Self {
        emoji.char
    }
}

impl From<&str> for Emoji {
    fn from(s: &str) -> Self {
        Emoji::new(s)
    }
}
