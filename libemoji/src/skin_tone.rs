//! Fitzpatrick skin tone modifiers (U+1F3FB..U+1F3FF).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinTone {
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    pub const ALL: [SkinTone; 5] = [
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// The modifier character for this tone.
    pub fn as_char(self) -> char {
        match self {
            SkinTone::Light => '\u{1F3FB}',
            SkinTone::MediumLight => '\u{1F3FC}',
            SkinTone::Medium => '\u{1F3FD}',
            SkinTone::MediumDark => '\u{1F3FE}',
            SkinTone::Dark => '\u{1F3FF}',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.as_char() == c)
    }

    /// Parse the Unicode name of a modifier, e.g.
    /// `EMOJI MODIFIER FITZPATRICK TYPE-3`.
    pub fn from_modifier_name(name: &str) -> Option<Self> {
        match name.strip_prefix("EMOJI MODIFIER FITZPATRICK ")? {
            "TYPE-1-2" => Some(SkinTone::Light),
            "TYPE-3" => Some(SkinTone::MediumLight),
            "TYPE-4" => Some(SkinTone::Medium),
            "TYPE-5" => Some(SkinTone::MediumDark),
            "TYPE-6" => Some(SkinTone::Dark),
            _ => None,
        }
    }

    /// Label used in display names, e.g. `Medium-Light`.
    pub fn label(self) -> &'static str {
        match self {
            SkinTone::Light => "Light",
            SkinTone::MediumLight => "Medium-Light",
            SkinTone::Medium => "Medium",
            SkinTone::MediumDark => "Medium-Dark",
            SkinTone::Dark => "Dark",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Skin Tone", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for tone in SkinTone::ALL {
            assert_eq!(SkinTone::from_char(tone.as_char()), Some(tone));
        }
        assert_eq!(SkinTone::from_char('a'), None);
    }

    #[test]
    fn test_modifier_names() {
        assert_eq!(
            SkinTone::from_modifier_name("EMOJI MODIFIER FITZPATRICK TYPE-1-2"),
            Some(SkinTone::Light)
        );
        assert_eq!(
            SkinTone::from_modifier_name("EMOJI MODIFIER FITZPATRICK TYPE-6"),
            Some(SkinTone::Dark)
        );
        assert_eq!(SkinTone::from_modifier_name("GRINNING FACE"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SkinTone::MediumDark.to_string(), "Medium-Dark Skin Tone");
    }
}
