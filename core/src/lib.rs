//! libkeyset-core
//!
//! Keyboard input sets and the configuration shared by the libkeyset crates.
//!
//! Public API:
//! - `InputSet` - Rows of characters tagged by `InputSetKind`
//! - `InputSetRow` - One keyboard row with lower- and uppercase keys
//! - `DeviceClass` - Phone/pad selector for device-dependent rows
//! - `AlphabeticLayout` - QWERTY, QWERTZ, AZERTY
//! - `Config` - Device class, currencies and layout defaults
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod input_set;
pub use input_set::{DeviceClass, InputSet, InputSetKind, InputSetRow, InputSetRows, KeyboardCase};

pub mod catalog;
pub use catalog::{symbolic_currencies_for, AlphabeticLayout, CURRENCY_POOL, DEFAULT_CURRENCY};

/// Configuration for building input sets.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Device class used for device-dependent rows
    pub device: DeviceClass,

    /// Currency placed on the numeric keyboard
    pub numeric_currency: String,

    /// Currencies placed on the symbolic keyboard.
    /// `None` derives them from `numeric_currency`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbolic_currencies: Option<Vec<String>>,

    /// Letter layout used for alphabetic input sets
    pub alphabetic_layout: AlphabeticLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DeviceClass::Phone,
            numeric_currency: DEFAULT_CURRENCY.to_string(),
            symbolic_currencies: None,
            alphabetic_layout: AlphabeticLayout::Qwerty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string().context("serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("write config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn set_device(&mut self, device: DeviceClass) {
        self.device = device;
    }

    /// Set the numeric currency. Empty strings are ignored.
    pub fn set_numeric_currency(&mut self, currency: &str) {
        if !currency.is_empty() {
            self.numeric_currency = currency.to_string();
        }
    }

    /// Currencies for the symbolic keyboard: the explicit list if set,
    /// otherwise derived from the numeric currency.
    pub fn symbolic_currencies(&self) -> Vec<String> {
        match &self.symbolic_currencies {
            Some(list) => list.clone(),
            None => symbolic_currencies_for(&self.numeric_currency),
        }
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Title-case every word: first letter uppercased, the rest lowercased.
    ///
    /// Words are split on whitespace and rejoined with single spaces.
    /// Hyphenated parts are capitalized on their own.
    ///
    /// ```
    /// use libkeyset_core::utils::title_case;
    ///
    /// assert_eq!(title_case("GRINNING FACE"), "Grinning Face");
    /// assert_eq!(title_case("medium-dark  skin"), "Medium-Dark Skin");
    /// ```
    pub fn title_case(s: &str) -> String {
        s.split_whitespace()
            .map(|word| {
                word.split('-')
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn capitalize(part: &str) -> String {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.device, DeviceClass::Phone);
        assert_eq!(config.numeric_currency, "$");
        assert_eq!(config.symbolic_currencies(), vec!["€", "£", "¥"]);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str("device = \"pad\"\nnumeric_currency = \"£\"\n").unwrap();
        assert_eq!(config.device, DeviceClass::Pad);
        assert_eq!(config.alphabetic_layout, AlphabeticLayout::Qwerty);
        assert_eq!(config.symbolic_currencies(), vec!["$", "€", "¥"]);
    }

    #[test]
    fn test_explicit_symbolic_currencies() {
        let config = Config::from_toml_str("symbolic_currencies = [\"₹\", \"₩\"]\n").unwrap();
        assert_eq!(config.symbolic_currencies(), vec!["₹", "₩"]);
    }

    #[test]
    fn test_toml_string_roundtrip() {
        let mut config = Config::default();
        config.set_device(DeviceClass::Pad);
        config.set_numeric_currency("€");
        config.alphabetic_layout = AlphabeticLayout::Azerty;

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("device = \"pad\""));
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("device = \"watch\"").is_err());
    }

    #[test]
    fn test_empty_currency_ignored() {
        let mut config = Config::default();
        config.set_numeric_currency("");
        assert_eq!(config.numeric_currency, "$");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(utils::title_case("RING"), "Ring");
        assert_eq!(utils::title_case("variation selector-16"), "Variation Selector-16");
        assert_eq!(utils::title_case(""), "");
    }

    #[test]
    fn test_normalize() {
        // e + combining acute -> precomposed é
        assert_eq!(utils::normalize(" e\u{0301} "), "\u{e9}");
    }
}
