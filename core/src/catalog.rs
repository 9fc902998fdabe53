//! Standard input sets.
//!
//! Alphabetic layouts (QWERTY, QWERTZ, AZERTY) plus the numeric and symbolic
//! sets used by English keyboards. Every entry point takes the device class
//! explicitly and returns a fresh `InputSet`.

use crate::input_set::{DeviceClass, InputSet, InputSetKind, InputSetRow};
use crate::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies offered on symbolic keyboards, in display order.
pub const CURRENCY_POOL: [&str; 4] = ["$", "€", "£", "¥"];

/// Currency used by English numeric keyboards when none is given.
pub const DEFAULT_CURRENCY: &str = "$";

/// Alphabetic layout families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabeticLayout {
    #[default]
    Qwerty,
    Qwertz,
    Azerty,
}

impl AlphabeticLayout {
    pub fn input_set(self, device: DeviceClass) -> InputSet {
        match self {
            AlphabeticLayout::Qwerty => InputSet::qwerty(device),
            AlphabeticLayout::Qwertz => InputSet::qwertz(device),
            AlphabeticLayout::Azerty => InputSet::azerty(device),
        }
    }
}

impl fmt::Display for AlphabeticLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabeticLayout::Qwerty => write!(f, "qwerty"),
            AlphabeticLayout::Qwertz => write!(f, "qwertz"),
            AlphabeticLayout::Azerty => write!(f, "azerty"),
        }
    }
}

impl InputSet {
    // ========== Alphabetic ==========

    /// QWERTY letters. The bottom row gains `,` and `.` on pads.
    pub fn qwerty(device: DeviceClass) -> Self {
        Self::new(
            InputSetKind::Alphabetic,
            vec![
                InputSetRow::new("qwertyuiop"),
                InputSetRow::new("asdfghjkl"),
                InputSetRow::device_dependent("zxcvbnm", "zxcvbnm,.", device),
            ],
        )
    }

    /// German QWERTZ letters, including umlauts.
    pub fn qwertz(device: DeviceClass) -> Self {
        Self::new(
            InputSetKind::Alphabetic,
            vec![
                InputSetRow::new("qwertzuiopü"),
                InputSetRow::new("asdfghjklöä"),
                InputSetRow::device_dependent("yxcvbnm", "yxcvbnm,.", device),
            ],
        )
    }

    /// French AZERTY letters.
    pub fn azerty(device: DeviceClass) -> Self {
        Self::new(
            InputSetKind::Alphabetic,
            vec![
                InputSetRow::new("azertyuiop"),
                InputSetRow::new("qsdfghjklm"),
                InputSetRow::device_dependent("wxcvbn", "wxcvbn,.", device),
            ],
        )
    }

    // ========== Numeric / Symbolic ==========

    /// Digits, then punctuation with `currency` spliced in, then terminal
    /// punctuation.
    ///
    /// The currency is not validated; each of its characters becomes a key.
    pub fn standard_numeric(currency: &str, device: DeviceClass) -> Self {
        Self::new(
            InputSetKind::Numeric,
            vec![
                InputSetRow::new("1234567890"),
                InputSetRow::device_dependent(
                    &format!("-/:;(){currency}&@”"),
                    &format!("@#{currency}&*()’”"),
                    device,
                ),
                InputSetRow::device_dependent(".,?!’", "%-+=/;:!?", device),
            ],
        )
    }

    /// Brackets and operators, then `currencies` next to assorted symbols,
    /// then punctuation.
    pub fn standard_symbolic<S: AsRef<str>>(currencies: &[S], device: DeviceClass) -> Self {
        let joined: String = currencies.iter().map(AsRef::as_ref).collect();
        Self::new(
            InputSetKind::Symbolic,
            vec![
                InputSetRow::device_dependent("[]{}#%^*+=", "1234567890", device),
                InputSetRow::device_dependent(
                    &format!("_\\|~<>{joined}•"),
                    &format!("{joined}_^[]{{}}"),
                    device,
                ),
                InputSetRow::device_dependent(".,?!’", "§|~…\\<>!?", device),
            ],
        )
    }

    // ========== English defaults ==========

    pub fn english_alphabetic(device: DeviceClass) -> Self {
        Self::qwerty(device)
    }

    /// Numeric set with the `$` currency.
    pub fn english_numeric(device: DeviceClass) -> Self {
        Self::english_numeric_with(DEFAULT_CURRENCY, device)
    }

    pub fn english_numeric_with(currency: &str, device: DeviceClass) -> Self {
        Self::standard_numeric(currency, device)
    }

    /// Symbolic set with the currencies that complement `$`.
    pub fn english_symbolic(device: DeviceClass) -> Self {
        Self::english_symbolic_with(DEFAULT_CURRENCY, device)
    }

    /// Symbolic set with the currencies that complement `currency`.
    pub fn english_symbolic_with(currency: &str, device: DeviceClass) -> Self {
        Self::standard_symbolic(&symbolic_currencies_for(currency), device)
    }

    /// Build the input set for `kind` from configuration.
    pub fn for_kind(kind: InputSetKind, config: &Config) -> Self {
        match kind {
            InputSetKind::Alphabetic => config.alphabetic_layout.input_set(config.device),
            InputSetKind::Numeric => {
                Self::english_numeric_with(&config.numeric_currency, config.device)
            }
            InputSetKind::Symbolic => {
                Self::standard_symbolic(&config.symbolic_currencies(), config.device)
            }
        }
    }
}

/// Currencies shown on the symbolic keyboard when `numeric_currency` is on
/// the numeric one.
///
/// The pool minus the numeric currency, in pool order. An unknown currency
/// keeps the first three pool entries.
///
/// ```
/// use libkeyset_core::catalog::symbolic_currencies_for;
///
/// assert_eq!(symbolic_currencies_for("$"), vec!["€", "£", "¥"]);
/// assert_eq!(symbolic_currencies_for("£"), vec!["$", "€", "¥"]);
/// ```
pub fn symbolic_currencies_for(numeric_currency: &str) -> Vec<String> {
    let remaining: Vec<String> = CURRENCY_POOL
        .iter()
        .filter(|&&c| c != numeric_currency)
        .map(|c| c.to_string())
        .collect();
    remaining.into_iter().take(CURRENCY_POOL.len() - 1).collect()
}
