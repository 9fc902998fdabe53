//! Input set data model.
//!
//! An input set is the collection of characters shown on a keyboard's letter,
//! number or symbol rows, independent of key geometry. Each row keeps a
//! lowercased and an uppercased character list so shifted keyboards can be
//! built from the same data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target device class. Selects between the phone and pad variant of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Phone-sized keyboards (fewer punctuation keys)
    #[default]
    Phone,
    /// Tablet-class keyboards
    Pad,
}

impl DeviceClass {
    /// Pick the value matching this device class.
    pub fn select<T>(self, phone: T, pad: T) -> T {
        match self {
            DeviceClass::Phone => phone,
            DeviceClass::Pad => pad,
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Phone => write!(f, "phone"),
            DeviceClass::Pad => write!(f, "pad"),
        }
    }
}

/// Keyboard case used when reading characters out of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardCase {
    #[default]
    Lowercased,
    Uppercased,
}

/// Which keyboard mode an input set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSetKind {
    Alphabetic,
    Numeric,
    Symbolic,
}

impl fmt::Display for InputSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSetKind::Alphabetic => write!(f, "alphabetic"),
            InputSetKind::Numeric => write!(f, "numeric"),
            InputSetKind::Symbolic => write!(f, "symbolic"),
        }
    }
}

/// One horizontal row of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSetRow {
    lowercased: Vec<String>,
    uppercased: Vec<String>,
}

impl InputSetRow {
    /// Build a row where every character of `chars` becomes one key.
    pub fn new(chars: &str) -> Self {
        let lowercased = split_chars(chars);
        let uppercased = lowercased.iter().map(|c| uppercase_key(c)).collect();
        Self {
            lowercased,
            uppercased,
        }
    }

    /// Build a row from a phone and a pad variant, keeping the one that
    /// matches `device`.
    pub fn device_dependent(phone: &str, pad: &str, device: DeviceClass) -> Self {
        Self::new(device.select(phone, pad))
    }

    /// Build a row with explicit lower- and uppercase characters.
    ///
    /// Both strings must hold the same number of characters; if they don't,
    /// the uppercase list is derived from `lower` instead.
    pub fn with_cases(lower: &str, upper: &str) -> Self {
        let lowercased = split_chars(lower);
        let explicit = split_chars(upper);
        if explicit.len() == lowercased.len() {
            Self {
                lowercased,
                uppercased: explicit,
            }
        } else {
            tracing::debug!(
                lower,
                upper,
                "case lists differ in length, deriving uppercase row"
            );
            Self::new(lower)
        }
    }

    /// Characters for the given keyboard case.
    pub fn characters(&self, case: KeyboardCase) -> &[String] {
        match case {
            KeyboardCase::Lowercased => &self.lowercased,
            KeyboardCase::Uppercased => &self.uppercased,
        }
    }

    /// Number of keys in this row.
    pub fn len(&self) -> usize {
        self.lowercased.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lowercased.is_empty()
    }

    /// Iterate over the lowercased characters.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lowercased.iter().map(String::as_str)
    }

    /// Join the row back into a single string.
    pub fn as_string(&self, case: KeyboardCase) -> String {
        self.characters(case).concat()
    }
}

impl fmt::Display for InputSetRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string(KeyboardCase::Lowercased))
    }
}

/// Rows of an input set, top to bottom.
pub type InputSetRows = Vec<InputSetRow>;

/// A tagged set of keyboard rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSet {
    pub kind: InputSetKind,
    pub rows: InputSetRows,
}

impl InputSet {
    pub fn new(kind: InputSetKind, rows: InputSetRows) -> Self {
        Self { kind, rows }
    }

    /// Get a row by index (0 = top).
    pub fn row(&self, index: usize) -> Option<&InputSetRow> {
        self.rows.get(index)
    }

    /// All rows as character lists for the given case.
    pub fn characters(&self, case: KeyboardCase) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.characters(case).to_vec())
            .collect()
    }
}

fn split_chars(s: &str) -> Vec<String> {
    s.chars().map(|c| c.to_string()).collect()
}

// Keys stay single characters: an uppercase form that expands (ß -> SS)
// keeps the original character.
fn uppercase_key(key: &str) -> String {
    let upper = key.to_uppercase();
    if upper.chars().count() == 1 {
        upper
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_flat_string() {
        let row = InputSetRow::new("abc");
        assert_eq!(row.len(), 3);
        assert_eq!(row.characters(KeyboardCase::Lowercased), ["a", "b", "c"]);
        assert_eq!(row.characters(KeyboardCase::Uppercased), ["A", "B", "C"]);
    }

    #[test]
    fn test_row_keeps_multibyte_chars_whole() {
        let row = InputSetRow::new("ü€’");
        assert_eq!(row.len(), 3);
        assert_eq!(row.characters(KeyboardCase::Lowercased), ["ü", "€", "’"]);
        assert_eq!(row.characters(KeyboardCase::Uppercased), ["Ü", "€", "’"]);
    }

    #[test]
    fn test_expanding_uppercase_keeps_lowercase() {
        let row = InputSetRow::new("ß");
        assert_eq!(row.characters(KeyboardCase::Uppercased), ["ß"]);
    }

    #[test]
    fn test_device_dependent_row() {
        let phone = InputSetRow::device_dependent("ab", "abcd", DeviceClass::Phone);
        let pad = InputSetRow::device_dependent("ab", "abcd", DeviceClass::Pad);
        assert_eq!(phone.as_string(KeyboardCase::Lowercased), "ab");
        assert_eq!(pad.as_string(KeyboardCase::Lowercased), "abcd");
    }

    #[test]
    fn test_with_cases() {
        let row = InputSetRow::with_cases("ab", "XY");
        assert_eq!(row.as_string(KeyboardCase::Uppercased), "XY");

        // Mismatched lengths fall back to derived uppercase
        let row = InputSetRow::with_cases("ab", "X");
        assert_eq!(row.as_string(KeyboardCase::Uppercased), "AB");
    }

    #[test]
    fn test_empty_row() {
        let row = InputSetRow::new("");
        assert!(row.is_empty());
        assert_eq!(row.to_string(), "");
    }

    #[test]
    fn test_input_set_accessors() {
        let set = InputSet::new(
            InputSetKind::Alphabetic,
            vec![InputSetRow::new("ab"), InputSetRow::new("c")],
        );
        assert_eq!(set.row(1).map(|r| r.len()), Some(1));
        assert!(set.row(2).is_none());
        assert_eq!(
            set.characters(KeyboardCase::Uppercased),
            vec![vec!["A".to_string(), "B".to_string()], vec!["C".to_string()]]
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(InputSetKind::Numeric.to_string(), "numeric");
        assert_eq!(DeviceClass::Pad.to_string(), "pad");
    }
}
