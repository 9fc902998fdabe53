//! # libkeyset-emoji
//!
//! Unicode identifiers and display names for emoji, with curated names for
//! flag emoji.
//!
//! Public API exported here:
//! - `Emoji` from `emoji`
//! - `SkinTone` from `skin_tone`
//! - flag helpers in `flags`, name derivation in `unicode_name`

pub mod emoji;
pub mod flags;
pub mod skin_tone;
pub mod unicode_name;

pub use emoji::Emoji;
pub use flags::{country_name, flag_name, FLAG_PREFIX};
pub use skin_tone::SkinTone;
