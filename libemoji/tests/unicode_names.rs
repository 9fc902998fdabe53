//! Unicode identifier and display name behavior for representative emoji:
//! plain faces, objects, country and subdivision flags, keycaps and
//! skin tone variants.

use libkeyset_emoji::{Emoji, SkinTone};

const GRINNING_FACE: &str = "\u{1F600}";
const RING: &str = "\u{1F48D}";
const FLAG_KENYA: &str = "\u{1F1F0}\u{1F1EA}";
const FLAG_NORWAY: &str = "\u{1F1F3}\u{1F1F4}";
const FLAG_ENGLAND: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";

#[test]
fn grinning_face_identifier_and_name() {
    let emoji = Emoji::new(GRINNING_FACE);
    assert_eq!(emoji.unicode_identifier(), "\\N{GRINNING FACE}");
    assert_eq!(emoji.unicode_name(), "Grinning Face");
}

#[test]
fn ring_name() {
    assert_eq!(Emoji::new(RING).unicode_name(), "Ring");
}

#[test]
fn kenya_flag_uses_override() {
    let emoji = Emoji::new(FLAG_KENYA);
    assert_eq!(emoji.unicode_name(), "Flag - Kenya");
    assert_eq!(
        emoji.unicode_identifier(),
        "\\N{REGIONAL INDICATOR SYMBOL LETTER K}\\N{REGIONAL INDICATOR SYMBOL LETTER E}"
    );
}

#[test]
fn overrides_only_exist_for_flags() {
    assert!(Emoji::new(GRINNING_FACE).unicode_name_override().is_none());
    assert!(Emoji::new(FLAG_NORWAY).unicode_name_override().is_some());
}

#[test]
fn subdivision_flag_override() {
    let emoji = Emoji::new(FLAG_ENGLAND);
    assert_eq!(emoji.region_code().as_deref(), Some("GB-ENG"));
    assert_eq!(emoji.unicode_name(), "Flag - England");
}

#[test]
fn unknown_region_falls_back_to_generic_name() {
    // QQ is not an assigned region
    let emoji = Emoji::new("\u{1F1F6}\u{1F1F6}");
    assert!(emoji.is_flag());
    assert!(emoji.unicode_name_override().is_none());
    assert_eq!(emoji.unicode_name(), "Regional Indicator QQ");
}

#[test]
fn keycap_name_drops_markup() {
    let emoji = Emoji::new("1\u{FE0F}\u{20E3}");
    assert_eq!(emoji.unicode_name(), "Digit One");
}

#[test]
fn skin_tone_is_appended() {
    let emoji = Emoji::new("\u{1F44B}\u{1F3FD}");
    assert_eq!(emoji.skin_tone(), Some(SkinTone::Medium));
    assert_eq!(emoji.unicode_name(), "Waving Hand Sign, Medium Skin Tone");
    assert_eq!(emoji.without_skin_tone().unicode_name(), "Waving Hand Sign");
}

#[test]
fn mixed_skin_tones_are_all_named() {
    let light_dark = Emoji::new("\u{1F9D1}\u{1F3FB}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}");
    let dark_dark = Emoji::new("\u{1F9D1}\u{1F3FF}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}");
    assert_eq!(
        light_dark.unicode_name(),
        "Adult Handshake Adult, Light Skin Tone, Dark Skin Tone"
    );
    assert_eq!(dark_dark.unicode_name(), "Adult Handshake Adult, Dark Skin Tone");
    assert_ne!(light_dark.unicode_name(), dark_dark.unicode_name());
}

#[test]
fn every_table_flag_resolves_to_override() {
    for code in ["us", "gb", "jp", "de", "br", "za", "eu", "un"] {
        let flag = Emoji::flag(code).unwrap();
        let name = flag.unicode_name();
        assert!(name.starts_with("Flag - "), "{} resolved to {}", code, name);
    }
}

#[test]
fn resolution_is_repeatable() {
    for text in [GRINNING_FACE, RING, FLAG_KENYA, FLAG_ENGLAND] {
        let emoji = Emoji::new(text);
        assert_eq!(emoji.resolve(), emoji.resolve());
        assert_eq!(emoji.unicode_name(), emoji.unicode_name());
    }
}
