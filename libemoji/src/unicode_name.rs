//! Unicode identifiers and display names.
//!
//! The identifier spells out the canonical name of every scalar in
//! `\N{NAME}` form, e.g. `\N{GRINNING FACE}`. The display name is derived
//! from the identifier:
//!
//! 1. Split the identifier into its `\N{...}` segments.
//! 2. Drop segments that only shape the presentation: variation selectors,
//!    zero width joiners, the enclosing keycap and tag characters.
//! 3. Pull skin tone modifiers out and append them as `, <Tone> Skin Tone`,
//!    one per modifier in order, or once when every modifier is the same.
//! 4. Collapse regional indicator letters into `Regional Indicator XY`.
//! 5. Drop trailing bracketed qualifiers and title-case what is left.

use crate::skin_tone::SkinTone;
use libkeyset_core::utils::title_case;

const REGIONAL_INDICATOR_PREFIX: &str = "REGIONAL INDICATOR SYMBOL LETTER ";

/// Canonical Unicode name of a scalar, or `U+XXXX` when the character
/// database has none.
pub fn scalar_name(c: char) -> String {
    match unicode_names2::name(c) {
        Some(name) => name.to_string(),
        None => {
            tracing::trace!(scalar = %format!("U+{:04X}", c as u32), "scalar has no unicode name");
            format!("U+{:04X}", c as u32)
        }
    }
}

/// Raw identifier for `text`: `\N{NAME}` per scalar, concatenated.
///
/// ```
/// use libkeyset_emoji::unicode_name::identifier;
///
/// assert_eq!(identifier("\u{1F600}"), "\\N{GRINNING FACE}");
/// ```
pub fn identifier(text: &str) -> String {
    text.chars()
        .map(|c| format!("\\N{{{}}}", scalar_name(c)))
        .collect()
}

/// Names inside the `\N{...}` segments of an identifier.
pub fn segments(identifier: &str) -> Vec<&str> {
    identifier
        .split("\\N{")
        .filter_map(|s| s.strip_suffix('}'))
        .collect()
}

/// Human-readable name derived from an identifier.
///
/// ```
/// use libkeyset_emoji::unicode_name::display_name;
///
/// assert_eq!(display_name("\\N{GRINNING FACE}"), "Grinning Face");
/// assert_eq!(display_name("\\N{RING}"), "Ring");
/// ```
pub fn display_name(identifier: &str) -> String {
    let segments = segments(identifier);

    let mut parts: Vec<String> = Vec::new();
    let mut regional = String::new();
    let mut tones: Vec<SkinTone> = Vec::new();

    for segment in &segments {
        if is_markup(segment) {
            continue;
        }
        if let Some(t) = SkinTone::from_modifier_name(segment) {
            tones.push(t);
            continue;
        }
        if let Some(letter) = segment.strip_prefix(REGIONAL_INDICATOR_PREFIX) {
            if regional.is_empty() {
                // Placeholder keeps the indicator run where it started
                parts.push(String::new());
            }
            regional.push_str(letter);
            continue;
        }
        parts.push(clean_segment(segment));
    }

    if !regional.is_empty() {
        if let Some(slot) = parts.iter_mut().find(|p| p.is_empty()) {
            *slot = format!("Regional Indicator {regional}");
        }
    }
    parts.retain(|p| !p.is_empty());

    if parts.is_empty() {
        // Only markup (e.g. a lone variation selector): keep every segment
        let all: Vec<String> = segments.iter().map(|s| clean_segment(s)).collect();
        return all.join(" ");
    }

    let mut name = parts.join(" ");
    if tones.windows(2).all(|w| w[0] == w[1]) {
        tones.truncate(1);
    }
    for tone in tones {
        name.push_str(&format!(", {tone}"));
    }
    name
}

/// Segments that carry no description of their own.
fn is_markup(segment: &str) -> bool {
    segment.starts_with("VARIATION SELECTOR")
        || segment.starts_with("TAG ")
        || matches!(
            segment,
            "ZERO WIDTH JOINER" | "COMBINING ENCLOSING KEYCAP" | "CANCEL TAG"
        )
}

/// Drop a trailing `(...)` qualifier and title-case the rest.
/// Code point placeholders are kept verbatim.
fn clean_segment(segment: &str) -> String {
    if segment.starts_with("U+") {
        return segment.to_string();
    }
    let core = match segment.rfind(" (") {
        Some(i) if segment.ends_with(')') => segment[..i].trim_end(),
        _ => segment,
    };
    title_case(core)
}
