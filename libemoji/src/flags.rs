// libkeyset/libemoji/src/flags.rs
//
// Flag emoji: detection, region codes and the curated display names used to
// override the generic Unicode name.
//
// Country flags are pairs of regional indicator symbols (U+1F1E6..U+1F1FF),
// one per letter of the ISO 3166-1 code. Subdivision flags (England,
// Scotland, Wales) are a waving black flag followed by tag letters spelling
// the ISO 3166-2 code and a CANCEL TAG.

use phf::phf_map;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
const REGIONAL_INDICATOR_Z: u32 = 0x1F1FF;
const WAVING_BLACK_FLAG: char = '\u{1F3F4}';
const TAG_BASE: u32 = 0xE0000;
const CANCEL_TAG: char = '\u{E007F}';

/// Prefix of every flag display name.
pub const FLAG_PREFIX: &str = "Flag - ";

/// Region names keyed by lowercase region code.
///
/// Subdivision codes are stored without the separator (`gbeng`).
static REGION_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "ac" => "Ascension Island",
    "ad" => "Andorra",
    "ae" => "United Arab Emirates",
    "af" => "Afghanistan",
    "ag" => "Antigua & Barbuda",
    "ai" => "Anguilla",
    "al" => "Albania",
    "am" => "Armenia",
    "ao" => "Angola",
    "aq" => "Antarctica",
    "ar" => "Argentina",
    "as" => "American Samoa",
    "at" => "Austria",
    "au" => "Australia",
    "aw" => "Aruba",
    "ax" => "Åland Islands",
    "az" => "Azerbaijan",
    "ba" => "Bosnia & Herzegovina",
    "bb" => "Barbados",
    "bd" => "Bangladesh",
    "be" => "Belgium",
    "bf" => "Burkina Faso",
    "bg" => "Bulgaria",
    "bh" => "Bahrain",
    "bi" => "Burundi",
    "bj" => "Benin",
    "bl" => "St. Barthélemy",
    "bm" => "Bermuda",
    "bn" => "Brunei",
    "bo" => "Bolivia",
    "bq" => "Caribbean Netherlands",
    "br" => "Brazil",
    "bs" => "Bahamas",
    "bt" => "Bhutan",
    "bv" => "Bouvet Island",
    "bw" => "Botswana",
    "by" => "Belarus",
    "bz" => "Belize",
    "ca" => "Canada",
    "cc" => "Cocos (Keeling) Islands",
    "cd" => "Congo - Kinshasa",
    "cf" => "Central African Republic",
    "cg" => "Congo - Brazzaville",
    "ch" => "Switzerland",
    "ci" => "Côte d’Ivoire",
    "ck" => "Cook Islands",
    "cl" => "Chile",
    "cm" => "Cameroon",
    "cn" => "China",
    "co" => "Colombia",
    "cp" => "Clipperton Island",
    "cr" => "Costa Rica",
    "cu" => "Cuba",
    "cv" => "Cape Verde",
    "cw" => "Curaçao",
    "cx" => "Christmas Island",
    "cy" => "Cyprus",
    "cz" => "Czechia",
    "de" => "Germany",
    "dg" => "Diego Garcia",
    "dj" => "Djibouti",
    "dk" => "Denmark",
    "dm" => "Dominica",
    "do" => "Dominican Republic",
    "dz" => "Algeria",
    "ea" => "Ceuta & Melilla",
    "ec" => "Ecuador",
    "ee" => "Estonia",
    "eg" => "Egypt",
    "eh" => "Western Sahara",
    "er" => "Eritrea",
    "es" => "Spain",
    "et" => "Ethiopia",
    "eu" => "European Union",
    "fi" => "Finland",
    "fj" => "Fiji",
    "fk" => "Falkland Islands",
    "fm" => "Micronesia",
    "fo" => "Faroe Islands",
    "fr" => "France",
    "ga" => "Gabon",
    "gb" => "United Kingdom",
    "gd" => "Grenada",
    "ge" => "Georgia",
    "gf" => "French Guiana",
    "gg" => "Guernsey",
    "gh" => "Ghana",
    "gi" => "Gibraltar",
    "gl" => "Greenland",
    "gm" => "Gambia",
    "gn" => "Guinea",
    "gp" => "Guadeloupe",
    "gq" => "Equatorial Guinea",
    "gr" => "Greece",
    "gs" => "South Georgia & South Sandwich Islands",
    "gt" => "Guatemala",
    "gu" => "Guam",
    "gw" => "Guinea-Bissau",
    "gy" => "Guyana",
    "hk" => "Hong Kong SAR China",
    "hm" => "Heard & McDonald Islands",
    "hn" => "Honduras",
    "hr" => "Croatia",
    "ht" => "Haiti",
    "hu" => "Hungary",
    "ic" => "Canary Islands",
    "id" => "Indonesia",
    "ie" => "Ireland",
    "il" => "Israel",
    "im" => "Isle of Man",
    "in" => "India",
    "io" => "British Indian Ocean Territory",
    "iq" => "Iraq",
    "ir" => "Iran",
    "is" => "Iceland",
    "it" => "Italy",
    "je" => "Jersey",
    "jm" => "Jamaica",
    "jo" => "Jordan",
    "jp" => "Japan",
    "ke" => "Kenya",
    "kg" => "Kyrgyzstan",
    "kh" => "Cambodia",
    "ki" => "Kiribati",
    "km" => "Comoros",
    "kn" => "St. Kitts & Nevis",
    "kp" => "North Korea",
    "kr" => "South Korea",
    "kw" => "Kuwait",
    "ky" => "Cayman Islands",
    "kz" => "Kazakhstan",
    "la" => "Laos",
    "lb" => "Lebanon",
    "lc" => "St. Lucia",
    "li" => "Liechtenstein",
    "lk" => "Sri Lanka",
    "lr" => "Liberia",
    "ls" => "Lesotho",
    "lt" => "Lithuania",
    "lu" => "Luxembourg",
    "lv" => "Latvia",
    "ly" => "Libya",
    "ma" => "Morocco",
    "mc" => "Monaco",
    "md" => "Moldova",
    "me" => "Montenegro",
    "mf" => "St. Martin",
    "mg" => "Madagascar",
    "mh" => "Marshall Islands",
    "mk" => "North Macedonia",
    "ml" => "Mali",
    "mm" => "Myanmar (Burma)",
    "mn" => "Mongolia",
    "mo" => "Macao SAR China",
    "mp" => "Northern Mariana Islands",
    "mq" => "Martinique",
    "mr" => "Mauritania",
    "ms" => "Montserrat",
    "mt" => "Malta",
    "mu" => "Mauritius",
    "mv" => "Maldives",
    "mw" => "Malawi",
    "mx" => "Mexico",
    "my" => "Malaysia",
    "mz" => "Mozambique",
    "na" => "Namibia",
    "nc" => "New Caledonia",
    "ne" => "Niger",
    "nf" => "Norfolk Island",
    "ng" => "Nigeria",
    "ni" => "Nicaragua",
    "nl" => "Netherlands",
    "no" => "Norway",
    "np" => "Nepal",
    "nr" => "Nauru",
    "nu" => "Niue",
    "nz" => "New Zealand",
    "om" => "Oman",
    "pa" => "Panama",
    "pe" => "Peru",
    "pf" => "French Polynesia",
    "pg" => "Papua New Guinea",
    "ph" => "Philippines",
    "pk" => "Pakistan",
    "pl" => "Poland",
    "pm" => "St. Pierre & Miquelon",
    "pn" => "Pitcairn Islands",
    "pr" => "Puerto Rico",
    "ps" => "Palestinian Territories",
    "pt" => "Portugal",
    "pw" => "Palau",
    "py" => "Paraguay",
    "qa" => "Qatar",
    "re" => "Réunion",
    "ro" => "Romania",
    "rs" => "Serbia",
    "ru" => "Russia",
    "rw" => "Rwanda",
    "sa" => "Saudi Arabia",
    "sb" => "Solomon Islands",
    "sc" => "Seychelles",
    "sd" => "Sudan",
    "se" => "Sweden",
    "sg" => "Singapore",
    "sh" => "St. Helena",
    "si" => "Slovenia",
    "sj" => "Svalbard & Jan Mayen",
    "sk" => "Slovakia",
    "sl" => "Sierra Leone",
    "sm" => "San Marino",
    "sn" => "Senegal",
    "so" => "Somalia",
    "sr" => "Suriname",
    "ss" => "South Sudan",
    "st" => "São Tomé & Príncipe",
    "sv" => "El Salvador",
    "sx" => "Sint Maarten",
    "sy" => "Syria",
    "sz" => "Eswatini",
    "ta" => "Tristan da Cunha",
    "tc" => "Turks & Caicos Islands",
    "td" => "Chad",
    "tf" => "French Southern Territories",
    "tg" => "Togo",
    "th" => "Thailand",
    "tj" => "Tajikistan",
    "tk" => "Tokelau",
    "tl" => "Timor-Leste",
    "tm" => "Turkmenistan",
    "tn" => "Tunisia",
    "to" => "Tonga",
    "tr" => "Turkey",
    "tt" => "Trinidad & Tobago",
    "tv" => "Tuvalu",
    "tw" => "Taiwan",
    "tz" => "Tanzania",
    "ua" => "Ukraine",
    "ug" => "Uganda",
    "um" => "U.S. Outlying Islands",
    "un" => "United Nations",
    "us" => "United States",
    "uy" => "Uruguay",
    "uz" => "Uzbekistan",
    "va" => "Vatican City",
    "vc" => "St. Vincent & Grenadines",
    "ve" => "Venezuela",
    "vg" => "British Virgin Islands",
    "vi" => "U.S. Virgin Islands",
    "vn" => "Vietnam",
    "vu" => "Vanuatu",
    "wf" => "Wallis & Futuna",
    "ws" => "Samoa",
    "xk" => "Kosovo",
    "ye" => "Yemen",
    "yt" => "Mayotte",
    "za" => "South Africa",
    "zm" => "Zambia",
    "zw" => "Zimbabwe",
    "gbeng" => "England",
    "gbsct" => "Scotland",
    "gbwls" => "Wales",
};

/// Normalize a region code for table lookup: lowercase, separators removed.
pub fn normalize_region_code(code: &str) -> String {
    code.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Name of the country or region for `code` (`KE`, `ke`, `GB-ENG`).
///
/// ```
/// use libkeyset_emoji::flags::country_name;
///
/// assert_eq!(country_name("KE"), Some("Kenya"));
/// assert_eq!(country_name("gb-sct"), Some("Scotland"));
/// assert_eq!(country_name("QQ"), None);
/// ```
pub fn country_name(code: &str) -> Option<&'static str> {
    REGION_NAMES.get(normalize_region_code(code).as_str()).copied()
}

/// Display name override for the flag with region `code`.
pub fn flag_name(code: &str) -> Option<String> {
    let name = country_name(code);
    if name.is_none() {
        tracing::debug!(region = code, "no flag name override");
    }
    name.map(|n| format!("{FLAG_PREFIX}{n}"))
}

/// Number of regions in the override table.
pub fn region_count() -> usize {
    REGION_NAMES.len()
}

/// Region code spelled by a flag emoji, uppercase.
///
/// Returns `KE` for a regional indicator pair and `GB-ENG` style codes for
/// subdivision tag sequences. Anything else is not a flag.
pub fn region_code(text: &str) -> Option<String> {
    regional_indicator_code(text).or_else(|| subdivision_code(text))
}

/// Whether `text` is a flag emoji.
pub fn is_flag(text: &str) -> bool {
    region_code(text).is_some()
}

/// Build the flag emoji for a two-letter country code.
///
/// ```
/// use libkeyset_emoji::flags::flag_for;
///
/// assert_eq!(flag_for("no").as_deref(), Some("\u{1F1F3}\u{1F1F4}"));
/// assert_eq!(flag_for("nor"), None);
/// ```
pub fn flag_for(code: &str) -> Option<String> {
    let letters: Vec<char> = code.chars().collect();
    if letters.len() != 2 || !letters.iter().all(char::is_ascii_alphabetic) {
        return None;
    }
    letters
        .iter()
        .map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}

/// Letter for a regional indicator symbol, if `c` is one.
pub fn regional_indicator_letter(c: char) -> Option<char> {
    let cp = c as u32;
    if (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z).contains(&cp) {
        char::from_u32('A' as u32 + (cp - REGIONAL_INDICATOR_A))
    } else {
        None
    }
}

fn regional_indicator_code(text: &str) -> Option<String> {
    let letters: Vec<char> = text
        .chars()
        .map(regional_indicator_letter)
        .collect::<Option<_>>()?;
    (letters.len() == 2).then(|| letters.into_iter().collect())
}

fn subdivision_code(text: &str) -> Option<String> {
    let mut chars = text.chars();
    if chars.next()? != WAVING_BLACK_FLAG {
        return None;
    }
    let mut tags = String::new();
    for c in chars.by_ref() {
        if c == CANCEL_TAG {
            break;
        }
        let ascii = char::from_u32((c as u32).checked_sub(TAG_BASE)?)?;
        if !ascii.is_ascii_alphanumeric() {
            return None;
        }
        tags.push(ascii.to_ascii_uppercase());
    }
    // Terminated by CANCEL TAG with nothing after it, country part + subdivision
    if chars.next().is_some() || tags.len() < 3 || !text.ends_with(CANCEL_TAG) {
        return None;
    }
    Some(format!("{}-{}", &tags[..2], &tags[2..]))
}
