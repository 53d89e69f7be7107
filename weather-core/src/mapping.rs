//! Pure mapping helpers: condition classification, description translation
//! and search-key normalization.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::model::Category;

/// English descriptions and their Vietnamese counterparts. Keys are lowercase.
const TRANSLATIONS: &[(&str, &str)] = &[
    ("clear sky", "trời quang"),
    ("few clouds", "ít mây"),
    ("scattered clouds", "mây rải rác"),
    ("broken clouds", "nhiều mây"),
    ("overcast clouds", "u ám"),
    ("light rain", "mưa nhỏ"),
    ("moderate rain", "mưa vừa"),
    ("heavy rain", "mưa to"),
    ("thunderstorm", "dông bão"),
    ("snow", "tuyết"),
    ("mist", "sương mù"),
    ("fog", "sương mù dày"),
];

/// Classify an upstream weather code into a [`Category`].
///
/// Only `code` takes part in the decision; `_main` is the provider's textual
/// group ("Rain", "Clouds", ...) and is accepted for call-site symmetry.
/// Codes outside the provider's 2xx..8xx groups fall back to sunny, so only
/// 801..=899 count as cloudy and 900 and above are sunny.
pub fn classify_condition(_main: &str, code: i64) -> Category {
    match code {
        200..=299 => Category::Stormy,
        300..=599 => Category::Rainy,
        600..=699 => Category::Snowy,
        700..=799 => Category::Cloudy,
        800 => Category::Sunny,
        801..=899 => Category::Cloudy,
        _ => Category::Sunny,
    }
}

/// Translate a provider description, case-insensitively.
///
/// Unknown descriptions are returned unchanged.
pub fn translate(description: &str) -> String {
    let key = description.to_lowercase();
    TRANSLATIONS
        .iter()
        .find(|(en, _)| *en == key)
        .map(|(_, vi)| (*vi).to_string())
        .unwrap_or_else(|| description.to_string())
}

/// Remove accents so that "Đà Nẵng" becomes "Da Nang".
///
/// Anything that is not an ASCII letter, digit or whitespace after
/// decomposition is dropped, and whitespace runs collapse to one space.
pub fn strip_diacritics(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key used for the upstream `q=` parameter and for alias comparison.
pub fn search_key(city: &str) -> String {
    strip_diacritics(city).to_lowercase()
}
