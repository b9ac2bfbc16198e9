//! Arabic surah name normalization.
//!
//! Produces the lookup key used to match hand-typed surah names against the
//! canonical catalog:
//! - Remove tatweel
//! - Remove all whitespace
//! - Remove short-vowel diacritics and the superscript alef
//! - Fold hamza/madda alef forms to plain alef

use std::fmt;

/// Arabic elongation character (ـ).
const TATWEEL: char = '\u{0640}';

/// Combining marks dropped from names.
const HARAKAT: [char; 9] = [
    '\u{064B}', // Fathatan
    '\u{064C}', // Dammatan
    '\u{064D}', // Kasratan
    '\u{064E}', // Fatha
    '\u{064F}', // Damma
    '\u{0650}', // Kasra
    '\u{0651}', // Shadda
    '\u{0652}', // Sukun
    '\u{0670}', // Superscript alef
];

const ALEF: char = '\u{0627}';

const ALEF_VARIANTS: [char; 3] = [
    '\u{0623}', // Alef with hamza above (أ)
    '\u{0625}', // Alef with hamza below (إ)
    '\u{0622}', // Alef with madda (آ)
];

/// Canonical comparison form of a surah name.
///
/// Only [`normalize`] constructs one, so two values are equal exactly when
/// their raw names refer to the same surah spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize a raw surah name into its lookup key.
///
/// Total and idempotent: any string is accepted and normalizing twice gives
/// the same key.
pub fn normalize(raw: &str) -> NormalizedName {
    let key = raw
        .chars()
        .filter(|&c| c != TATWEEL && !c.is_whitespace() && !HARAKAT.contains(&c))
        .map(|c| if ALEF_VARIANTS.contains(&c) { ALEF } else { c })
        .collect();
    NormalizedName(key)
}
