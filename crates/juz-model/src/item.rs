//! Quiz item shapes and the juz document envelope.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::verse::VerseReference;

/// Top-level juz file: an opaque `juz` marker plus the quiz items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JuzDocument<T> {
    /// Copied through untouched; `null` when the source omits it.
    #[serde(default)]
    pub juz: Value,
    pub items: Vec<T>,
}

impl<T> JuzDocument<T> {
    pub fn new(juz: Value, items: Vec<T>) -> Self {
        Self { juz, items }
    }
}

/// A quiz item in the hand-written source shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceItem {
    #[serde(rename = "qNum", default)]
    pub q_num: Value,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub question_ar: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub question_en: String,
    pub answer: SourceAnswer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceAnswer {
    /// Arabic surah name as typed by the author.
    pub surah: String,
    pub ayah: VerseReference,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub ayah_ar: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub commentary_ar: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub commentary_en: String,
}

/// A quiz item in the normalized shape.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem {
    #[serde(rename = "qNum")]
    pub q_num: Value,
    pub question_ar: String,
    pub question_en: String,
    pub answer: NormalizedAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAnswer {
    /// Canonical surah number, 1 to 114.
    pub surah: u16,
    pub ayahs: Vec<u32>,
    pub ayah_ar: String,
    pub commentary_ar: String,
    pub commentary_en: String,
}

/// Missing and `null` text fields both become an empty string.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
