//! Source-shape to normalized-shape conversion.

use std::path::Path;

use juz_model::{JuzDocument, NormalizedAnswer, NormalizedItem, SourceItem};
use serde_json::Value;
use tracing::{debug, trace};

use crate::ayah::parse_ayahs;
use crate::error::{ConvertError, RecordError};
use crate::surah::SurahLookup;

/// Convert one source item.
///
/// An unresolvable surah name is an error, never a default.
pub fn convert_item(lookup: &SurahLookup, item: SourceItem) -> Result<NormalizedItem, RecordError> {
    let SourceItem {
        q_num,
        question_ar,
        question_en,
        answer,
    } = item;

    let surah = lookup
        .lookup(&answer.surah)
        .ok_or_else(|| RecordError::UnknownSurah {
            surah: answer.surah.clone(),
        })?;
    let ayahs = parse_ayahs(&answer.ayah)?;
    trace!(surah, ayahs = ?ayahs, "converted item");

    Ok(NormalizedItem {
        q_num,
        question_ar,
        question_en,
        answer: NormalizedAnswer {
            surah,
            ayahs,
            ayah_ar: answer.ayah_ar,
            commentary_ar: answer.commentary_ar,
            commentary_en: answer.commentary_en,
        },
    })
}

/// Convert a parsed juz document read from `file`.
///
/// Stops at the first failing item; `file` only labels errors.
pub fn convert_document(
    lookup: &SurahLookup,
    file: &Path,
    document: Value,
) -> Result<JuzDocument<NormalizedItem>, ConvertError> {
    let JuzDocument { juz, items } = serde_json::from_value::<JuzDocument<Value>>(document)
        .map_err(|source| ConvertError::InvalidDocument {
            file: file.to_path_buf(),
            source,
        })?;

    let mut converted = Vec::with_capacity(items.len());
    for (index, raw) in items.into_iter().enumerate() {
        let item = serde_json::from_value::<SourceItem>(raw).map_err(|source| {
            ConvertError::InvalidItem {
                file: file.to_path_buf(),
                index,
                source,
            }
        })?;
        let normalized = convert_item(lookup, item).map_err(|source| ConvertError::Record {
            file: file.to_path_buf(),
            index,
            source,
        })?;
        converted.push(normalized);
    }
    debug!(file = %file.display(), items = converted.len(), "converted document");

    Ok(JuzDocument::new(juz, converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use juz_model::{SourceAnswer, VerseReference};
    use serde_json::json;

    fn item(surah: &str, ayah: VerseReference) -> SourceItem {
        SourceItem {
            q_num: json!(1),
            question_ar: "سؤال".to_string(),
            question_en: "Question".to_string(),
            answer: SourceAnswer {
                surah: surah.to_string(),
                ayah,
                ayah_ar: "نص".to_string(),
                commentary_ar: String::new(),
                commentary_en: "note".to_string(),
            },
        }
    }

    #[test]
    fn resolves_surah_and_ayahs() {
        let lookup = SurahLookup::canonical();
        let converted = convert_item(&lookup, item("يُونُس", "84–85".into())).unwrap();
        assert_eq!(converted.answer.surah, 10);
        assert_eq!(converted.answer.ayahs, vec![84, 85]);
        assert_eq!(converted.answer.ayah_ar, "نص");
        assert_eq!(converted.answer.commentary_en, "note");
        assert_eq!(converted.question_en, "Question");
    }

    #[test]
    fn unknown_surah_is_an_error() {
        let lookup = SurahLookup::canonical();
        let error = convert_item(&lookup, item("يونسس", VerseReference::Integer(3))).unwrap_err();
        assert_eq!(
            error,
            RecordError::UnknownSurah {
                surah: "يونسس".to_string()
            }
        );
    }
}
