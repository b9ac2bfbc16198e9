//! Tests for juz-model types.

use juz_model::{
    BatchOptions, ConvertOptions, FailurePolicy, JuzDocument, NormalizedAnswer, NormalizedItem,
    SourceItem, StampOptions, VerseReference,
};
use serde_json::{Value, json};

#[test]
fn source_item_defaults_missing_and_null_text() {
    let item: SourceItem = serde_json::from_value(json!({
        "qNum": 3,
        "question_ar": null,
        "answer": { "surah": "يونس", "ayah": "84-85" }
    }))
    .expect("decode source item");

    assert_eq!(item.q_num, json!(3));
    assert_eq!(item.question_ar, "");
    assert_eq!(item.question_en, "");
    assert_eq!(item.answer.surah, "يونس");
    assert_eq!(item.answer.ayah, VerseReference::Text("84-85".to_string()));
    assert_eq!(item.answer.ayah_ar, "");
    assert_eq!(item.answer.commentary_en, "");
}

#[test]
fn source_item_without_qnum_keeps_null() {
    let item: SourceItem = serde_json::from_value(json!({
        "answer": { "surah": "هود", "ayah": 5 }
    }))
    .expect("decode source item");
    assert_eq!(item.q_num, Value::Null);
}

#[test]
fn non_string_text_fields_are_rejected() {
    for field in ["ayah_ar", "commentary_ar", "commentary_en"] {
        let mut answer = json!({ "surah": "هود", "ayah": 5 });
        answer[field] = json!(42);
        let result = serde_json::from_value::<SourceItem>(json!({ "answer": answer }));
        assert!(result.is_err(), "{field} accepted a number");
    }
}

#[test]
fn normalized_shape_does_not_decode_as_source() {
    let normalized = json!({
        "qNum": 1,
        "question_ar": "",
        "question_en": "",
        "answer": {
            "surah": 10,
            "ayahs": [84, 85],
            "ayah_ar": "",
            "commentary_ar": "",
            "commentary_en": ""
        }
    });
    assert!(serde_json::from_value::<SourceItem>(normalized).is_err());
}

#[test]
fn normalized_item_serializes_in_documented_order() {
    let document = JuzDocument::new(
        json!(11),
        vec![NormalizedItem {
            q_num: json!(1),
            question_ar: "س".to_string(),
            question_en: "Q".to_string(),
            answer: NormalizedAnswer {
                surah: 10,
                ayahs: vec![84, 85],
                ayah_ar: "آية".to_string(),
                commentary_ar: String::new(),
                commentary_en: String::new(),
            },
        }],
    );

    let text = serde_json::to_string(&document).expect("serialize");
    assert_eq!(
        text,
        r#"{"juz":11,"items":[{"qNum":1,"question_ar":"س","question_en":"Q","answer":{"surah":10,"ayahs":[84,85],"ayah_ar":"آية","commentary_ar":"","commentary_en":""}}]}"#
    );
}

#[test]
fn document_without_juz_decodes_to_null() {
    let document: JuzDocument<Value> =
        serde_json::from_value(json!({ "items": [] })).expect("decode document");
    assert_eq!(document.juz, Value::Null);
    assert!(document.items.is_empty());
}

#[test]
fn option_defaults() {
    let convert = ConvertOptions::new("out");
    assert_eq!(convert.batch.pattern, "juz-*.json");
    assert_eq!(convert.failure_policy, FailurePolicy::AbortBatch);

    let stamp = StampOptions::default();
    assert_eq!(stamp.keys, vec!["difficulty", "theme"]);
    let stamp = stamp.with_keys(Vec::new());
    assert_eq!(stamp.keys.len(), 2);

    let batch = BatchOptions::new().with_recursive(true).with_dry_run(true);
    assert_eq!(batch.pattern, "*.json");
    assert!(batch.recursive);
    assert!(batch.dry_run);
}
