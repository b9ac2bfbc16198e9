//! Integration tests for the batch commands.

use std::fs;
use std::path::Path;

use juz_cli::commands::{convert_dir, stamp_dir, transform_dir};
use juz_cli::types::FileStatus;
use juz_model::{BatchOptions, ConvertOptions, FailurePolicy, StampOptions, TransformOptions};
use juz_normalize::{CharTransform, FieldPath, SurahLookup};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn source_juz(juz: u32, surah: &str, ayah: Value) -> Value {
    json!({
        "juz": juz,
        "items": [{
            "qNum": 1,
            "question_ar": "سؤال",
            "question_en": "Question",
            "answer": {
                "surah": surah,
                "ayah": ayah,
                "ayah_ar": "﴿نص﴾",
                "commentary_en": "See ﴾note﴿"
            }
        }]
    })
}

#[test]
fn convert_writes_normalized_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("data_v2");
    write(&input.join("juz-01.json"), &source_juz(1, "الفاتحة", json!("1-3")));
    write(&input.join("juz-11.json"), &source_juz(11, "يونس", json!(84)));
    write(&input.join("notes.json"), &json!({ "ignored": true }));
    fs::write(input.join("juz-99.json"), "{ not json").unwrap();

    let options = ConvertOptions::new(&output);
    let result = convert_dir(&input, &options, &SurahLookup::canonical()).unwrap();

    assert_eq!(result.scanned(), 3);
    assert_eq!(result.changed(), 2);
    assert_eq!(result.skipped(), 1);
    assert!(!result.has_errors());

    let converted = read(&output.join("juz-11.json"));
    assert_eq!(converted["juz"], 11);
    assert_eq!(converted["items"][0]["answer"]["surah"], 10);
    assert_eq!(converted["items"][0]["answer"]["ayahs"], json!([84]));
    assert_eq!(converted["items"][0]["answer"]["commentary_ar"], "");
    let first = read(&output.join("juz-01.json"));
    assert_eq!(first["items"][0]["answer"]["ayahs"], json!([1, 2, 3]));
    assert!(!output.join("juz-99.json").exists());

    let text = fs::read_to_string(output.join("juz-11.json")).unwrap();
    assert!(text.contains("\"question_ar\": \"سؤال\""));
    assert!(text.ends_with("}\n"));
}

#[test]
fn unknown_surah_aborts_the_whole_run() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("out");
    write(&input.join("juz-01.json"), &source_juz(1, "الفاتحة", json!(1)));
    write(&input.join("juz-02.json"), &source_juz(2, "البقرةة", json!(5)));
    write(&input.join("juz-03.json"), &source_juz(3, "البقرة", json!(255)));

    let options = ConvertOptions::new(&output);
    let result = convert_dir(&input, &options, &SurahLookup::canonical()).unwrap();

    assert!(result.aborted);
    assert!(result.has_errors());
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].status, FileStatus::NotWritten);
    match &result.files[1].status {
        FileStatus::Failed(message) => {
            assert!(message.contains("البقرةة"));
            assert!(message.contains("juz-02.json"));
        }
        other => panic!("unexpected status: {other}"),
    }
    assert!(!output.exists());
}

#[test]
fn keep_going_writes_the_convertible_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("out");
    write(&input.join("juz-01.json"), &source_juz(1, "الفاتحة", json!(1)));
    write(&input.join("juz-02.json"), &source_juz(2, "البقرةة", json!(5)));
    write(&input.join("juz-03.json"), &source_juz(3, "البقرة", json!(255)));

    let options = ConvertOptions::new(&output).with_failure_policy(FailurePolicy::SkipFile);
    let result = convert_dir(&input, &options, &SurahLookup::canonical()).unwrap();

    assert!(!result.aborted);
    assert_eq!(result.failed(), 1);
    assert!(result.has_errors());
    assert!(output.join("juz-01.json").exists());
    assert!(!output.join("juz-02.json").exists());
    assert_eq!(read(&output.join("juz-03.json"))["items"][0]["answer"]["surah"], 2);
}

#[test]
fn oversized_verse_range_is_reported_per_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("out");
    write(&input.join("juz-01.json"), &source_juz(1, "الفاتحة", json!("1-4000000000")));
    write(&input.join("juz-03.json"), &source_juz(3, "البقرة", json!("255-256")));

    let options = ConvertOptions::new(&output).with_failure_policy(FailurePolicy::SkipFile);
    let result = convert_dir(&input, &options, &SurahLookup::canonical()).unwrap();

    assert_eq!(result.failed(), 1);
    match &result.files[0].status {
        FileStatus::Failed(message) => assert!(message.contains("1-4000000000")),
        other => panic!("unexpected status: {other}"),
    }
    assert!(!output.join("juz-01.json").exists());
    assert_eq!(
        read(&output.join("juz-03.json"))["items"][0]["answer"]["ayahs"],
        json!([255, 256])
    );
}

#[test]
fn convert_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data");
    let output = dir.path().join("out");
    write(&input.join("juz-01.json"), &source_juz(1, "الفاتحة", json!(1)));

    let batch = BatchOptions::new()
        .with_pattern("juz-*.json")
        .with_dry_run(true);
    let options = ConvertOptions::new(&output).with_batch(batch);
    let result = convert_dir(&input, &options, &SurahLookup::canonical()).unwrap();

    assert_eq!(result.changed(), 1);
    assert!(!output.exists());
}

#[test]
fn stamp_adds_keys_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("juz-01.json");
    write(
        &path,
        &json!({ "juz": 1, "items": [{ "qNum": 1 }, { "qNum": 2, "theme": "mercy" }] }),
    );

    let options = StampOptions::default();
    let first = stamp_dir(dir.path(), &options).unwrap();
    assert_eq!(first.files[0].status, FileStatus::Updated);
    assert_eq!(first.total_changes(), 3);

    let stamped = read(&path);
    assert_eq!(stamped["items"][0]["difficulty"], "");
    assert_eq!(stamped["items"][1]["theme"], "mercy");

    let second = stamp_dir(dir.path(), &options).unwrap();
    assert_eq!(second.files[0].status, FileStatus::Unchanged);
    assert_eq!(second.changed(), 0);
}

#[test]
fn swap_backs_up_only_changed_files() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    let backups = dir.path().join("data_backup");
    let changed = data.join("juz-01.json");
    let untouched = data.join("juz-02.json");
    write(&changed, &source_juz(1, "الفاتحة", json!(1)));
    write(
        &untouched,
        &json!({ "juz": 2, "items": [{ "answer": { "commentary_en": "plain" } }] }),
    );
    let original = fs::read_to_string(&changed).unwrap();

    let options = TransformOptions::default().with_backup_dir(Some(backups.clone()));
    let field = FieldPath::parse("answer.commentary_en").unwrap();
    let result = transform_dir(
        "swap-brackets",
        &data,
        &field,
        &CharTransform::ornate_bracket_swap(),
        &options,
    )
    .unwrap();

    assert_eq!(result.changed(), 1);
    assert_eq!(result.total_changes(), 2);
    assert_eq!(fs::read_to_string(backups.join("juz-01.json")).unwrap(), original);
    assert!(!backups.join("juz-02.json").exists());

    let swapped = read(&changed);
    assert_eq!(swapped["items"][0]["answer"]["commentary_en"], "See ﴿note﴾");
    assert_eq!(swapped["items"][0]["answer"]["ayah_ar"], "﴿نص﴾");
}

#[test]
fn strip_removes_brackets_from_the_named_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("juz-01.json");
    write(&path, &source_juz(1, "الفاتحة", json!(1)));

    let options = TransformOptions::default();
    let field = FieldPath::parse("answer.ayah_ar").unwrap();
    let result = transform_dir(
        "strip-brackets",
        dir.path(),
        &field,
        &CharTransform::strip("﴿﴾()".chars()),
        &options,
    )
    .unwrap();

    assert_eq!(result.total_changes(), 2);
    let stripped = read(&path);
    assert_eq!(stripped["items"][0]["answer"]["ayah_ar"], "نص");
    assert_eq!(stripped["items"][0]["answer"]["commentary_en"], "See ﴾note﴿");
}
