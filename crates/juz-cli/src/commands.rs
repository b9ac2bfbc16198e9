use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use juz_ingest::{
    JsonDocument, LoadOutcome, list_json_files, load_document, sibling_dir, write_backup,
    write_json,
};
use juz_model::{
    BatchOptions, ConvertOptions, DEFAULT_JSON_PATTERN, FailurePolicy, JuzDocument,
    NormalizedItem, StampOptions, TransformOptions,
};
use juz_normalize::{
    CharTransform, FieldPath, SurahCatalog, SurahLookup, convert_document, normalize,
    stamp_document, transform_document,
};
use tracing::{debug, error, info, info_span, warn};

use crate::cli::{BackupArgs, ConvertArgs, StampArgs, StripArgs, SwapArgs};
use crate::summary::apply_table_style;
use crate::types::{BatchResult, FileReport, FileStatus};

const OUTPUT_DIR_SUFFIX: &str = "_v2";
const BACKUP_DIR_SUFFIX: &str = "_backup";

pub fn run_surahs(catalog: &SurahCatalog) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Surah", "Lookup key"]);
    apply_table_style(&mut table);
    for (number, name) in catalog.iter() {
        table.add_row(vec![
            number.to_string(),
            name.to_string(),
            normalize(name).into_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs, lookup: &SurahLookup) -> Result<BatchResult> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => sibling_dir(&args.input_dir, OUTPUT_DIR_SUFFIX)?,
    };
    let policy = if args.keep_going {
        FailurePolicy::SkipFile
    } else {
        FailurePolicy::AbortBatch
    };
    let defaults = ConvertOptions::new(output_dir);
    let batch = args.batch.to_options(&defaults.batch.pattern);
    let options = defaults.with_batch(batch).with_failure_policy(policy);
    convert_dir(&args.input_dir, &options, lookup)
}

/// Convert every matching file under `input_dir`.
///
/// Files are converted in memory first; nothing is written when the policy
/// aborts on a failing record.
pub fn convert_dir(
    input_dir: &Path,
    options: &ConvertOptions,
    lookup: &SurahLookup,
) -> Result<BatchResult> {
    let span = info_span!("convert", dir = %input_dir.display());
    let _guard = span.enter();

    let mut result = BatchResult::new("convert", input_dir.to_path_buf(), "Converted");
    result.output_dir = Some(options.output_dir.clone());
    result.dry_run = options.batch.dry_run;

    let files = list_json_files(input_dir, &options.batch)
        .with_context(|| format!("list juz files in {}", input_dir.display()))?;
    let mut pending: Vec<(usize, PathBuf, JuzDocument<NormalizedItem>)> = Vec::new();

    for path in files {
        let Some(document) = load_or_report(&path, &mut result) else {
            if last_failed(&result) && stop_on_failure(options.failure_policy, &mut result) {
                break;
            }
            continue;
        };
        let items = document.item_count();
        match convert_document(lookup, &path, document.value) {
            Ok(converted) => {
                let output = mirrored_path(input_dir, &path, &options.output_dir);
                debug!(input = %path.display(), output = %output.display(), items, "converted file");
                pending.push((result.files.len(), output.clone(), converted));
                result.files.push(
                    FileReport::new(path, FileStatus::Converted { output })
                        .with_counts(items, items),
                );
            }
            Err(convert_error) => {
                error!(error = %convert_error, "conversion failed");
                result.files.push(
                    FileReport::new(path, FileStatus::Failed(convert_error.to_string()))
                        .with_counts(items, 0),
                );
                if stop_on_failure(options.failure_policy, &mut result) {
                    break;
                }
            }
        }
    }

    if result.aborted {
        warn!(discarded = pending.len(), "conversion aborted; no files written");
        for (index, _, _) in pending {
            let report = &mut result.files[index];
            report.status = FileStatus::NotWritten;
            report.changes = 0;
        }
        return Ok(result);
    }

    if !options.batch.dry_run {
        for (_, output, converted) in &pending {
            write_json(output, converted)
                .with_context(|| format!("write {}", output.display()))?;
        }
    }
    info!(
        converted = pending.len(),
        failed = result.failed(),
        "conversion finished"
    );
    Ok(result)
}

pub fn run_stamp(args: &StampArgs) -> Result<BatchResult> {
    let options = StampOptions::default()
        .with_batch(args.batch.to_options(DEFAULT_JSON_PATTERN))
        .with_keys(args.keys.clone());
    stamp_dir(&args.dir, &options)
}

/// Add missing default keys to every item of every matching file, in place.
pub fn stamp_dir(dir: &Path, options: &StampOptions) -> Result<BatchResult> {
    let span = info_span!("stamp", dir = %dir.display());
    let _guard = span.enter();

    let mut result = BatchResult::new("stamp", dir.to_path_buf(), "Keys added");
    result.dry_run = options.batch.dry_run;

    let files = list_json_files(dir, &options.batch)
        .with_context(|| format!("list json files in {}", dir.display()))?;
    for path in files {
        let Some(mut document) = load_or_report(&path, &mut result) else {
            continue;
        };
        let items = document.item_count();
        let report = stamp_document(&mut document.value, &options.keys);
        let status = if report.changed() {
            if !options.batch.dry_run {
                write_json(&path, &document.value)
                    .with_context(|| format!("write {}", path.display()))?;
            }
            info!(path = %path.display(), keys_added = report.keys_added, "stamped file");
            FileStatus::Updated
        } else {
            FileStatus::Unchanged
        };
        result
            .files
            .push(FileReport::new(path, status).with_counts(items, report.keys_added));
    }
    Ok(result)
}

pub fn run_swap(args: &SwapArgs) -> Result<BatchResult> {
    let options = transform_options(
        &args.dir,
        args.batch.to_options(DEFAULT_JSON_PATTERN),
        &args.backup,
    )?;
    transform_dir(
        "swap-brackets",
        &args.dir,
        &args.field,
        &CharTransform::ornate_bracket_swap(),
        &options,
    )
}

pub fn run_strip(args: &StripArgs) -> Result<BatchResult> {
    let options = transform_options(
        &args.dir,
        args.batch.to_options(DEFAULT_JSON_PATTERN),
        &args.backup,
    )?;
    transform_dir(
        "strip-brackets",
        &args.dir,
        &args.field,
        &CharTransform::strip(args.chars.chars()),
        &options,
    )
}

fn transform_options(
    dir: &Path,
    batch: BatchOptions,
    backup: &BackupArgs,
) -> Result<TransformOptions> {
    let backup_dir = if backup.no_backup {
        None
    } else {
        match &backup.backup_dir {
            Some(path) => Some(path.clone()),
            None => Some(sibling_dir(dir, BACKUP_DIR_SUFFIX)?),
        }
    };
    Ok(TransformOptions::default()
        .with_batch(batch)
        .with_backup_dir(backup_dir))
}

/// Apply `transform` to `field` of every item, rewriting changed files.
///
/// A backup of the original content is written first, and only for files
/// that changed.
pub fn transform_dir(
    command: &'static str,
    dir: &Path,
    field: &FieldPath,
    transform: &CharTransform,
    options: &TransformOptions,
) -> Result<BatchResult> {
    let span = info_span!("transform", command, dir = %dir.display(), field = %field);
    let _guard = span.enter();

    let mut result = BatchResult::new(command, dir.to_path_buf(), "Chars changed");
    result.dry_run = options.batch.dry_run;
    result.backup_dir = options.backup_dir.clone();

    let files = list_json_files(dir, &options.batch)
        .with_context(|| format!("list json files in {}", dir.display()))?;
    for path in files {
        let Some(mut document) = load_or_report(&path, &mut result) else {
            continue;
        };
        let items = document.item_count();
        let report = transform_document(&mut document.value, field, transform);
        let status = if report.changed() {
            if !options.batch.dry_run {
                if let Some(backup_dir) = &options.backup_dir {
                    write_backup(dir, &path, &document.raw, backup_dir)
                        .with_context(|| format!("back up {}", path.display()))?;
                }
                write_json(&path, &document.value)
                    .with_context(|| format!("write {}", path.display()))?;
            }
            info!(
                path = %path.display(),
                items_changed = report.items_changed,
                chars_changed = report.chars_changed,
                "transformed file"
            );
            FileStatus::Updated
        } else {
            FileStatus::Unchanged
        };
        result
            .files
            .push(FileReport::new(path, status).with_counts(items, report.chars_changed));
    }
    Ok(result)
}

/// Load a document, recording a skip or read failure in `result` instead.
fn load_or_report(path: &Path, result: &mut BatchResult) -> Option<JsonDocument> {
    match load_document(path) {
        Ok(LoadOutcome::Loaded(document)) => Some(document),
        Ok(LoadOutcome::Skipped(reason)) => {
            result
                .files
                .push(FileReport::new(path.to_path_buf(), FileStatus::Skipped(reason)));
            None
        }
        Err(read_error) => {
            warn!(error = %read_error, "failed to read file");
            result.files.push(FileReport::new(
                path.to_path_buf(),
                FileStatus::Failed(read_error.to_string()),
            ));
            None
        }
    }
}

/// Marks `result` aborted when `policy` stops at the first failing file.
fn stop_on_failure(policy: FailurePolicy, result: &mut BatchResult) -> bool {
    if policy == FailurePolicy::AbortBatch {
        result.aborted = true;
    }
    result.aborted
}

fn last_failed(result: &BatchResult) -> bool {
    result
        .files
        .last()
        .is_some_and(|file| matches!(file.status, FileStatus::Failed(_)))
}

/// `path` relocated from `input_dir` into `output_dir`, keeping subdirectories.
fn mirrored_path(input_dir: &Path, path: &Path, output_dir: &Path) -> PathBuf {
    match path.strip_prefix(input_dir) {
        Ok(relative) if !relative.as_os_str().is_empty() => output_dir.join(relative),
        _ => output_dir.join(path.file_name().unwrap_or(path.as_os_str())),
    }
}
