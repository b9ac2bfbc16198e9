//! File discovery for juz data directories.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use juz_model::BatchOptions;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

/// Lists files under `dir` whose file name matches `options.pattern`.
///
/// Only the top level is scanned unless `options.recursive` is set. Returns
/// paths sorted so runs are reproducible.
pub fn list_json_files(dir: &Path, options: &BatchOptions) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let matcher = compile_pattern(&options.pattern)?;
    let max_depth = if options.recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();
    for entry_result in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        // Skip directories
        if !entry.file_type().is_file() {
            continue;
        }

        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(dir = %dir.display(), count = files.len(), pattern = %options.pattern, "discovered files");

    Ok(files)
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| IngestError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
