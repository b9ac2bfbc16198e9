//! Writing juz documents and backing up originals.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Serialize as two-space indented JSON with a trailing newline.
///
/// Non-ASCII text is written literally.
pub fn to_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| IngestError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    Ok(text)
}

/// Replace `path` with the pretty JSON form of `value`, creating parents.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = to_pretty_json(path, value)?;
    write_text(path, &text)
}

/// Copy original file content into `backup_dir`, mirroring its location
/// relative to `root`. An older backup of the same file is overwritten.
pub fn write_backup(root: &Path, path: &Path, raw: &str, backup_dir: &Path) -> Result<PathBuf> {
    let relative = path
        .strip_prefix(root)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .map_or_else(
            || PathBuf::from(path.file_name().unwrap_or(path.as_os_str())),
            Path::to_path_buf,
        );
    let target = backup_dir.join(relative);
    write_text(&target, raw)?;
    debug!(source = %path.display(), backup = %target.display(), "wrote backup");
    Ok(target)
}

/// Sibling of `dir` named `<dir name><suffix>`, e.g. `data` -> `data_backup`.
pub fn sibling_dir(dir: &Path, suffix: &str) -> Result<PathBuf> {
    let absolute = std::path::absolute(dir).map_err(|source| IngestError::PathResolve {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut name = absolute
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(suffix);
    Ok(match absolute.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    })
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    let write_error = |source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, text).map_err(write_error)
}
