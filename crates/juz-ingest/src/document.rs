//! Reading juz documents and checking their top-level shape.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// A juz file that parsed and has an `items` array.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    pub path: PathBuf,
    /// Original file content, kept for backups.
    pub raw: String,
    pub value: Value,
}

impl JsonDocument {
    pub fn item_count(&self) -> usize {
        self.value
            .get("items")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// Why a file was passed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not UTF-8.
    NotUtf8,
    /// Content does not parse as JSON.
    InvalidJson(String),
    /// Top-level value is not an object.
    NotAnObject,
    /// Top-level object lacks an `items` array.
    MissingItems,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotUtf8 => f.write_str("not valid UTF-8"),
            Self::InvalidJson(message) => write!(f, "invalid JSON ({message})"),
            Self::NotAnObject => f.write_str("top-level value is not an object"),
            Self::MissingItems => f.write_str("missing/invalid 'items' array"),
        }
    }
}

/// Result of loading one file.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Loaded(JsonDocument),
    Skipped(SkipReason),
}

/// Read and shape-check a juz file.
///
/// Malformed content yields [`LoadOutcome::Skipped`]; only I/O failures are
/// errors.
pub fn load_document(path: &Path) -> Result<LoadOutcome> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = match String::from_utf8(bytes) {
        Ok(raw) => raw,
        Err(_) => return Ok(skip(path, SkipReason::NotUtf8)),
    };
    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(error) => return Ok(skip(path, SkipReason::InvalidJson(error.to_string()))),
    };
    if let Some(reason) = check_shape(&value) {
        return Ok(skip(path, reason));
    }
    debug!(path = %path.display(), bytes = raw.len(), "loaded document");
    Ok(LoadOutcome::Loaded(JsonDocument {
        path: path.to_path_buf(),
        raw,
        value,
    }))
}

/// Returns the reason a value is not a juz document, if any.
pub fn check_shape(value: &Value) -> Option<SkipReason> {
    let Some(object) = value.as_object() else {
        return Some(SkipReason::NotAnObject);
    };
    match object.get("items") {
        Some(Value::Array(_)) => None,
        _ => Some(SkipReason::MissingItems),
    }
}

fn skip(path: &Path, reason: SkipReason) -> LoadOutcome {
    warn!(path = %path.display(), %reason, "skipping file");
    LoadOutcome::Skipped(reason)
}
