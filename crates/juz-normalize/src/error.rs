//! Error types for juz item normalization.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while parsing a verse reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AyahError {
    #[error("verse number '{digits}' is out of range")]
    Overflow { digits: String },

    #[error("verse range {start}-{end} spans more verses than any surah has")]
    RangeTooLarge { start: u32, end: u32 },
}

/// Errors for a single record, independent of where it came from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No canonical surah name normalizes to the same key.
    #[error("unknown surah name '{surah}'")]
    UnknownSurah { surah: String },

    #[error(transparent)]
    Ayah(#[from] AyahError),
}

/// Errors that abort the conversion of one juz file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The document envelope could not be decoded.
    #[error("invalid juz document {file}: {source}")]
    InvalidDocument {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An item is not in the source shape (for example, already normalized).
    #[error("{file}: items[{index}] is not a source-shape item: {source}")]
    InvalidItem {
        file: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An item decoded but could not be converted.
    #[error("{file}: items[{index}]: {source}")]
    Record {
        file: PathBuf,
        index: usize,
        #[source]
        source: RecordError,
    },
}

impl ConvertError {
    /// The file whose conversion failed.
    pub fn file(&self) -> &Path {
        match self {
            Self::InvalidDocument { file, .. }
            | Self::InvalidItem { file, .. }
            | Self::Record { file, .. } => file.as_path(),
        }
    }
}

/// Errors parsing a dotted field path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("field path is empty")]
    Empty,

    #[error("field path '{path}' has an empty segment")]
    EmptySegment { path: String },
}
