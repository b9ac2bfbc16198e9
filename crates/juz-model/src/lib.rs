//! Data model for juz quiz files.
//!
//! A juz file is a JSON document `{ "juz": ..., "items": [...] }`. Items come
//! in two shapes: the source shape written by hand (Arabic surah names and
//! free-form verse references) and the normalized shape produced by the
//! converter (numeric surah ids and explicit verse lists).

pub mod error;
pub mod item;
pub mod options;
pub mod verse;

pub use error::{ModelError, Result};
pub use item::{JuzDocument, NormalizedAnswer, NormalizedItem, SourceAnswer, SourceItem};
pub use options::{
    BatchOptions, ConvertOptions, DEFAULT_JSON_PATTERN, DEFAULT_JUZ_PATTERN, DEFAULT_STAMP_KEYS,
    FailurePolicy, StampOptions, TransformOptions,
};
pub use verse::VerseReference;
