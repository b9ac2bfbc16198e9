//! Juz file I/O.
//!
//! This crate finds juz JSON files in a data directory, loads them with a
//! top-level shape check, and writes documents and backups back to disk.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use juz_ingest::{LoadOutcome, list_json_files, load_document};
//! use juz_model::BatchOptions;
//!
//! for path in list_json_files(Path::new("public/data"), &BatchOptions::new())? {
//!     if let LoadOutcome::Loaded(document) = load_document(&path)? {
//!         println!("{}: {} items", path.display(), document.item_count());
//!     }
//! }
//! ```

mod discovery;
mod document;
mod error;
mod output;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::list_json_files;

// === Reading ===
pub use document::{JsonDocument, LoadOutcome, SkipReason, check_shape, load_document};

// === Writing ===
pub use output::{sibling_dir, to_pretty_json, write_backup, write_json};
