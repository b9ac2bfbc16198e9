//! Juz item normalization and in-place item transforms.
//!
//! # Features
//!
//! - **Name normalization**: fold Arabic surah spellings to a lookup key
//! - **Surah lookup**: resolve names against the 114-entry canonical catalog
//! - **Verse parsing**: expand verse references (`"84-85"`) into verse lists
//! - **Conversion**: source-shape items to normalized-shape items
//! - **Stamping**: add default metadata keys to items
//! - **Character transforms**: swap or strip characters in one item field
//!
//! # Example
//!
//! ```ignore
//! use juz_normalize::{SurahLookup, convert_document};
//!
//! let lookup = SurahLookup::canonical();
//! let normalized = convert_document(&lookup, path, document)?;
//! ```

pub mod arabic;
pub mod ayah;
pub mod chars;
pub mod convert;
pub mod error;
pub mod field;
pub mod stamp;
pub mod surah;

pub use arabic::{NormalizedName, normalize};
pub use ayah::{MAX_AYAH, parse_ayah_text, parse_ayahs};
pub use chars::{CharTransform, DEFAULT_STRIP_CHARS, TransformReport, transform_document};
pub use convert::{convert_document, convert_item};
pub use error::{AyahError, ConvertError, FieldPathError, RecordError};
pub use field::FieldPath;
pub use stamp::{StampReport, stamp_document, stamp_item};
pub use surah::{SurahCatalog, SurahLookup};
