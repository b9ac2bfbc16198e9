//! Verse reference as it appears in source-shape items.

use serde::Deserialize;

use crate::error::ModelError;

/// The raw `answer.ayah` value of a source item.
///
/// Decoded once at the input boundary so the parser only deals with one
/// representation per case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawVerseReference")]
pub enum VerseReference {
    /// A bare JSON integer, e.g. `84`.
    Integer(u32),
    /// A JSON array of verse numbers. Entries may be integers or digit strings.
    IntegerList(Vec<u32>),
    /// Free text such as `"84-85"`, `"٨٤"` or `"12, 14"`.
    Text(String),
}

impl From<u32> for VerseReference {
    fn from(value: u32) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<u32>> for VerseReference {
    fn from(value: Vec<u32>) -> Self {
        Self::IntegerList(value)
    }
}

impl From<&str> for VerseReference {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVerseReference {
    Integer(u32),
    List(Vec<RawVerseNumber>),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVerseNumber {
    Integer(u32),
    Text(String),
}

impl TryFrom<RawVerseReference> for VerseReference {
    type Error = ModelError;

    fn try_from(raw: RawVerseReference) -> Result<Self, Self::Error> {
        match raw {
            RawVerseReference::Integer(value) => Ok(Self::Integer(value)),
            RawVerseReference::Text(text) => Ok(Self::Text(text)),
            RawVerseReference::List(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    RawVerseNumber::Integer(value) => Ok(value),
                    RawVerseNumber::Text(text) => {
                        text.trim()
                            .parse::<u32>()
                            .map_err(|_| ModelError::InvalidVerseNumber { value: text })
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::IntegerList),
        }
    }
}
