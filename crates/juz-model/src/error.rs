use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("verse number '{value}' is not a non-negative integer")]
    InvalidVerseNumber { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
