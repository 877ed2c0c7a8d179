//! Errors raised by the sequence and mapping helpers.

use thiserror::Error;

/// Failures of the bounds-checked collection operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("pop from empty sequence")]
    EmptySequence,

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("value not found in sequence")]
    ValueNotFound,

    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

pub type Result<T> = std::result::Result<T, CollectionError>;
