//! Error types for sequence operations.

use thiserror::Error;

/// Errors raised by the sequence demonstrations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The value, or something nested inside it, cannot be hashed.
    #[error("unhashable type: '{type_name}'")]
    Unhashable { type_name: &'static str },

    /// Position outside `0..len` (or `0..=len` for insertion).
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `remove_value` / `index_of` found nothing.
    #[error("Value not found in sequence")]
    ValueNotFound,

    /// `pop` on an empty sequence.
    #[error("Cannot pop from an empty sequence")]
    Empty,
}
