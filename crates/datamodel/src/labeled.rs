//! # Labeled Values - Custom Representations
//!
//! A type decides how it is shown. `Labeled` wraps any value and renders it
//! as `X value is 25` instead of the derived `Labeled { .. }` form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label used by [`Labeled::new`].
pub const DEFAULT_LABEL: &str = "X";

/// A value carrying the name it is introduced by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labeled<T> {
    pub label: String,
    pub value: T,
}

impl<T> Labeled<T> {
    pub fn new(value: T) -> Self {
        Self::with_label(DEFAULT_LABEL, value)
    }

    pub fn with_label(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// The value is shown through Debug, so strings keep their quotes.
impl<T: fmt::Debug> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} value is {:?}", self.label, self.value)
    }
}
