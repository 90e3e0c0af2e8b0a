//! # Error Types
//!
//! Errors shared by every session crate. The snippets themselves almost
//! never fail; what can fail is the harness around them, mostly a timing
//! configuration that would measure nothing.

use thiserror::Error;

/// Core errors for the fluent sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A configuration field holds a value the harness cannot use.
    #[error("Invalid configuration: {field} = {value:?} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The logging subscriber could not be installed.
    #[error("Logging initialisation failed: {reason}")]
    Logging { reason: String },
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidConfig`] error.
    pub fn invalid_config(
        field: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidConfig {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
