//! Error types for formatting and locale management.

use thiserror::Error;

/// Errors that can occur when formatting a date value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("invalid date: {reason}")]
    InvalidDate { reason: String },

    #[error("unknown named format '{name}'")]
    UnknownFormat { name: String },

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Errors that can occur when registering or resolving locale name tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    #[error("unknown locale '{tag}'")]
    UnknownLocale { tag: String },

    #[error("invalid locale table: expected {expected} {field}, got {got}")]
    InvalidLocale {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("name index {index} out of range (table has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}
