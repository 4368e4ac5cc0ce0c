//! dtfmt - token-based date/time formatting
//!
//! This crate renders a date/time value into a string according to a format
//! template built from recognized tokens (`YYYY`, `MM`, `dd`, `HH:mm:ss`,
//! weekday and month names, meridiem, UTC offset), with pluggable
//! per-language name tables for months and weekdays. Tokenization is greedy
//! longest-match, and anything that is not a token passes through verbatim.
//!
//! ```
//! use dtfmt::DateValue;
//!
//! let date = DateValue::new(2023, 4, 17, 15, 30, 0, 0).unwrap();
//! assert_eq!(dtfmt::format("YYYY-MM-dd HH:mm:ss", &date).unwrap(),
//!            "2023-05-17 15:30:00");
//! assert_eq!(dtfmt::format("MMMM dd, YYYY", &date).unwrap(), "May 17, 2023");
//! ```
//!
//! The free functions share one process-wide [`Formatter`], so a
//! [`set_language`] call affects every later free-function call. Code that
//! needs independently scoped languages creates its own [`Formatter`]
//! contexts instead.

pub mod error;
pub mod value;

mod cache;
mod formatter;
mod locale;
mod template;

pub use error::{FormatError, LocaleError};
pub use formatter::{pad_left, Formatter};
pub use locale::{LocaleTable, Locales};
pub use template::{Field, Piece, Template};
pub use value::DateValue;

use std::sync::OnceLock;

/// The shared formatter behind the free functions.
static SHARED: OnceLock<Formatter> = OnceLock::new();

fn shared() -> &'static Formatter {
    SHARED.get_or_init(Formatter::new)
}

/// Formats `date` according to `template` with the shared formatter's active
/// language.
pub fn format(template: &str, date: &DateValue) -> Result<String, FormatError> {
    shared().format(template, date)
}

/// Switches the shared formatter's active language for all later calls.
pub fn set_language(tag: &str) -> Result<(), LocaleError> {
    shared().set_language(tag)
}

/// Installs or replaces a locale table on the shared formatter.
pub fn register_language(tag: &str, table: LocaleTable) {
    shared().register_language(tag, table)
}

/// Registers a reusable named format on the shared formatter.
pub fn register_format(name: &str, template: &str) {
    shared().register_format(name, template)
}

/// Formats `date` with a named format registered on the shared formatter.
pub fn format_named(name: &str, date: &DateValue) -> Result<String, FormatError> {
    shared().format_named(name, date)
}
