//! Locale name tables and the registry that selects the active one.
//!
//! A [`LocaleTable`] holds the month and weekday display names for one
//! language. Tables are validated once at construction and immutable after
//! registration, so the registry hands out cheap `Arc` snapshots and the
//! formatter never sees a half-updated table.

mod builtin;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::LocaleError;

/// Month and weekday display names for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    months_full: [String; 12],
    months_abbr: [String; 12],
    weekdays_full: [String; 7],
    weekdays_abbr: [String; 7],
}

impl LocaleTable {
    /// Builds a table from the four name sequences.
    ///
    /// Fails with [`LocaleError::InvalidLocale`] unless exactly 12 full month
    /// names, 12 abbreviated month names, 7 full weekday names and 7
    /// abbreviated weekday names are supplied.
    pub fn new<S: Into<String>>(
        months_full: impl IntoIterator<Item = S>,
        months_abbr: impl IntoIterator<Item = S>,
        weekdays_full: impl IntoIterator<Item = S>,
        weekdays_abbr: impl IntoIterator<Item = S>,
    ) -> Result<Self, LocaleError> {
        Ok(LocaleTable {
            months_full: collect_names(months_full, "full month names")?,
            months_abbr: collect_names(months_abbr, "abbreviated month names")?,
            weekdays_full: collect_names(weekdays_full, "full weekday names")?,
            weekdays_abbr: collect_names(weekdays_abbr, "abbreviated weekday names")?,
        })
    }

    /// Builds a table from static arrays whose lengths are already right.
    pub(crate) fn from_static(
        months_full: [&str; 12],
        months_abbr: [&str; 12],
        weekdays_full: [&str; 7],
        weekdays_abbr: [&str; 7],
    ) -> Self {
        LocaleTable {
            months_full: months_full.map(String::from),
            months_abbr: months_abbr.map(String::from),
            weekdays_full: weekdays_full.map(String::from),
            weekdays_abbr: weekdays_abbr.map(String::from),
        }
    }

    /// Full month name for a 0-based month index.
    pub fn full_month_name(&self, index: usize) -> Result<&str, LocaleError> {
        lookup(&self.months_full, index)
    }

    /// Abbreviated month name for a 0-based month index.
    pub fn abbreviated_month_name(&self, index: usize) -> Result<&str, LocaleError> {
        lookup(&self.months_abbr, index)
    }

    /// Full weekday name for a 0-based weekday index (0 = Sunday).
    pub fn full_weekday_name(&self, index: usize) -> Result<&str, LocaleError> {
        lookup(&self.weekdays_full, index)
    }

    /// Abbreviated weekday name for a 0-based weekday index (0 = Sunday).
    pub fn abbreviated_weekday_name(&self, index: usize) -> Result<&str, LocaleError> {
        lookup(&self.weekdays_abbr, index)
    }
}

fn collect_names<S: Into<String>, const N: usize>(
    names: impl IntoIterator<Item = S>,
    field: &'static str,
) -> Result<[String; N], LocaleError> {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    let got = names.len();
    names.try_into().map_err(|_| LocaleError::InvalidLocale {
        field,
        expected: N,
        got,
    })
}

fn lookup(names: &[String], index: usize) -> Result<&str, LocaleError> {
    names
        .get(index)
        .map(String::as_str)
        .ok_or(LocaleError::IndexOutOfRange {
            index,
            len: names.len(),
        })
}

/// Registry of locale tables keyed by language tag, with one active table.
///
/// `Locales::default()` comes with `"en"` registered and active, so the
/// formatter works with zero configuration.
#[derive(Debug, Clone)]
pub struct Locales {
    tables: HashMap<String, Arc<LocaleTable>>,
    active: Arc<LocaleTable>,
    active_tag: String,
}

impl Default for Locales {
    fn default() -> Self {
        let en = Arc::new(builtin::en());
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), Arc::clone(&en));
        Locales {
            tables,
            active: en,
            active_tag: "en".to_string(),
        }
    }
}

impl Locales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or replaces the table for `tag`.
    ///
    /// Replacing the active tag's table takes effect immediately.
    pub fn register(&mut self, tag: &str, table: LocaleTable) {
        let table = Arc::new(table);
        if tag == self.active_tag {
            self.active = Arc::clone(&table);
        }
        self.tables.insert(tag.to_string(), table);
    }

    /// Makes `tag`'s table the active one for all subsequent lookups.
    pub fn set_active(&mut self, tag: &str) -> Result<(), LocaleError> {
        let table = self
            .tables
            .get(tag)
            .ok_or_else(|| LocaleError::UnknownLocale {
                tag: tag.to_string(),
            })?;
        self.active = Arc::clone(table);
        self.active_tag = tag.to_string();
        Ok(())
    }

    /// The currently active table.
    pub fn active(&self) -> &Arc<LocaleTable> {
        &self.active
    }

    /// The tag of the currently active table.
    pub fn active_tag(&self) -> &str {
        &self.active_tag
    }

    /// All registered language tags, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tables.keys().cloned().collect();
        tags.sort();
        tags
    }
}
