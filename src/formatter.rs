//! The formatting engine.
//!
//! A [`Formatter`] is a self-contained context: it owns its locale registry
//! and its named-format registry, so two formatters can run different
//! languages side by side while calls sharing one formatter all see the same
//! language switch. The active table is snapshotted under a single lock and
//! rendering happens outside it.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, Mutex};

use crate::cache;
use crate::error::{FormatError, LocaleError};
use crate::locale::{LocaleTable, Locales};
use crate::template::{Field, Piece, Template};
use crate::value::DateValue;

/// Left-pads the natural decimal form of `value` with `'0'` up to `width`.
///
/// Values already at or beyond `width` come back unchanged; the result is
/// never truncated.
pub fn pad_left(value: impl Display, width: usize) -> String {
    let s = value.to_string();
    if s.len() >= width {
        return s;
    }
    let mut out = String::with_capacity(width);
    for _ in 0..width - s.len() {
        out.push('0');
    }
    out.push_str(&s);
    out
}

/// Convert a 24-hour clock hour to the 12-hour clock.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

/// Renders the UTC offset as `±HH:MM` with a mandatory sign.
fn render_utc_offset(offset_minutes: i32) -> String {
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let magnitude = offset_minutes.unsigned_abs();
    format!(
        "{sign}{}:{}",
        pad_left(magnitude / 60, 2),
        pad_left(magnitude % 60, 2)
    )
}

/// Renders one field against a date and a locale table.
fn render_field(
    field: Field,
    date: &DateValue,
    locale: &LocaleTable,
) -> Result<String, LocaleError> {
    Ok(match field {
        Field::Year4 => date.year().to_string(),
        Field::Year2 => pad_left(date.year().rem_euclid(100), 2),
        Field::MonthFull => locale.full_month_name(date.month() as usize)?.to_string(),
        Field::MonthAbbr => locale
            .abbreviated_month_name(date.month() as usize)?
            .to_string(),
        Field::Month2 => pad_left(date.month() + 1, 2),
        Field::Month => (date.month() + 1).to_string(),
        Field::WeekdayFull => locale
            .full_weekday_name(date.weekday() as usize)?
            .to_string(),
        Field::WeekdayAbbr => locale
            .abbreviated_weekday_name(date.weekday() as usize)?
            .to_string(),
        Field::Day2 => pad_left(date.day(), 2),
        Field::Day => date.day().to_string(),
        Field::Hour2 => pad_left(date.hour(), 2),
        Field::Hour => date.hour().to_string(),
        Field::TwelveHour2 => pad_left(to_12_hour(date.hour()), 2),
        Field::TwelveHour => to_12_hour(date.hour()).to_string(),
        Field::Minute2 => pad_left(date.minute(), 2),
        Field::Minute => date.minute().to_string(),
        Field::Second2 => pad_left(date.second(), 2),
        Field::Second => date.second().to_string(),
        Field::Millis => date.millisecond().to_string(),
        Field::MeridiemLower => if date.hour() < 12 { "am" } else { "pm" }.to_string(),
        Field::MeridiemUpper => if date.hour() < 12 { "AM" } else { "PM" }.to_string(),
        Field::UtcOffset => render_utc_offset(date.utc_offset_minutes()),
    })
}

/// Renders a scanned template against a date and a locale table.
fn render(
    template: &Template,
    date: &DateValue,
    locale: &LocaleTable,
) -> Result<String, FormatError> {
    let mut out = String::new();
    for piece in template.pieces() {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Field(field) => out.push_str(&render_field(*field, date, locale)?),
        }
    }
    Ok(out)
}

/// A formatting context holding its own locale registry and named formats.
#[derive(Debug, Default)]
pub struct Formatter {
    locales: Mutex<Locales>,
    formats: Mutex<HashMap<String, Template>>,
}

impl Formatter {
    /// A fresh context with the built-in `"en"` locale active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats `date` according to `template` using the active language.
    ///
    /// An empty template yields an empty string. On error no partial output
    /// is produced.
    pub fn format(&self, template: &str, date: &DateValue) -> Result<String, FormatError> {
        let template = cache::get_or_parse(template);
        let locale = self.active_locale();
        render(&template, date, &locale)
    }

    /// Switches the active language for all later calls on this formatter.
    pub fn set_language(&self, tag: &str) -> Result<(), LocaleError> {
        self.locales.lock().unwrap().set_active(tag)
    }

    /// Installs or replaces the locale table for `tag`.
    pub fn register_language(&self, tag: &str, table: LocaleTable) {
        self.locales.lock().unwrap().register(tag, table);
    }

    /// The tag of the active language.
    pub fn language(&self) -> String {
        self.locales.lock().unwrap().active_tag().to_string()
    }

    /// All registered language tags, sorted.
    pub fn languages(&self) -> Vec<String> {
        self.locales.lock().unwrap().tags()
    }

    /// Registers a reusable named format.
    pub fn register_format(&self, name: &str, template: &str) {
        self.formats
            .lock()
            .unwrap()
            .insert(name.to_string(), Template::parse(template));
    }

    /// Formats `date` with a previously registered named format.
    pub fn format_named(&self, name: &str, date: &DateValue) -> Result<String, FormatError> {
        let template = self
            .formats
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| FormatError::UnknownFormat {
                name: name.to_string(),
            })?;
        let locale = self.active_locale();
        render(&template, date, &locale)
    }

    /// Names of all registered formats, sorted.
    pub fn formats(&self) -> Vec<String> {
        let mut names: Vec<String> = self.formats.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    /// Snapshot of the active table, taken under the lock so rendering runs
    /// without holding it.
    fn active_locale(&self) -> Arc<LocaleTable> {
        Arc::clone(self.locales.lock().unwrap().active())
    }
}
