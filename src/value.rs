//! Date value snapshot and Gregorian calendar utilities.
//!
//! A [`DateValue`] is an immutable view of one instant: the formatter only
//! reads its fields and never adjusts them. The weekday is derived from the
//! civil date at construction time so it can never disagree with year/month/
//! day. The UTC offset is carried as signed minutes; constructors that go
//! through `chrono` capture the real offset of the source value, plain
//! constructors default it to zero.

use crate::error::FormatError;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given year is a leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (0-based) of a year.
fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for a civil date (month is 1-based here).
///
/// Howard Hinnant's days-from-civil algorithm, valid across the whole
/// proleptic Gregorian calendar.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(if month <= 2 { year - 1 } else { year });
    let m = i64::from(month);
    let d = i64::from(day);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Weekday index (0 = Sunday) for a civil date with a 0-based month.
fn weekday_index(year: i32, month: u32, day: u32) -> u32 {
    // 1970-01-01 was a Thursday
    (days_from_civil(year, month + 1, day) + 4).rem_euclid(7) as u32
}

/// One instant in time, broken into the fields the formatter reads.
///
/// Field conventions follow the formatter's token table: the month index is
/// 0-based (0 = January) while the day of month is 1-based, and the weekday
/// index is 0-based starting from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    year: i32,
    month: u32,
    day: u32,
    weekday: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    utc_offset_minutes: i32,
}

impl DateValue {
    /// Builds a date value from broken-down components, validating every
    /// field against the Gregorian calendar.
    ///
    /// `month` is 0-based (0 = January). The UTC offset defaults to zero;
    /// use [`DateValue::with_utc_offset`] to attach one.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, FormatError> {
        if month > 11 {
            return Err(invalid(format!("month index {month} out of range 0-11")));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(invalid(format!(
                "day {day} out of range 1-{max_day} for month index {month} of {year}"
            )));
        }
        if hour > 23 {
            return Err(invalid(format!("hour {hour} out of range 0-23")));
        }
        if minute > 59 {
            return Err(invalid(format!("minute {minute} out of range 0-59")));
        }
        if second > 59 {
            return Err(invalid(format!("second {second} out of range 0-59")));
        }
        if millisecond > 999 {
            return Err(invalid(format!(
                "millisecond {millisecond} out of range 0-999"
            )));
        }

        Ok(DateValue {
            year,
            month,
            day,
            weekday: weekday_index(year, month, day),
            hour,
            minute,
            second,
            millisecond,
            utc_offset_minutes: 0,
        })
    }

    /// Builds a date value at midnight of the given civil date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, FormatError> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Returns a copy carrying the given UTC offset in minutes.
    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// The current local time, including the host timezone's UTC offset.
    #[cfg(feature = "chrono")]
    pub fn now() -> Self {
        chrono::Local::now().into()
    }

    /// Parses an RFC 3339 timestamp (e.g. `2023-05-17T15:30:00+02:00`).
    #[cfg(feature = "chrono")]
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        chrono::DateTime::parse_from_rfc3339(input)
            .map(Into::into)
            .map_err(|e| invalid(format!("unparseable timestamp '{input}': {e}")))
    }

    /// Full year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month index, 0-based (0 = January).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Weekday index, 0-based (0 = Sunday).
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// Hour on the 24-hour clock.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// Offset from UTC in minutes, positive east of Greenwich.
    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }
}

fn invalid(reason: String) -> FormatError {
    FormatError::InvalidDate { reason }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for DateValue {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        use chrono::{Datelike, Offset, Timelike};

        DateValue {
            year: dt.year(),
            month: dt.month0(),
            day: dt.day(),
            weekday: dt.weekday().num_days_from_sunday(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            // Clamp the leap-second representation chrono stores above 999
            millisecond: dt.timestamp_subsec_millis().min(999),
            utc_offset_minutes: dt.offset().fix().local_minus_utc() / 60,
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for DateValue {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};

        DateValue {
            year: dt.year(),
            month: dt.month0(),
            day: dt.day(),
            weekday: dt.weekday().num_days_from_sunday(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            millisecond: dt.and_utc().timestamp_subsec_millis().min(999),
            utc_offset_minutes: 0,
        }
    }
}
