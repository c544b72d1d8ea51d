//! Date parsing and calendar arithmetic.
//!
//! All dates cross the storage and CLI boundaries as DD-MM-YYYY text; the
//! rest of the system works on `chrono::NaiveDate`.

use crate::error::{CoreError, CoreResult};
use chrono::{Datelike, Months, NaiveDate};

/// Textual date pattern used everywhere dates are read or written.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Length of the rolling demerit window, in calendar years.
pub const DEMERIT_WINDOW_YEARS: u32 = 2;

/// Parse a DD-MM-YYYY date string.
pub fn parse_date(s: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::BadDateFormat(s.to_string()))
}

/// Render a date back to its DD-MM-YYYY textual form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Composable "not in the future" predicate.
///
/// Kept separate from parsing so birth dates and offense dates can share it
/// while other date uses skip it.
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Whole calendar years elapsed between `birth` and `as_of`.
///
/// Decrements when the `as_of` month/day has not yet reached the birth
/// month/day, so a person is N years old the day before their Nth birthday
/// minus one.
pub fn age_at(birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut years = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Start of the rolling demerit window ending at `reference`.
///
/// Exactly two calendar years back; chrono clamps Feb 29 to Feb 28 in
/// non-leap years, matching standard calendar subtraction.
pub fn window_start(reference: NaiveDate) -> NaiveDate {
    reference - Months::new(DEMERIT_WINDOW_YEARS * 12)
}

/// Inclusive lower-bound window membership test.
pub fn in_window(date: NaiveDate, start: NaiveDate) -> bool {
    date >= start
}
