// Date utility functions
// Lenient calendar construction and the D/M/YYYY key format

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

/// Build a date from a year, a zero-based month and a one-based day, rolling
/// out-of-range months and days over into neighbouring months and years.
///
/// `normalized_date(2024, 12, 1)` is 1 January 2025, `normalized_date(2024, 2, 0)`
/// is the last day of February 2024. Returns `None` only when the result is
/// outside the range chrono can represent.
pub fn normalized_date(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let start_of_year = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let months = Months::new(u32::try_from(month0.unsigned_abs()).ok()?);
    let first_of_month = if month0 >= 0 {
        start_of_year.checked_add_months(months)?
    } else {
        start_of_year.checked_sub_months(months)?
    };
    first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Number of days in a month, taken from "day 0" of the following month.
pub fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    normalized_date(year.into(), i64::from(month0) + 1, 0).map(|last| last.day())
}

/// Sunday-based weekday (0 = Sunday .. 6 = Saturday) of the first day of a month.
pub fn start_weekday(year: i32, month0: u32) -> Option<u32> {
    normalized_date(year.into(), month0.into(), 1).map(|first| first.weekday().num_days_from_sunday())
}

/// Format a date as `D/M/YYYY` with no zero padding and a one-based month.
///
/// This string is both the event list key and the selected-date display text,
/// so producers of event lists must use exactly the same shape.
pub fn formatted_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Key for a day addressed the way grid cells address it (zero-based month).
pub fn formatted_key(day: u32, month0: u32, year: i32) -> String {
    format!("{}/{}/{}", day, month0 + 1, year)
}
