//! Calendar facts derived from the viewed instant.
//!
//! Facts are a pure function of [`ViewedInstant`]; nothing here caches or reads
//! the clock.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::calendar::{CalendarFacts, ViewedInstant};
use crate::utils::date::{self, formatted_date, normalized_date};

/// Compute every calendar fact for the month containing `viewed`.
pub fn calendar_facts(viewed: ViewedInstant) -> CalendarFacts {
    let current = viewed.instant().date();
    let year = current.year();
    let month0 = current.month0();

    CalendarFacts {
        active_year: year,
        active_month: month0,
        active_day: current.day(),
        active_weekday: current.weekday().num_days_from_sunday(),
        days_in_active_month: days_in_month(year, month0),
        start_weekday_of_active_month: first_of_month(year.into(), month0.into())
            .weekday()
            .num_days_from_sunday(),
        previous_month_anchor: anchor(year.into(), i64::from(month0) - 1),
        next_month_anchor: anchor(year.into(), i64::from(month0) + 1),
        previous_year_anchor: anchor(i64::from(year) - 1, 0),
        next_year_anchor: anchor(i64::from(year) + 1, 0),
        formatted: formatted_date(current),
    }
}

/// Days in a month of a viewed-range year.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    date::days_in_month(year, month0).expect("month within supported year range")
}

fn first_of_month(year: i64, month0: i64) -> NaiveDate {
    normalized_date(year, month0, 1).expect("month within supported year range")
}

/// Midnight on day 1 of the (rolled-over) month.
fn anchor(year: i64, month0: i64) -> NaiveDateTime {
    first_of_month(year, month0).and_time(NaiveTime::MIN)
}
