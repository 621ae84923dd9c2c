//! Grid builder.
//!
//! Produces the display collections for one month: week-day headers, the month
//! selector, the fixed-size day grid and the current-date summary. Every
//! function is pure; "today" is passed in rather than read from the clock.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar::{
    CalendarFacts, CalendarView, CurrentDateSummary, DayCell, MonthLabel, WeekdayLabel, MAX_DAYS,
};
use crate::models::event_list::EventList;
use crate::services::calendar::days_in_month;
use crate::utils::date::formatted_key;

/// Header abbreviations, Monday first.
const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Full names indexed by Sunday-based weekday.
const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A cell before it is numbered and checked against the event list.
struct CellDate {
    day: u32,
    month: u32,
    year: i32,
    in_active_month: bool,
    is_today: bool,
    is_selected: bool,
}

impl CellDate {
    fn padding(day: u32, anchor: NaiveDate) -> Self {
        Self {
            day,
            month: anchor.month0(),
            year: anchor.year(),
            in_active_month: false,
            is_today: false,
            is_selected: false,
        }
    }
}

pub fn weekday_labels() -> Vec<WeekdayLabel> {
    WEEKDAY_ABBREVIATIONS
        .into_iter()
        .zip(1..)
        .map(|(abbreviation, ordinal)| WeekdayLabel {
            ordinal,
            abbreviation,
        })
        .collect()
}

pub fn month_labels(facts: &CalendarFacts) -> Vec<MonthLabel> {
    MONTH_NAMES
        .into_iter()
        .zip(0..)
        .map(|(name, ordinal)| MonthLabel {
            ordinal,
            is_active: ordinal == facts.active_month,
            name,
        })
        .collect()
}

/// Build the `MAX_DAYS` cells for the active month.
///
/// Leading cells are the tail of the previous month (one per Sunday-based
/// weekday offset of day 1), then every day of the active month, then the
/// head of the next month up to `MAX_DAYS`.
pub fn day_grid(facts: &CalendarFacts, events: &EventList, today: NaiveDate) -> Vec<DayCell> {
    let previous = facts.previous_month_anchor.date();
    let next = facts.next_month_anchor.date();
    let days_in_previous = days_in_month(previous.year(), previous.month0());
    let leading = facts.start_weekday_of_active_month;

    let previous_days =
        (0..leading).rev().map(|offset| CellDate::padding(days_in_previous - offset, previous));

    let today_in_active_month =
        today.year() == facts.active_year && today.month0() == facts.active_month;
    let active_days = (1..=facts.days_in_active_month).map(|day| CellDate {
        day,
        month: facts.active_month,
        year: facts.active_year,
        in_active_month: true,
        is_today: today_in_active_month && today.day() == day,
        is_selected: day == facts.active_day,
    });

    let trailing = MAX_DAYS.saturating_sub(leading as usize + facts.days_in_active_month as usize);
    let next_days = (1..=trailing as u32).map(|day| CellDate::padding(day, next));

    previous_days
        .chain(active_days)
        .chain(next_days)
        .enumerate()
        .map(|(idx, cell)| DayCell {
            num: idx + 1,
            has_event: events.has_event(&formatted_key(cell.day, cell.month, cell.year)),
            day_number: cell.day,
            month: cell.month,
            year: cell.year,
            belongs_to_active_month: cell.in_active_month,
            is_today: cell.is_today,
            is_selected: cell.is_selected,
        })
        .collect()
}

pub fn current_date_summary(facts: &CalendarFacts) -> CurrentDateSummary {
    CurrentDateSummary {
        year: facts.active_year,
        day: facts.active_day,
        weekday_name: WEEKDAY_NAMES[facts.active_weekday as usize % 7],
    }
}

/// Rebuild every output collection together.
pub fn build_view(facts: &CalendarFacts, events: &EventList, today: NaiveDate) -> CalendarView {
    CalendarView {
        weekday_labels: weekday_labels(),
        month_labels: month_labels(facts),
        day_grid: day_grid(facts, events, today),
        current_date: current_date_summary(facts),
        formatted_date: facts.formatted.clone(),
    }
}
