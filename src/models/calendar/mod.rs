//! Calendar view-model types.
//!
//! Everything here is plain data: the viewed instant, the facts derived from
//! it, and the collections a host renders. Computation lives in
//! `services::calendar` and `services::grid`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::utils::date::formatted_key;

/// Total number of cells in every rendered day grid.
///
/// This is the maximum grid size the layout guarantees, independent of how
/// many weeks a particular month actually spans.
pub const MAX_DAYS: usize = 37;

/// Earliest year a viewed instant may hold.
pub const MIN_YEAR: i32 = -9999;
/// Latest year a viewed instant may hold.
pub const MAX_YEAR: i32 = 9999;

/// The local wall-clock instant whose month is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ViewedInstant(NaiveDateTime);

impl ViewedInstant {
    /// Wrap an instant, rejecting years outside `MIN_YEAR..=MAX_YEAR` so that
    /// the previous/next year anchors always exist.
    pub fn new(instant: NaiveDateTime) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&instant.year())
            .then_some(Self(instant))
    }

    /// Like [`ViewedInstant::new`], but pins out-of-range years to the nearest
    /// supported day instead of rejecting them.
    pub fn clamped(instant: NaiveDateTime) -> Self {
        Self::new(instant).unwrap_or_else(|| {
            let edge = if instant.year() < MIN_YEAR {
                NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31)
            };
            Self(
                edge.expect("supported year bounds are valid dates")
                    .and_time(instant.time()),
            )
        })
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }
}

/// Calendar facts derived from a [`ViewedInstant`]. Never stored; recomputed
/// on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFacts {
    pub active_year: i32,
    /// Zero-based month (0 = January)
    pub active_month: u32,
    pub active_day: u32,
    /// Sunday-based weekday (0 = Sunday)
    pub active_weekday: u32,
    pub days_in_active_month: u32,
    /// Sunday-based weekday of day 1 of the active month
    pub start_weekday_of_active_month: u32,
    pub previous_month_anchor: NaiveDateTime,
    pub next_month_anchor: NaiveDateTime,
    pub previous_year_anchor: NaiveDateTime,
    pub next_year_anchor: NaiveDateTime,
    /// `D/M/YYYY` of the viewed instant
    pub formatted: String,
}

/// Column header for the week-day row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayLabel {
    /// 1 = Monday .. 7 = Sunday
    pub ordinal: u32,
    pub abbreviation: &'static str,
}

/// Entry in the month selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    /// 0 = January .. 11 = December
    pub ordinal: u32,
    pub is_active: bool,
    pub name: &'static str,
}

/// One cell of the day grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// 1-based position in the grid, stable key for the renderer
    pub num: usize,
    pub day_number: u32,
    /// Zero-based month this cell's date belongs to
    pub month: u32,
    pub year: i32,
    pub belongs_to_active_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_event: bool,
}

impl DayCell {
    /// `D/M/YYYY` key of this cell's own date.
    pub fn key(&self) -> String {
        formatted_key(self.day_number, self.month, self.year)
    }

    /// Style tags a host maps onto its own styling, in a fixed order.
    pub fn style_tags(&self) -> Vec<CellStyle> {
        let mut tags = Vec::new();
        if !self.belongs_to_active_month {
            tags.push(CellStyle::AnotherMonth);
        }
        if self.is_today {
            tags.push(CellStyle::ActiveDay);
        }
        if self.is_selected {
            tags.push(CellStyle::SelectedDay);
        }
        if self.has_event {
            tags.push(CellStyle::EventDay);
        }
        tags
    }
}

/// Styling classes a day cell can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellStyle {
    /// Padding cell from the previous or next month
    AnotherMonth,
    /// The clock's current date
    ActiveDay,
    SelectedDay,
    EventDay,
}

impl CellStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::AnotherMonth => "another-month",
            Self::ActiveDay => "active-day",
            Self::SelectedDay => "selected-day",
            Self::EventDay => "event-day",
        }
    }
}

/// Human-readable summary of the viewed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentDateSummary {
    pub year: i32,
    pub day: u32,
    pub weekday_name: &'static str,
}

/// Everything a host renders, rebuilt together on every navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub weekday_labels: Vec<WeekdayLabel>,
    pub month_labels: Vec<MonthLabel>,
    pub day_grid: Vec<DayCell>,
    pub current_date: CurrentDateSummary,
    pub formatted_date: String,
}
