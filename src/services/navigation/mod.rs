//! Navigation controller for the month calendar.
//!
//! [`MonthCalendar`] owns the viewed instant and the last rendered
//! [`CalendarView`]. Each navigation request either replaces the viewed instant
//! and rebuilds the whole view, or is ignored and leaves both untouched.
//! Ignored requests are reported as [`NavigationOutcome::Ignored`] and never
//! surface as errors, so hosts can drop the outcome.

use chrono::{NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::models::calendar::{CalendarFacts, CalendarView, ViewedInstant};
use crate::models::event_list::EventList;
use crate::services::calendar::calendar_facts;
use crate::services::clock::Clock;
use crate::services::grid::build_view;
use crate::utils::date::normalized_date;

/// Why a navigation request left the calendar unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IgnoreReason {
    #[error("no day given")]
    MissingDay,
    #[error("no month given")]
    MissingMonth,
    #[error("no year given")]
    MissingYear,
    #[error("month {0} is already displayed")]
    SameMonth(u32),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("target date is outside the supported range")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl NavigationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// A click on a day or month element, carrying its raw data attributes.
///
/// Attributes arrive as strings; missing or blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl ClickEvent {
    /// Click on a day cell (zero-based month).
    pub fn on_day(day: u32, month: u32, year: i32) -> Self {
        Self {
            day: Some(day.to_string()),
            month: Some(month.to_string()),
            year: Some(year.to_string()),
        }
    }

    /// Click on a month label (zero-based month).
    pub fn on_month(month: u32) -> Self {
        Self {
            month: Some(month.to_string()),
            ..Self::default()
        }
    }
}

fn parse_attribute(value: Option<&str>) -> Result<Option<i64>, IgnoreReason> {
    match value.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| IgnoreReason::NotANumber(raw.to_string())),
    }
}

pub struct MonthCalendar {
    viewed: ViewedInstant,
    events: EventList,
    clock: Box<dyn Clock>,
    view: CalendarView,
}

impl MonthCalendar {
    /// Start on the clock's current instant with the given event list.
    pub fn new(clock: Box<dyn Clock>, events: EventList) -> Self {
        let now = clock.now();
        let viewed = ViewedInstant::clamped(now);
        let view = build_view(&calendar_facts(viewed), &events, now.date());
        Self {
            viewed,
            events,
            clock,
            view,
        }
    }

    pub fn view(&self) -> &CalendarView {
        &self.view
    }

    pub fn viewed_instant(&self) -> ViewedInstant {
        self.viewed
    }

    pub fn facts(&self) -> CalendarFacts {
        calendar_facts(self.viewed)
    }

    /// Replace the externally owned event list and rebuild.
    pub fn set_events(&mut self, events: EventList) {
        log::debug!("Event list replaced ({} markers)", events.len());
        self.events = events;
        self.rebuild();
    }

    pub fn prev_year(&mut self) -> NavigationOutcome {
        self.apply(self.facts().previous_year_anchor)
    }

    pub fn next_year(&mut self) -> NavigationOutcome {
        self.apply(self.facts().next_year_anchor)
    }

    pub fn prev_month(&mut self) -> NavigationOutcome {
        self.apply(self.facts().previous_month_anchor)
    }

    pub fn next_month(&mut self) -> NavigationOutcome {
        self.apply(self.facts().next_month_anchor)
    }

    pub fn go_to_today(&mut self) -> NavigationOutcome {
        self.apply(self.clock.now())
    }

    /// Show another month of the same year, keeping the day and time of day.
    ///
    /// A day that does not exist in the target month rolls over into the
    /// following month (31 January -> "31 February" -> early March).
    pub fn select_month(&mut self, month: Option<i64>) -> NavigationOutcome {
        let Some(month) = month else {
            return ignore(IgnoreReason::MissingMonth);
        };
        let facts = self.facts();
        if month == i64::from(facts.active_month) {
            return ignore(IgnoreReason::SameMonth(facts.active_month));
        }

        let time = self.viewed.instant().time();
        match normalized_date(facts.active_year.into(), month, facts.active_day.into()) {
            Some(date) => self.apply(date.and_time(time)),
            None => ignore(IgnoreReason::OutOfRange),
        }
    }

    /// Jump to midnight of a day given with a zero-based month.
    pub fn select_day(
        &mut self,
        day: Option<i64>,
        month: Option<i64>,
        year: Option<i64>,
    ) -> NavigationOutcome {
        let Some(day) = day else {
            return ignore(IgnoreReason::MissingDay);
        };
        let Some(month) = month else {
            return ignore(IgnoreReason::MissingMonth);
        };
        let Some(year) = year else {
            return ignore(IgnoreReason::MissingYear);
        };

        match normalized_date(year, month, day) {
            Some(date) => self.apply(date.and_time(NaiveTime::MIN)),
            None => ignore(IgnoreReason::OutOfRange),
        }
    }

    pub fn month_click(&mut self, click: &ClickEvent) -> NavigationOutcome {
        match parse_attribute(click.month.as_deref()) {
            Ok(month) => self.select_month(month),
            Err(reason) => ignore(reason),
        }
    }

    pub fn day_click(&mut self, click: &ClickEvent) -> NavigationOutcome {
        let parsed = parse_attribute(click.day.as_deref()).and_then(|day| {
            if day.is_none() {
                return Err(IgnoreReason::MissingDay);
            }
            Ok((
                day,
                parse_attribute(click.month.as_deref())?,
                parse_attribute(click.year.as_deref())?,
            ))
        });

        match parsed {
            Ok((day, month, year)) => self.select_day(day, month, year),
            Err(reason) => ignore(reason),
        }
    }

    fn apply(&mut self, target: NaiveDateTime) -> NavigationOutcome {
        let Some(viewed) = ViewedInstant::new(target) else {
            return ignore(IgnoreReason::OutOfRange);
        };
        self.viewed = viewed;
        self.rebuild();
        log::debug!("Viewing {}", self.view.formatted_date);
        NavigationOutcome::Applied
    }

    fn rebuild(&mut self) {
        let today = self.clock.now().date();
        self.view = build_view(&calendar_facts(self.viewed), &self.events, today);
    }
}

fn ignore(reason: IgnoreReason) -> NavigationOutcome {
    log::debug!("Navigation ignored: {}", reason);
    NavigationOutcome::Ignored(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::MAX_YEAR;
    use crate::services::clock::{FixedClock, MockClock};
    use chrono::{Datelike, NaiveDate, Timelike};
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn calendar_at(now: NaiveDateTime) -> MonthCalendar {
        MonthCalendar::new(Box::new(FixedClock(now)), EventList::new())
    }

    #[test]
    fn test_starts_on_clock_now() {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(at(2024, 5, 14, 10));

        let calendar = MonthCalendar::new(Box::new(clock), EventList::new());
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 5, 14, 10));
        assert_eq!(calendar.facts().active_day, 14);
        assert_eq!(calendar.view().formatted_date, "14/5/2024");

        let today: Vec<_> = calendar.view().day_grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day_number, 14);
    }

    #[test]
    fn test_year_navigation_jumps_to_january_first() {
        let mut calendar = calendar_at(at(2023, 8, 19, 15));

        assert_eq!(calendar.next_year(), NavigationOutcome::Applied);
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 1, 1, 0));

        assert_eq!(calendar.prev_year(), NavigationOutcome::Applied);
        assert_eq!(calendar.viewed_instant().instant(), at(2023, 1, 1, 0));
    }

    #[test]
    fn test_month_navigation_uses_month_anchors() {
        let mut calendar = calendar_at(at(2023, 12, 19, 15));

        assert!(calendar.next_month().is_applied());
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 1, 1, 0));

        assert!(calendar.prev_month().is_applied());
        assert!(calendar.prev_month().is_applied());
        assert_eq!(calendar.viewed_instant().instant(), at(2023, 11, 1, 0));
    }

    #[test]
    fn test_select_month_keeps_day_and_time() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert!(calendar.select_month(Some(8)).is_applied());

        let instant = calendar.viewed_instant().instant();
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2024, 9, 14).unwrap());
        assert_eq!(instant.hour(), 10);
        assert!(calendar.view().month_labels[8].is_active);
    }

    #[test]
    fn test_select_month_accepts_january() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert!(calendar.select_month(Some(0)).is_applied());
        assert_eq!(calendar.facts().active_month, 0);
    }

    #[test]
    fn test_select_month_rolls_over_short_months() {
        // 31 January 2024 -> "31 February 2024" -> 2 March 2024
        let mut calendar = calendar_at(at(2024, 1, 31, 9));
        assert!(calendar.select_month(Some(1)).is_applied());
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 3, 2, 9));
    }

    #[test]
    fn test_select_month_ignores_absent_and_current_month() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        let before = calendar.view().clone();

        assert_eq!(
            calendar.select_month(None),
            NavigationOutcome::Ignored(IgnoreReason::MissingMonth)
        );
        assert_eq!(
            calendar.select_month(Some(4)),
            NavigationOutcome::Ignored(IgnoreReason::SameMonth(4))
        );
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 5, 14, 10));
        assert_eq!(calendar.view(), &before);
    }

    #[test]
    fn test_select_day_sets_exact_day() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert!(calendar.select_day(Some(15), Some(5), Some(2022)).is_applied());

        assert_eq!(calendar.viewed_instant().instant(), at(2022, 6, 15, 0));
        let selected: Vec<_> = calendar.view().day_grid.iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!((selected[0].day_number, selected[0].month, selected[0].year), (15, 5, 2022));
        assert_eq!(calendar.view().formatted_date, "15/6/2022");
    }

    #[test]
    fn test_select_day_rolls_over_out_of_range_values() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert!(calendar.select_day(Some(32), Some(11), Some(2023)).is_applied());
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 1, 1, 0));
    }

    #[test]
    fn test_select_day_ignores_missing_parts() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert_eq!(
            calendar.select_day(None, Some(5), Some(2022)),
            NavigationOutcome::Ignored(IgnoreReason::MissingDay)
        );
        assert_eq!(
            calendar.select_day(Some(3), None, Some(2022)),
            NavigationOutcome::Ignored(IgnoreReason::MissingMonth)
        );
        assert_eq!(
            calendar.select_day(Some(3), Some(5), None),
            NavigationOutcome::Ignored(IgnoreReason::MissingYear)
        );
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 5, 14, 10));
    }

    #[test]
    fn test_day_click_parses_attributes() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert!(calendar.day_click(&ClickEvent::on_day(3, 1, 2025)).is_applied());
        assert_eq!(calendar.viewed_instant().instant(), at(2025, 2, 3, 0));
    }

    #[test]
    fn test_day_click_with_blank_or_garbage_attributes_is_ignored() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));

        let blank = ClickEvent {
            day: Some("  ".to_string()),
            month: Some("4".to_string()),
            year: Some("2024".to_string()),
        };
        assert_eq!(
            calendar.day_click(&blank),
            NavigationOutcome::Ignored(IgnoreReason::MissingDay)
        );

        let garbage = ClickEvent {
            day: Some("3".to_string()),
            month: Some("May".to_string()),
            year: Some("2024".to_string()),
        };
        assert_eq!(
            calendar.day_click(&garbage),
            NavigationOutcome::Ignored(IgnoreReason::NotANumber("May".to_string()))
        );
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 5, 14, 10));
    }

    #[test]
    fn test_month_click() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert!(calendar.month_click(&ClickEvent::on_month(0)).is_applied());
        assert_eq!(calendar.facts().active_month, 0);

        assert_eq!(
            calendar.month_click(&ClickEvent::default()),
            NavigationOutcome::Ignored(IgnoreReason::MissingMonth)
        );
    }

    #[test]
    fn test_navigation_past_supported_range_is_ignored() {
        let mut calendar = calendar_at(at(MAX_YEAR, 6, 1, 0));
        assert_eq!(
            calendar.next_year(),
            NavigationOutcome::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(calendar.facts().active_year, MAX_YEAR);
    }

    #[test]
    fn test_set_events_rebuilds_markers() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        assert!(calendar.view().day_grid.iter().all(|c| !c.has_event));

        let mut events = EventList::new();
        events.insert("20/5/2024", true);
        calendar.set_events(events);

        let marked: Vec<_> = calendar.view().day_grid.iter().filter(|c| c.has_event).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].day_number, 20);
    }

    #[test]
    fn test_go_to_today_returns_to_clock() {
        let mut calendar = calendar_at(at(2024, 5, 14, 10));
        calendar.prev_year();
        assert_eq!(calendar.facts().active_year, 2023);

        assert!(calendar.go_to_today().is_applied());
        assert_eq!(calendar.viewed_instant().instant(), at(2024, 5, 14, 10));
        assert_eq!(calendar.viewed_instant().instant().day(), 14);
    }
}
