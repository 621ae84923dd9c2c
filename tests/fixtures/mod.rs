// Test fixtures - reusable test data
// Provides consistent dates and calendars across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use month_calendar::models::event_list::EventList;
use month_calendar::services::clock::FixedClock;
use month_calendar::services::navigation::MonthCalendar;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    /// Tuesday 14 May 2024, mid-morning
    pub fn may_14_2024() -> NaiveDateTime {
        at(2024, 5, 14, 10)
    }

    /// Thursday 29 Feb 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        at(2024, 2, 29, 12)
    }

    /// Saturday 19 Aug 2023
    pub fn mid_2023() -> NaiveDateTime {
        at(2023, 8, 19, 15)
    }
}

/// A calendar whose clock is frozen at `now`.
pub fn calendar_at(now: NaiveDateTime) -> MonthCalendar {
    MonthCalendar::new(Box::new(FixedClock(now)), EventList::new())
}

pub fn calendar_with_events(now: NaiveDateTime, events: EventList) -> MonthCalendar {
    MonthCalendar::new(Box::new(FixedClock(now)), events)
}
