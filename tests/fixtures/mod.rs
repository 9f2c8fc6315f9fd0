// Test fixtures - reusable test data
// Provides consistent events and loaders across all test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_week_view::{Event, EventId, EventLoader, Period, StaticEventLoader};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    /// 2025-01-`day` at `hour`:`minute`
    pub fn jan_at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        jan(day).and_hms_opt(hour, minute, 0).unwrap()
    }

    pub fn ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn timed(id: u64, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event {
            id: EventId(id),
            title: format!("Event {id}"),
            location: None,
            color: None,
            start,
            end,
            all_day: false,
        }
    }

    pub fn all_day(id: u64, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event {
            all_day: true,
            ..timed(id, start, end)
        }
    }

    /// E1 and E2 from the January walkthrough: overlapping morning meetings.
    pub fn overlapping_pair() -> Vec<Event> {
        vec![
            timed(1, dates::jan_at(5, 9, 0), dates::jan_at(5, 10, 0)),
            timed(2, dates::jan_at(5, 9, 30), dates::jan_at(5, 11, 0)),
        ]
    }

    /// Late-night trip spanning three calendar days.
    pub fn overnight_trip() -> Event {
        timed(3, dates::jan_at(5, 22, 0), dates::jan_at(7, 2, 0))
    }
}

/// Loader that remembers every period it was asked for.
pub struct RecordingLoader {
    inner: StaticEventLoader,
    pub calls: Vec<Period>,
}

impl RecordingLoader {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            inner: StaticEventLoader::new(events),
            calls: Vec::new(),
        }
    }
}

impl EventLoader for RecordingLoader {
    fn load(&mut self, period: Period) -> anyhow::Result<Vec<Event>> {
        self.calls.push(period);
        self.inner.load(period)
    }
}

pub fn period(month: u32, year: i32) -> Period {
    Period::new(month, year).unwrap()
}
