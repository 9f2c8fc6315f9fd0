//! Splits events into one piece per calendar day.
//!
//! Multi-day events are cut at day boundaries and each piece is clamped to
//! the visible hour range. An event that ends exactly at the midnight after
//! its start day stays in one piece instead of leaving an empty sliver on
//! the following day.

use std::sync::Arc;

use chrono::Duration;

use crate::models::event::Event;
use crate::models::segment::EventSegment;
use crate::models::settings::DayBounds;
use crate::utils::date::{days_between, end_of_day, end_of_period, start_of_period};

/// Split `event` into day-bounded copies, ordered by start then end.
///
/// Callers must only pass events with `start < end`; the cache filters the
/// rest before they reach this point.
pub fn split_event(event: &Event, bounds: DayBounds) -> Vec<Event> {
    let start_day = event.start.date();
    // Ending at midnight counts as ending on the previous day.
    let end_day = (event.end - Duration::milliseconds(1)).date();

    if bounds.min_hour() == 0 && event.end == end_of_day(start_day) {
        let end = end_of_period(start_day, bounds.max_hour());
        return vec![event.with_range(event.start, end)];
    }

    if start_day == end_day {
        return vec![event.clone()];
    }

    let mut pieces = Vec::new();
    pieces.push(event.with_range(event.start, end_of_period(start_day, bounds.max_hour())));

    if let Some(first_full_day) = start_day.succ_opt() {
        for day in days_between(first_full_day, end_day).take_while(|day| *day < end_day) {
            pieces.push(event.with_range(
                start_of_period(day, bounds.min_hour()),
                end_of_period(day, bounds.max_hour()),
            ));
        }
    }

    pieces.push(event.with_range(start_of_period(end_day, bounds.min_hour()), event.end));

    // Stable: identical ranges keep generation order.
    pieces.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    pieces
}

/// Split `event` and wrap every piece with a shared reference to the original.
pub fn split_into_segments(event: &Event, bounds: DayBounds) -> Vec<EventSegment> {
    let original = Arc::new(event.clone());
    split_event(event, bounds)
        .into_iter()
        .map(|piece| EventSegment::new(piece, Arc::clone(&original)))
        .collect()
}
