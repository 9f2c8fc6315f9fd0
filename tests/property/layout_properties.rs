// Property-based tests for period arithmetic, splitting and collision layout
// Checks the layout invariants with randomly generated days of events

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_week_view::services::layout::{collision_groups, layout, layout_day, pack_columns};
use rust_week_view::services::splitter::{split_event, split_into_segments};
use rust_week_view::{DayBounds, EventSegment, Period};

use fixtures::events;

/// Up to a dozen events on 2025-01-05, in quarter-hour steps.
fn day_of_segments() -> impl Strategy<Value = Vec<EventSegment>> {
    prop::collection::vec((0u32..92, 1u32..16), 0..12).prop_map(|slots| {
        let day = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let midnight = day.and_hms_opt(0, 0, 0).unwrap();
        slots
            .into_iter()
            .enumerate()
            .map(|(i, (start_slot, length))| {
                let start = midnight + Duration::minutes(i64::from(start_slot) * 15);
                let end = (start + Duration::minutes(i64::from(length) * 15))
                    .min(midnight + Duration::days(1));
                let event = events::timed(i as u64, start, end);
                split_into_segments(&event, DayBounds::FULL_DAY).remove(0)
            })
            .collect()
    })
}

proptest! {
    /// Property: previous and next are inverse for every month
    #[test]
    fn prop_period_round_trip(month in 1..=12u32, year in 1900..2200i32) {
        let p = Period::new(month, year).unwrap();
        prop_assert_eq!(p.previous().next(), p);
        prop_assert_eq!(p.next().previous(), p);
    }

    /// Property: a multi-day event gives one contiguous piece per day it touches
    #[test]
    fn prop_split_covers_event(
        start_minute in 0i64..1440,
        length_minutes in 1i64..(6 * 1440),
    ) {
        let start = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap()
            + Duration::minutes(start_minute);
        let end = start + Duration::minutes(length_minutes);
        let event = events::timed(1, start, end);

        let pieces = split_event(&event, DayBounds::FULL_DAY);
        let last_day = (end - Duration::milliseconds(1)).date();
        let days = (last_day - start.date()).num_days() + 1;

        prop_assert_eq!(pieces.len() as i64, days);
        prop_assert_eq!(pieces[0].start, start);
        prop_assert_eq!(pieces[pieces.len() - 1].end, end);
        for pair in pieces.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
            prop_assert!(pair[0].start < pair[1].start);
        }
        for piece in &pieces {
            prop_assert!(piece.start < piece.end);
            prop_assert_eq!(piece.id, event.id);
        }
    }

    /// Property: segments sharing a column never overlap
    #[test]
    fn prop_same_column_never_overlaps(segments in day_of_segments()) {
        let laid_out = layout_day(segments);
        for (i, a) in laid_out.iter().enumerate() {
            for b in &laid_out[i + 1..] {
                if a.left == b.left && a.width == b.width {
                    prop_assert!(!a.collides_with(b), "{:?} and {:?} share a column", a.event, b.event);
                }
                if a.collides_with(b) {
                    prop_assert!(a.right() <= b.left + 1e-6 || b.right() <= a.left + 1e-6);
                }
            }
        }
    }

    /// Property: a group shares one width and fits inside the day
    #[test]
    fn prop_group_width_partition(segments in day_of_segments()) {
        for group in collision_groups(&segments) {
            let columns = pack_columns(&segments, &group);
            let laid_out = layout_day(group.members().iter().map(|&i| segments[i].clone()).collect());
            let expected = 1.0 / columns.len() as f32;
            for segment in &laid_out {
                prop_assert_eq!(segment.width, expected);
                prop_assert!(segment.right() <= 1.0 + 1e-6);
            }
        }
    }

    /// Property: laying out the same input twice gives the same positions
    #[test]
    fn prop_layout_is_deterministic(segments in day_of_segments()) {
        prop_assert_eq!(layout(segments.clone()), layout(segments));
    }
}
