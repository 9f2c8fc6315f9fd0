// Benchmark for collision layout and cache rebuilds
// Measures layout cost as the number of events per day grows

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_week_view::services::layout::layout;
use rust_week_view::services::splitter::split_into_segments;
use rust_week_view::{DayBounds, Event, EventCache, EventId, EventSegment, StaticEventLoader, WeekViewSettings};

// Deterministic spread of overlapping events across one week
fn week_of_events(count: usize) -> Vec<Event> {
    let monday = NaiveDate::from_ymd_opt(2025, 1, 6)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    (0..count)
        .map(|i| {
            let start = monday
                + Duration::days((i % 7) as i64)
                + Duration::minutes(((i * 37) % 600) as i64);
            let end = start + Duration::minutes(30 + ((i * 13) % 150) as i64);
            Event::new(EventId(i as u64), format!("Event {i}"), start, end).unwrap()
        })
        .collect()
}

fn segments_for(events: &[Event]) -> Vec<EventSegment> {
    events
        .iter()
        .flat_map(|event| split_into_segments(event, DayBounds::FULL_DAY))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for count in [10, 100, 1000].iter() {
        let segments = segments_for(&week_of_events(*count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &segments, |b, segments| {
            b.iter(|| layout(black_box(segments.clone())));
        });
    }

    group.finish();
}

fn bench_cache_reload(c: &mut Criterion) {
    let events = week_of_events(500);
    let anchor = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();

    c.bench_function("cache_invalidate_reload_500", |b| {
        let mut cache = EventCache::new(
            StaticEventLoader::new(events.clone()),
            WeekViewSettings::default(),
        )
        .unwrap();
        b.iter(|| {
            cache.invalidate();
            cache.ensure_loaded(black_box(anchor)).unwrap();
        });
    });
}

criterion_group!(benches, bench_layout, bench_cache_reload);
criterion_main!(benches);
