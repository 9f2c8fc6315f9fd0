//! Three-month event cache behind the week view.
//!
//! The cache keeps the events of the displayed month and its two neighbours
//! together with their laid-out segments. Moving the anchor by one month
//! reuses two of the three lists and loads only the new one. Every rebuild
//! produces a fresh [`CacheSnapshot`] that replaces the old one only after
//! all loads have succeeded.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{Result, WeekViewError};
use crate::models::event::Event;
use crate::models::period::{FetchWindow, Period, WindowSlot};
use crate::models::segment::EventSegment;
use crate::models::settings::{DayBounds, WeekViewSettings};
use crate::services::layout::layout_day;
use crate::services::splitter::split_into_segments;

mod loader;
mod reuse;

pub use loader::{EventLoader, StaticEventLoader};
pub use reuse::{plan_reuse, ReusePlan, SlotSource};

#[cfg(test)]
pub use loader::MockEventLoader;

/// Immutable result of one load: the window, its three event lists and
/// the positioned segments derived from them.
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    window: FetchWindow,
    previous: Arc<Vec<Event>>,
    current: Arc<Vec<Event>>,
    next: Arc<Vec<Event>>,
    segments: Arc<Vec<EventSegment>>,
}

impl CacheSnapshot {
    pub fn window(&self) -> FetchWindow {
        self.window
    }

    pub fn events(&self, slot: WindowSlot) -> &Arc<Vec<Event>> {
        match slot {
            WindowSlot::Previous => &self.previous,
            WindowSlot::Current => &self.current,
            WindowSlot::Next => &self.next,
        }
    }

    pub fn segments(&self) -> &[EventSegment] {
        &self.segments
    }

    fn lists(&self) -> [&[Event]; 3] {
        [
            self.previous.as_slice(),
            self.current.as_slice(),
            self.next.as_slice(),
        ]
    }
}

/// What a call to [`EventCache::ensure_loaded`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The requested window was already loaded.
    Unchanged,
    Reloaded {
        fetched: Vec<Period>,
        reused: Vec<Period>,
    },
}

/// Owns the loader and the current snapshot.
///
/// Not synchronised: drive it from one thread.
pub struct EventCache<L> {
    loader: L,
    settings: WeekViewSettings,
    bounds: DayBounds,
    snapshot: Option<CacheSnapshot>,
    invalidated: bool,
}

impl<L: EventLoader> EventCache<L> {
    pub fn new(loader: L, settings: WeekViewSettings) -> Result<Self> {
        let bounds = settings.day_bounds()?;
        Ok(Self {
            loader,
            settings,
            bounds,
            snapshot: None,
            invalidated: false,
        })
    }

    pub fn builder() -> EventCacheBuilder<L> {
        EventCacheBuilder::new()
    }

    /// Make sure the window around `anchor` is loaded and laid out.
    ///
    /// Does nothing when that window is already current and the cache has
    /// not been invalidated. A loader error is returned as
    /// [`WeekViewError::Load`] and leaves the previous snapshot in place.
    pub fn ensure_loaded(&mut self, anchor: NaiveDate) -> Result<LoadOutcome> {
        let requested = FetchWindow::from_date(anchor);
        let fetched_window = self.fetched_window();

        if !self.invalidated && fetched_window == Some(requested) {
            return Ok(LoadOutcome::Unchanged);
        }

        let plan = plan_reuse(fetched_window.as_ref(), &requested, self.invalidated);
        log::debug!("Loading window {requested}: {plan:?}");

        let mut fetched = Vec::new();
        let mut reused = Vec::new();
        let old = self.snapshot.as_ref();
        let loader = &mut self.loader;

        let mut resolve = |slot: WindowSlot| -> Result<Arc<Vec<Event>>> {
            let period = requested.get(slot);
            match (plan.get(slot), old) {
                (SlotSource::Reuse(old_slot), Some(snapshot)) => {
                    reused.push(period);
                    Ok(Arc::clone(snapshot.events(old_slot)))
                }
                _ => {
                    let events = loader.load(period).map_err(|source| {
                        log::warn!("Event loader failed for {period}: {source:#}");
                        WeekViewError::Load { period, source }
                    })?;
                    fetched.push(period);
                    Ok(Arc::new(events))
                }
            }
        };

        let previous = resolve(WindowSlot::Previous)?;
        let current = resolve(WindowSlot::Current)?;
        let next = resolve(WindowSlot::Next)?;

        let segments = build_segments(
            [previous.as_slice(), current.as_slice(), next.as_slice()],
            self.bounds,
            self.settings.sort_events,
        );

        log::info!(
            "Loaded window {requested}: {} fetched, {} reused, {} segments",
            fetched.len(),
            reused.len(),
            segments.len()
        );

        self.snapshot = Some(CacheSnapshot {
            window: requested,
            previous,
            current,
            next,
            segments: Arc::new(segments),
        });
        self.invalidated = false;

        Ok(LoadOutcome::Reloaded { fetched, reused })
    }

    /// Force the next `ensure_loaded` to fetch all three months again.
    pub fn invalidate(&mut self) {
        log::debug!("Event cache invalidated");
        self.invalidated = true;
    }

    /// Drop everything and return to the cold state.
    pub fn clear(&mut self) {
        self.snapshot = None;
        self.invalidated = false;
    }

    /// Replace the settings and re-run layout on the events already held.
    pub fn set_settings(&mut self, settings: WeekViewSettings) -> Result<()> {
        self.bounds = settings.day_bounds()?;
        self.settings = settings;

        if let Some(snapshot) = self.snapshot.as_mut() {
            let segments = build_segments(snapshot.lists(), self.bounds, self.settings.sort_events);
            snapshot.segments = Arc::new(segments);
        }
        Ok(())
    }

    pub fn settings(&self) -> &WeekViewSettings {
        &self.settings
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }
}

impl<L> EventCache<L> {
    pub fn is_cold(&self) -> bool {
        self.snapshot.is_none()
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    pub fn fetched_window(&self) -> Option<FetchWindow> {
        self.snapshot.as_ref().map(CacheSnapshot::window)
    }

    pub fn snapshot(&self) -> Option<&CacheSnapshot> {
        self.snapshot.as_ref()
    }

    /// Every positioned segment: days ascending, all-day before timed.
    pub fn segments(&self) -> &[EventSegment] {
        self.snapshot
            .as_ref()
            .map(CacheSnapshot::segments)
            .unwrap_or(&[])
    }

    pub fn segments_on(&self, date: NaiveDate) -> impl Iterator<Item = &EventSegment> {
        self.segments().iter().filter(move |s| s.date() == date)
    }

    pub fn all_day_segments_on(&self, date: NaiveDate) -> impl Iterator<Item = &EventSegment> {
        self.segments_on(date).filter(|s| s.is_all_day())
    }

    pub fn timed_segments_on(&self, date: NaiveDate) -> impl Iterator<Item = &EventSegment> {
        self.segments_on(date).filter(|s| !s.is_all_day())
    }

    /// Segments drawn on any day from `first` to `last`, inclusive.
    pub fn segments_between(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> impl Iterator<Item = &EventSegment> {
        self.segments()
            .iter()
            .filter(move |s| (first..=last).contains(&s.date()))
    }

    /// The event list held for `period`, if it is part of the fetched window.
    pub fn events_for(&self, period: Period) -> Option<&Arc<Vec<Event>>> {
        let snapshot = self.snapshot.as_ref()?;
        let slot = snapshot.window.slot_of(period)?;
        Some(snapshot.events(slot))
    }
}

/// Builder that insists on a loader before producing a cache.
pub struct EventCacheBuilder<L> {
    loader: Option<L>,
    settings: WeekViewSettings,
}

impl<L: EventLoader> EventCacheBuilder<L> {
    pub fn new() -> Self {
        Self {
            loader: None,
            settings: WeekViewSettings::default(),
        }
    }

    pub fn loader(mut self, loader: L) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn settings(mut self, settings: WeekViewSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Result<EventCache<L>> {
        let loader = self.loader.ok_or(WeekViewError::LoaderMissing)?;
        EventCache::new(loader, self.settings)
    }
}

impl<L: EventLoader> Default for EventCacheBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Split and lay out the events of the three lists.
///
/// Events without a positive duration are skipped. An event returned by more
/// than one load (same id and same range) is laid out once; entries that
/// share an id but cover different ranges are distinct occurrences. All-day
/// and timed segments of a day are laid out independently.
fn build_segments(lists: [&[Event]; 3], bounds: DayBounds, sort_events: bool) -> Vec<EventSegment> {
    let mut seen = HashSet::new();
    let mut days: BTreeMap<NaiveDate, (Vec<EventSegment>, Vec<EventSegment>)> = BTreeMap::new();

    for list in lists {
        let mut events: Vec<&Event> = list.iter().collect();
        if sort_events {
            events.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
        }

        for event in events {
            if !event.is_valid_range() {
                log::trace!("Skipping event {} with empty range", event.id);
                continue;
            }
            if !seen.insert((event.id, event.start, event.end)) {
                log::trace!("Skipping repeated event {} from a later list", event.id);
                continue;
            }

            let event_bounds = if event.all_day { DayBounds::FULL_DAY } else { bounds };
            for segment in split_into_segments(event, event_bounds) {
                if segment.is_empty() {
                    log::trace!("Dropping empty segment of {} on {}", event.id, segment.date());
                    continue;
                }
                let (all_day, timed) = days.entry(segment.date()).or_default();
                if segment.is_all_day() {
                    all_day.push(segment);
                } else {
                    timed.push(segment);
                }
            }
        }
    }

    let mut segments = Vec::new();
    for (_, (all_day, timed)) in days {
        segments.extend(layout_day(all_day));
        segments.extend(layout_day(timed));
    }
    segments
}
