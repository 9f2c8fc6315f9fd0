// Segment module
// Day-bounded slice of an event, positioned by the collision layout

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use super::event::{ranges_collide, Event};

/// A single day's portion of an event, ready for drawing.
///
/// `left` and `width` are fractions of the day column. They stay at the
/// full-width default until the layout engine positions the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSegment {
    /// Copy of the event with start/end clamped to one day.
    pub event: Event,
    /// The untouched event this segment was cut from.
    pub original: Arc<Event>,
    pub left: f32,
    pub width: f32,
}

impl EventSegment {
    pub fn new(event: Event, original: Arc<Event>) -> Self {
        Self {
            event,
            original,
            left: 0.0,
            width: 1.0,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.event.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.event.end
    }

    /// Calendar day this segment is drawn on, taken from the segment start.
    pub fn date(&self) -> NaiveDate {
        self.event.start.date()
    }

    pub fn is_all_day(&self) -> bool {
        self.event.all_day
    }

    pub fn is_empty(&self) -> bool {
        self.event.start >= self.event.end
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Overlap on the segment's own (clamped) times.
    pub fn collides_with(&self, other: &EventSegment) -> bool {
        ranges_collide(self.start(), self.end(), other.start(), other.end())
    }

    /// True for the segment that carries the event's real start.
    pub fn is_first(&self) -> bool {
        self.event.start == self.original.start
    }

    /// True for the segment that carries the event's real end.
    pub fn is_last(&self) -> bool {
        self.event.end == self.original.end
    }
}
