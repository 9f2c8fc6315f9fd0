// Event module
// Calendar event as handed to the week view by the application's loader

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::date::is_same_day;

/// Opaque identifier chosen by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Calendar event displayed in the week view.
///
/// Times are wall-clock. The core never mutates an event; splitting produces
/// adjusted copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub location: Option<String>,
    pub color: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the application
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time, strictly after `start`
    ///
    /// # Examples
    /// ```
    /// use rust_week_view::models::event::{Event, EventId};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new(EventId(1), "Team Meeting", start, end).unwrap();
    /// assert!(event.is_same_day());
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let event = Self {
            id,
            title: title.into(),
            location: None,
            color: None,
            start,
            end,
            all_day: false,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if !self.is_valid_range() {
            return Err("Event end time must be after start time".to_string());
        }

        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// True when the event has a positive duration and can be laid out.
    pub fn is_valid_range(&self) -> bool {
        self.start < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn is_same_day(&self) -> bool {
        is_same_day(self.start, self.end)
    }

    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }

    /// Half-open overlap test; events that only touch do not collide.
    pub fn collides_with(&self, other: &Event) -> bool {
        ranges_collide(self.start, self.end, other.start, other.end)
    }

    /// True if the event overlaps the half-open range `[start, end)`.
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        ranges_collide(self.start, self.end, start, end)
    }

    /// Copy of this event moved to `[start, end)`.
    pub(crate) fn with_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }
}

pub(crate) fn ranges_collide(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    !(a_start >= b_end || a_end <= b_start)
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    location: Option<String>,
    color: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            location: None,
            color: None,
            start: None,
            end: None,
            all_day: false,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(EventId(id));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id,
            title,
            location: self.location,
            color: self.color,
            start,
            end,
            all_day: self.all_day,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
