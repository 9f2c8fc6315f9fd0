use anyhow::Result;

use crate::models::event::Event;
use crate::models::period::Period;

/// Source of events for one month, supplied by the application.
///
/// Implementations should return every event whose range intersects the
/// period; extra events are tolerated. Calls are synchronous and any error
/// is handed straight back to the caller of `EventCache::ensure_loaded`.
#[cfg_attr(test, mockall::automock)]
pub trait EventLoader {
    fn load(&mut self, period: Period) -> Result<Vec<Event>>;
}

impl<F> EventLoader for F
where
    F: FnMut(Period) -> Result<Vec<Event>>,
{
    fn load(&mut self, period: Period) -> Result<Vec<Event>> {
        self(period)
    }
}

/// Loader over a fixed, in-memory list of events.
#[derive(Debug, Clone, Default)]
pub struct StaticEventLoader {
    events: Vec<Event>,
}

impl StaticEventLoader {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl EventLoader for StaticEventLoader {
    fn load(&mut self, period: Period) -> Result<Vec<Event>> {
        let (start, end) = period.date_range();
        Ok(self
            .events
            .iter()
            .filter(|event| event.intersects(start, end))
            .cloned()
            .collect())
    }
}
