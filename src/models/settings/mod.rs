// Settings module
// Week view configuration and the visible hour range derived from it

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeekViewError};

/// Visible hour range of a day column, `[min_hour, max_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    min_hour: u32,
    max_hour: u32,
}

impl DayBounds {
    /// Whole day, used for all-day events.
    pub const FULL_DAY: DayBounds = DayBounds {
        min_hour: 0,
        max_hour: 24,
    };

    pub fn new(min_hour: u32, max_hour: u32) -> Result<Self> {
        if min_hour >= max_hour || max_hour > 24 {
            return Err(WeekViewError::InvalidDayBounds { min_hour, max_hour });
        }
        Ok(Self { min_hour, max_hour })
    }

    pub fn min_hour(&self) -> u32 {
        self.min_hour
    }

    pub fn max_hour(&self) -> u32 {
        self.max_hour
    }
}

impl Default for DayBounds {
    fn default() -> Self {
        Self::FULL_DAY
    }
}

/// User-facing week view configuration, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekViewSettings {
    /// First visible hour (0-23)
    pub min_hour: u32,
    /// Hour the grid ends at (1-24, exclusive)
    pub max_hour: u32,
    /// Sort each fetched month chronologically before layout
    pub sort_events: bool,
}

impl Default for WeekViewSettings {
    fn default() -> Self {
        Self {
            min_hour: 0,
            max_hour: 24,
            sort_events: false,
        }
    }
}

impl WeekViewSettings {
    pub fn validate(&self) -> Result<()> {
        self.day_bounds().map(|_| ())
    }

    pub fn day_bounds(&self) -> Result<DayBounds> {
        DayBounds::new(self.min_hour, self.max_hour)
    }
}
