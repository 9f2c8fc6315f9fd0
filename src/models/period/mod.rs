// Period module
// One-month fetch granule and the three-month window kept resident around it

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::{Result, WeekViewError};
use crate::utils::date::start_of_day;

/// A calendar month used as the unit of event loading.
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, rejecting months outside `1..=12` and years chrono
    /// cannot represent.
    ///
    /// # Examples
    /// ```
    /// use rust_week_view::models::period::Period;
    ///
    /// let period = Period::new(12, 2024).unwrap();
    /// assert_eq!(period.next(), Period::new(1, 2025).unwrap());
    /// assert!(Period::new(13, 2024).is_err());
    /// assert!(Period::new(1, i32::MAX).is_err());
    /// ```
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(WeekViewError::InvalidPeriod { month });
        }
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(WeekViewError::InvalidYear { year });
        }
        Ok(Self { year, month })
    }

    /// The period containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year.saturating_sub(1),
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year.saturating_add(1),
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// First calendar day of the month.
    ///
    /// Saturates to chrono's representable range for years it cannot express.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }

    /// Last calendar day of the month (handles leap years).
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Half-open datetime range `[first day 00:00, first day of next month 00:00)`.
    pub fn date_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        (
            start_of_day(self.first_day()),
            start_of_day(self.next().first_day()),
        )
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Position of a period inside a [`FetchWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowSlot {
    Previous,
    Current,
    Next,
}

impl WindowSlot {
    pub const ALL: [WindowSlot; 3] = [WindowSlot::Previous, WindowSlot::Current, WindowSlot::Next];
}

/// Three consecutive periods centred on the one being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchWindow {
    pub previous: Period,
    pub current: Period,
    pub next: Period,
}

impl FetchWindow {
    /// Window centred on the month containing `anchor`.
    pub fn from_date(anchor: NaiveDate) -> Self {
        Self::around(Period::from_date(anchor))
    }

    pub fn around(current: Period) -> Self {
        Self {
            previous: current.previous(),
            current,
            next: current.next(),
        }
    }

    pub fn periods(&self) -> [Period; 3] {
        [self.previous, self.current, self.next]
    }

    pub fn get(&self, slot: WindowSlot) -> Period {
        match slot {
            WindowSlot::Previous => self.previous,
            WindowSlot::Current => self.current,
            WindowSlot::Next => self.next,
        }
    }

    pub fn contains(&self, period: Period) -> bool {
        self.slot_of(period).is_some()
    }

    pub fn slot_of(&self, period: Period) -> Option<WindowSlot> {
        WindowSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) == period)
    }

    /// Dates covered by the window, first day of `previous` to last day of `next`.
    pub fn date_span(&self) -> (NaiveDate, NaiveDate) {
        (self.previous.first_day(), self.next.last_day())
    }
}

impl fmt::Display for FetchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.previous, self.current, self.next)
    }
}
