// Date utility functions
// Wall-clock helpers shared by the splitter and the cache

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Midnight that closes `date`, i.e. 00:00 of the following day.
///
/// Saturates to `NaiveDateTime::MAX` on the last representable day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    offset_from_midnight(date, Duration::days(1))
}

/// `date` at `hour`:00, the first instant of the visible hour range.
pub fn start_of_period(date: NaiveDate, hour: u32) -> NaiveDateTime {
    offset_from_midnight(date, Duration::hours(i64::from(hour)))
}

/// Exclusive end of the visible hour range on `date`.
///
/// `hour` is allowed to be 24, in which case this is the next midnight.
pub fn end_of_period(date: NaiveDate, hour: u32) -> NaiveDateTime {
    offset_from_midnight(date, Duration::hours(i64::from(hour)))
}

fn offset_from_midnight(date: NaiveDate, offset: Duration) -> NaiveDateTime {
    start_of_day(date)
        .checked_add_signed(offset)
        .unwrap_or(NaiveDateTime::MAX)
}

/// Inclusive iterator over the calendar days from `first` to `last`.
pub fn days_between(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    first.iter_days().take_while(move |day| *day <= last)
}
