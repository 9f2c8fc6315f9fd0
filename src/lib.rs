// Rust Week View Library
// Event layout core for a calendar week view: per-day splitting,
// collision columns and the three-month event cache

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Result, WeekViewError};
pub use models::event::{Event, EventId};
pub use models::period::{FetchWindow, Period, WindowSlot};
pub use models::segment::EventSegment;
pub use models::settings::{DayBounds, WeekViewSettings};
pub use services::cache::{EventCache, EventCacheBuilder, EventLoader, LoadOutcome, StaticEventLoader};
