//! Error types for the week view core.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::period::Period;

/// Failures surfaced by the week view core.
///
/// Loader failures are carried through untouched in [`WeekViewError::Load`];
/// the cache never retries them.
#[derive(Error, Debug)]
pub enum WeekViewError {
    #[error("Invalid month {month}: expected a value between 1 and 12")]
    InvalidPeriod { month: u32 },

    #[error("Invalid year {year}: outside the supported calendar range")]
    InvalidYear { year: i32 },

    #[error("Invalid hour range {min_hour}..{max_hour}: need min_hour < max_hour <= 24")]
    InvalidDayBounds { min_hour: u32, max_hour: u32 },

    #[error("No event loader registered: call EventCacheBuilder::loader before build")]
    LoaderMissing,

    #[error("Failed to load events for {period}")]
    Load {
        period: Period,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read settings from {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings to {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Settings error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WeekViewError>;
