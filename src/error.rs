//! Error types for sun-time and daylight conversions

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolarError {
    #[error("cannot parse time {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("empty daylight span (sunrise={sunrise}, sunset={sunset})")]
    InvalidRange { sunrise: i32, sunset: i32 },

    #[error("sun never rises on {date}")]
    SunNeverRises { date: NaiveDate },

    #[error("sun never sets on {date}")]
    SunNeverSets { date: NaiveDate },

    #[error("date/time out of range: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, SolarError>;
