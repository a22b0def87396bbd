#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("Latitude '{latitude}' is out of range (valid: -90..=90)")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("Longitude '{longitude}' is out of range (valid: -180..=180)")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("Length '{length}' is invalid (must be a positive number)")]
    InvalidLength { length: usize },

    #[error("Timestamp '{secs}' is out of range")]
    TimestampOutOfRange { secs: i64 },
}
