//! Minute-precision wall-clock times written as `HH:MM`.

use std::{fmt, str::FromStr};

use jiff::civil::{self, Time};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ErrandError, Result};

/// A wall-clock time of day with minute precision.
///
/// Parsed from and displayed as zero-padded `HH:MM`, so the chronological
/// ordering of two values matches the lexical ordering of their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(Time);

impl ClockTime {
    /// Deadline used for urgent tasks that carry no closing time.
    pub const END_OF_DAY: ClockTime = ClockTime(civil::time(23, 59, 0, 0));

    /// Midnight, the earliest representable clock time.
    pub const MIDNIGHT: ClockTime = ClockTime(civil::time(0, 0, 0, 0));

    /// Creates a clock time from an hour (0-23) and minute (0-59).
    pub fn new(hour: i8, minute: i8) -> Result<Self> {
        Time::new(hour, minute, 0, 0).map(Self).map_err(|e| {
            ErrandError::invalid_input("time").with_reason(format!("{hour}:{minute}: {e}"))
        })
    }

    /// Truncates a civil time to minute precision.
    pub fn from_time(time: Time) -> Self {
        Self(civil::time(time.hour(), time.minute(), 0, 0))
    }

    /// Builds a clock time from minutes elapsed since midnight.
    pub fn from_minutes(minutes: i32) -> Result<Self> {
        if !(0..24 * 60).contains(&minutes) {
            return Err(ErrandError::invalid_input("time")
                .with_reason(format!("{minutes} minutes is outside a single day")));
        }
        // Both components are range-checked above.
        Self::new((minutes / 60) as i8, (minutes % 60) as i8)
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> i32 {
        i32::from(self.0.hour()) * 60 + i32::from(self.0.minute())
    }

    /// The underlying civil time.
    pub fn as_time(&self) -> Time {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ErrandError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            ErrandError::invalid_input("time").with_reason(format!("expected HH:MM, got '{s}'"))
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = hour.parse::<i8>().map_err(|_| invalid())?;
        let minute = minute.parse::<i8>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Deserializes an optional clock time, treating `null` and blank strings as
/// absent.
pub fn deserialize_optional<'de, D>(deserializer: D) -> std::result::Result<Option<ClockTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(de::Error::custom),
    }
}
