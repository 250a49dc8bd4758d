//! # Slot Arithmetic
//!
//! Lesson times are exchanged as zero-padded `HH:MM` strings. This module owns
//! that representation ([`TimeOfDay`]), the slot size used to discretise an
//! instructor's open intervals ([`SlotGranularity`]), and the calendar helpers
//! the resolver needs to find an availability record for a date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{BookingError, BookingResult};
use crate::models::availability::TimeInterval;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, written as `HH:MM`.
///
/// Ordering follows the clock, which for the zero-padded string form is the
/// same as lexicographic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> BookingResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TimeOfDay)
            .ok_or_else(|| BookingError::Validation(format!("Invalid time {hour}:{minute}")))
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // Seconds never take part in slot matching.
        TimeOfDay(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 5 {
            return Err(BookingError::Validation(format!(
                "Time must be formatted as HH:MM, got '{s}'"
            )));
        }
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(TimeOfDay)
            .map_err(|_| BookingError::Validation(format!("Time must be formatted as HH:MM, got '{s}'")))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Fixed slot duration in minutes.
///
/// Must divide a day evenly so that slot boundaries line up from one interval
/// to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGranularity(u32);

impl SlotGranularity {
    pub fn from_minutes(minutes: u32) -> BookingResult<Self> {
        if minutes == 0 || minutes > MINUTES_PER_DAY || MINUTES_PER_DAY % minutes != 0 {
            return Err(BookingError::Validation(format!(
                "Slot granularity must divide a day evenly, got {minutes} minutes"
            )));
        }
        Ok(SlotGranularity(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl Default for SlotGranularity {
    fn default() -> Self {
        SlotGranularity(60)
    }
}

/// Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Days::new(u64::from(offset))
}

/// Expands an open interval into slot start times.
///
/// Slots are anchored at `start_time` and only whole slots that end on or
/// before `end_time` are produced. An interval whose start is not before its
/// end yields nothing.
pub fn expand_interval(interval: &TimeInterval, granularity: SlotGranularity) -> Vec<TimeOfDay> {
    let step = granularity.duration();
    let end = interval.end_time.as_naive();
    let mut cursor = interval.start_time.as_naive();
    let mut slots = Vec::new();

    while cursor < end {
        let (next, wrapped) = cursor.overflowing_add_signed(step);
        if wrapped != 0 || next > end {
            break;
        }
        slots.push(TimeOfDay(cursor));
        cursor = next;
    }

    slots
}
