use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::slots::{week_start, TimeOfDay};

/// One open interval an instructor declared for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl TimeInterval {
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }
}

/// An instructor's declared open intervals for one Monday-aligned week.
///
/// Intervals are kept in the order they were added and are not checked
/// against each other for overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub week_start_date: NaiveDate,
    pub time_slots: Vec<TimeInterval>,
}

impl WeeklyAvailability {
    /// Creates an empty record for the week containing `date`.
    pub fn for_week_of(instructor_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            instructor_id,
            week_start_date: week_start(date),
            time_slots: Vec::new(),
        }
    }

    pub fn add_interval(&mut self, interval: TimeInterval) -> BookingResult<()> {
        if !interval.is_well_formed() {
            return Err(BookingError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        if week_start(interval.date) != self.week_start_date {
            return Err(BookingError::Validation(format!(
                "{} is outside the week starting {}",
                interval.date, self.week_start_date
            )));
        }

        if self.time_slots.contains(&interval) {
            return Err(BookingError::Conflict(format!(
                "Interval {}-{} on {} already exists",
                interval.start_time, interval.end_time, interval.date
            )));
        }

        self.time_slots.push(interval);
        Ok(())
    }

    /// Drops every interval equal to `interval`.
    pub fn remove_interval(&mut self, interval: &TimeInterval) -> BookingResult<()> {
        let before = self.time_slots.len();
        self.time_slots.retain(|slot| slot != interval);

        if self.time_slots.len() == before {
            return Err(BookingError::NotFound(format!(
                "No interval {}-{} on {}",
                interval.start_time, interval.end_time, interval.date
            )));
        }
        Ok(())
    }

    /// The intervals declared for `date`, earliest first.
    pub fn intervals_on(&self, date: NaiveDate) -> Vec<&TimeInterval> {
        let mut intervals: Vec<&TimeInterval> = self
            .time_slots
            .iter()
            .filter(|slot| slot.date == date)
            .collect();
        intervals.sort_by_key(|slot| slot.start_time);
        intervals
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: NaiveDate,
    pub horse_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub instructor_id: Uuid,
    pub horse_id: Option<Uuid>,
    pub date: NaiveDate,
    pub slots: Vec<TimeOfDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekQuery {
    pub week_start: NaiveDate,
}
