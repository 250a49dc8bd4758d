use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;
use crate::slots::TimeOfDay;

/// Minimum notice for cancelling a lesson.
pub const CANCELLATION_NOTICE_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl LessonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::Pending => "Pending",
            LessonStatus::Confirmed => "Confirmed",
            LessonStatus::Cancelled => "Cancelled",
        }
    }

    /// Cancelled is terminal; everything else may only move forward.
    pub fn can_transition_to(&self, next: LessonStatus) -> bool {
        matches!(
            (self, next),
            (LessonStatus::Pending, LessonStatus::Confirmed)
                | (LessonStatus::Pending, LessonStatus::Cancelled)
                | (LessonStatus::Confirmed, LessonStatus::Cancelled)
        )
    }
}

impl FromStr for LessonStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(LessonStatus::Pending),
            "Confirmed" => Ok(LessonStatus::Confirmed),
            "Cancelled" => Ok(LessonStatus::Cancelled),
            other => Err(BookingError::Validation(format!("Unknown lesson status '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LessonType {
    #[default]
    Regular,
    Therapy,
}

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Regular => "Regular",
            LessonType::Therapy => "Therapy",
        }
    }
}

impl FromStr for LessonType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(LessonType::Regular),
            "Therapy" => Ok(LessonType::Therapy),
            other => Err(BookingError::Validation(format!("Unknown lesson type '{other}'"))),
        }
    }
}

/// A rider's reservation of one slot with one instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub lesson_type: LessonType,
    pub instructor_id: Uuid,
    pub horse_id: Option<Uuid>,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub status: LessonStatus,
    pub created_at: DateTime<Utc>,
}

impl Lesson {
    /// Whether this lesson keeps its slot off the availability list.
    pub fn blocks_slot(&self) -> bool {
        self.status != LessonStatus::Cancelled
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.as_naive())
    }

    pub fn is_cancelable(&self, now: NaiveDateTime) -> bool {
        self.status != LessonStatus::Cancelled
            && self.starts_at() > now + Duration::hours(CANCELLATION_NOTICE_HOURS)
    }
}

/// Fields needed to persist a new lesson. Status always starts as Pending.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLesson {
    pub user_id: Uuid,
    pub user_name: String,
    pub lesson_type: LessonType,
    pub instructor_id: Uuid,
    pub horse_id: Option<Uuid>,
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookLessonRequest {
    #[serde(default)]
    pub lesson_type: LessonType,
    pub instructor_id: Uuid,
    pub horse_id: Option<Uuid>,
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignHorseRequest {
    pub horse_id: Uuid,
}
