//! Museum rental requests: a member asks to host an event in the museum on
//! a given date, and a manager confirms or cancels the request.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;
use crate::slots::TimeOfDay;

pub const MAX_RENTAL_GUESTS: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "Pending",
            RentalStatus::Confirmed => "Confirmed",
            RentalStatus::Cancelled => "Cancelled",
        }
    }

    pub fn can_transition_to(&self, next: RentalStatus) -> bool {
        matches!(
            (self, next),
            (RentalStatus::Pending, RentalStatus::Confirmed)
                | (RentalStatus::Pending, RentalStatus::Cancelled)
                | (RentalStatus::Confirmed, RentalStatus::Cancelled)
        )
    }
}

impl FromStr for RentalStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RentalStatus::Pending),
            "Confirmed" => Ok(RentalStatus::Confirmed),
            "Cancelled" => Ok(RentalStatus::Cancelled),
            other => Err(BookingError::Validation(format!("Unknown rental status '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuseumRental {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub guests: i32,
    pub notes: Option<String>,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
}

/// A rental about to be stored; always starts Pending.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMuseumRental {
    pub user_id: Uuid,
    pub user_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub guests: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalRequest {
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub guests: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RentalRequest {
    pub fn validate(&self, today: NaiveDate) -> Result<(), BookingError> {
        if self.date < today {
            return Err(BookingError::Validation(
                "Rentals cannot be requested for past dates".to_string(),
            ));
        }
        if !(1..=MAX_RENTAL_GUESTS).contains(&self.guests) {
            return Err(BookingError::Validation(format!(
                "Guest count must be between 1 and {}",
                MAX_RENTAL_GUESTS
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalStatusUpdate {
    pub status: RentalStatus,
}
