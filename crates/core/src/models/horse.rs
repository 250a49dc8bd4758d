use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;
use crate::models::lesson::LessonType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    Beginner,
    Intermediate,
    Advanced,
    Therapy,
}

impl Suitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Beginner => "Beginner",
            Suitability::Intermediate => "Intermediate",
            Suitability::Advanced => "Advanced",
            Suitability::Therapy => "Therapy",
        }
    }
}

impl FromStr for Suitability {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Suitability::Beginner),
            "Intermediate" => Ok(Suitability::Intermediate),
            "Advanced" => Ok(Suitability::Advanced),
            "Therapy" => Ok(Suitability::Therapy),
            other => Err(BookingError::Validation(format!("Unknown suitability '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horse {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub description: String,
    pub image_url: Option<String>,
    pub suitability: Suitability,
    pub created_at: DateTime<Utc>,
}

impl Horse {
    /// Therapy lessons are restricted to therapy horses; any horse can take a
    /// regular lesson.
    pub fn suits(&self, lesson_type: LessonType) -> bool {
        match lesson_type {
            LessonType::Therapy => self.suitability == Suitability::Therapy,
            LessonType::Regular => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHorseRequest {
    pub name: String,
    pub breed: String,
    pub age: i32,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub suitability: Suitability,
}

impl CreateHorseRequest {
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::Validation("Horse name is required".to_string()));
        }
        if self.age < 0 {
            return Err(BookingError::Validation("Horse age cannot be negative".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHorseRequest {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub suitability: Option<Suitability>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HorseQuery {
    pub lesson_type: Option<LessonType>,
}
