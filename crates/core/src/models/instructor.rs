use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub bio: String,
    pub image_url: Option<String>,
    /// Login account of the instructor, when they have one.
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstructorRequest {
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub bio: String,
    pub image_url: Option<String>,
    pub user_id: Option<Uuid>,
}

impl CreateInstructorRequest {
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::Validation("Instructor name is required".to_string()));
        }
        Ok(())
    }
}
