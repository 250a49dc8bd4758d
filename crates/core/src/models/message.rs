use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;

pub const MAX_MESSAGE_LENGTH: usize = 2000;
pub const DEFAULT_MESSAGE_LIMIT: u32 = 50;
pub const MAX_MESSAGE_LIMIT: u32 = 200;

/// A post on the staff team board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTeamMessage {
    pub user_id: Uuid,
    pub user_name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub text: String,
}

impl PostMessageRequest {
    /// Trimmed message text.
    pub fn validated_text(&self) -> Result<&str, BookingError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(BookingError::Validation("Message cannot be empty".to_string()));
        }
        if text.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(BookingError::Validation(format!(
                "Messages are limited to {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }
        Ok(text)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageQuery {
    pub limit: Option<u32>,
}

impl MessageQuery {
    /// Requested page size, clamped to `1..=MAX_MESSAGE_LIMIT`.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_MESSAGE_LIMIT)
            .clamp(1, MAX_MESSAGE_LIMIT)
    }
}
