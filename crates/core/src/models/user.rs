use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Rider,
    Instructor,
    Manager,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Rider => "Rider",
            UserRole::Instructor => "Instructor",
            UserRole::Manager => "Manager",
            UserRole::Admin => "Admin",
        }
    }

    /// Instructors, managers and admins work the back office.
    pub fn is_staff(&self) -> bool {
        !matches!(self, UserRole::Rider)
    }

    /// Only managers and admins edit the horse and instructor rosters.
    pub fn manages_roster(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Admin)
    }
}

impl FromStr for UserRole {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rider" => Ok(UserRole::Rider),
            "Instructor" => Ok(UserRole::Instructor),
            "Manager" => Ok(UserRole::Manager),
            "Admin" => Ok(UserRole::Admin),
            other => Err(BookingError::Validation(format!("Unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name shown on lessons; falls back to the email address.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    /// Defaults to Rider. Staff roles need `registration_code`.
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub registration_code: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), BookingError> {
        if !self.email.contains('@') {
            return Err(BookingError::Validation("A valid email address is required".to_string()));
        }
        if self.password.len() < 8 {
            return Err(BookingError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        Ok(())
    }

    /// The role the new account gets. Instructor and Manager sign-ups must
    /// present the center's staff code; admins are never self-registered.
    pub fn granted_role(&self, staff_code: Option<&str>) -> Result<UserRole, BookingError> {
        match self.role.unwrap_or(UserRole::Rider) {
            UserRole::Rider => Ok(UserRole::Rider),
            UserRole::Admin => Err(BookingError::Authorization(
                "Admin accounts cannot be self-registered".to_string(),
            )),
            role @ (UserRole::Instructor | UserRole::Manager) => {
                let presented = self.registration_code.as_deref().map(str::trim);
                match (staff_code, presented) {
                    (Some(expected), Some(code)) if !expected.is_empty() && code == expected => {
                        Ok(role)
                    }
                    _ => Err(BookingError::Authorization(
                        "Invalid registration code".to_string(),
                    )),
                }
            }
        }
    }
}

/// A stored account together with its password hash, for sign-in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
