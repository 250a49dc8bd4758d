use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::Result;
use paddock_core::models::{
    availability::TimeInterval,
    horse::Horse,
    instructor::Instructor,
    lesson::Lesson,
    message::TeamMessage,
    rental::MuseumRental,
    user::{User, UserCredentials},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInstructor {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbHorse {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub description: String,
    pub image_url: Option<String>,
    pub suitability: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWeeklyAvailability {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub week_start_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailabilityInterval {
    pub availability_id: Uuid,
    pub position: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLesson {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub lesson_type: String,
    pub instructor_id: Uuid,
    pub horse_id: Option<Uuid>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRental {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: i32,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeamMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl DbUser {
    pub fn into_credentials(self) -> Result<UserCredentials> {
        let password_hash = self.password_hash.clone();
        Ok(UserCredentials {
            user: self.into_user()?,
            password_hash,
        })
    }

    pub fn into_user(self) -> Result<User> {
        Ok(User {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            role: self.role.parse()?,
            created_at: self.created_at,
        })
    }
}

impl From<DbInstructor> for Instructor {
    fn from(row: DbInstructor) -> Self {
        Instructor {
            id: row.id,
            name: row.name,
            specialty: row.specialty,
            bio: row.bio,
            image_url: row.image_url,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

impl DbHorse {
    pub fn into_horse(self) -> Result<Horse> {
        Ok(Horse {
            id: self.id,
            name: self.name,
            breed: self.breed,
            age: self.age,
            description: self.description,
            image_url: self.image_url,
            suitability: self.suitability.parse()?,
            created_at: self.created_at,
        })
    }
}

impl From<DbAvailabilityInterval> for TimeInterval {
    fn from(row: DbAvailabilityInterval) -> Self {
        TimeInterval {
            date: row.date,
            start_time: row.start_time.into(),
            end_time: row.end_time.into(),
        }
    }
}

impl DbLesson {
    pub fn into_lesson(self) -> Result<Lesson> {
        Ok(Lesson {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            lesson_type: self.lesson_type.parse()?,
            instructor_id: self.instructor_id,
            horse_id: self.horse_id,
            date: self.date,
            time: self.time.into(),
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

impl DbRental {
    pub fn into_rental(self) -> Result<MuseumRental> {
        Ok(MuseumRental {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            email: self.email,
            date: self.date,
            time: self.time.into(),
            guests: self.guests,
            notes: self.notes,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

impl From<DbTeamMessage> for TeamMessage {
    fn from(row: DbTeamMessage) -> Self {
        TeamMessage {
            id: row.id,
            user_id: row.user_id,
            user_name: row.user_name,
            text: row.text,
            created_at: row.created_at,
        }
    }
}
