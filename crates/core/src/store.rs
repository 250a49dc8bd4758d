//! # Store Traits
//!
//! The resolver and booking workflow read and write through these traits
//! instead of a shared connection, so the persistence layer is passed in by
//! the caller. `paddock-db` implements them over PostgreSQL and provides
//! `mockall` mocks; tests in this crate use in-memory fakes.
//!
//! All methods report backend failures as `eyre::Report`. Callers wrap them
//! into [`BookingError::Database`](crate::errors::BookingError::Database).

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    availability::WeeklyAvailability,
    horse::Horse,
    instructor::Instructor,
    lesson::{Lesson, LessonStatus, NewLesson},
    message::{NewTeamMessage, TeamMessage},
    rental::{MuseumRental, NewMuseumRental, RentalStatus},
    user::{User, UserCredentials, UserRole},
};

#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Point lookup of the record for one instructor and week.
    async fn find_weekly_availability(
        &self,
        instructor_id: Uuid,
        week_start_date: NaiveDate,
    ) -> eyre::Result<Option<WeeklyAvailability>>;

    /// Inserts the record or replaces its interval list wholesale.
    async fn save_weekly_availability(
        &self,
        availability: &WeeklyAvailability,
    ) -> eyre::Result<WeeklyAvailability>;
}

#[async_trait]
pub trait LessonStore: Send + Sync {
    async fn lessons_for_instructor_on(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> eyre::Result<Vec<Lesson>>;

    async fn lessons_for_horse_on(&self, horse_id: Uuid, date: NaiveDate)
        -> eyre::Result<Vec<Lesson>>;

    async fn get_lesson(&self, id: Uuid) -> eyre::Result<Option<Lesson>>;

    async fn create_lesson(&self, lesson: &NewLesson) -> eyre::Result<Lesson>;

    async fn update_lesson(
        &self,
        id: Uuid,
        status: LessonStatus,
        horse_id: Option<Uuid>,
    ) -> eyre::Result<Lesson>;

    /// Non-cancelled lessons, ordered by date and time.
    async fn lessons_for_instructor(&self, instructor_id: Uuid) -> eyre::Result<Vec<Lesson>>;

    async fn lessons_for_user(&self, user_id: Uuid) -> eyre::Result<Vec<Lesson>>;
}

/// Lookups of the people and horses a booking refers to.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn get_user(&self, id: Uuid) -> eyre::Result<Option<User>>;

    async fn get_horse(&self, id: Uuid) -> eyre::Result<Option<Horse>>;

    async fn get_instructor(&self, id: Uuid) -> eyre::Result<Option<Instructor>>;
}

/// Account creation and sign-in lookups.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fails if the email is already registered.
    async fn create_user(
        &self,
        email: &str,
        display_name: Option<String>,
        password_hash: &str,
        role: UserRole,
    ) -> eyre::Result<User>;

    /// Case-insensitive lookup by email.
    async fn find_credentials(&self, email: &str) -> eyre::Result<Option<UserCredentials>>;
}

#[async_trait]
pub trait RentalStore: Send + Sync {
    async fn create_rental(&self, rental: &NewMuseumRental) -> eyre::Result<MuseumRental>;

    async fn get_rental(&self, id: Uuid) -> eyre::Result<Option<MuseumRental>>;

    /// All requests, soonest event first.
    async fn list_rentals(&self) -> eyre::Result<Vec<MuseumRental>>;

    async fn update_rental_status(&self, id: Uuid, status: RentalStatus)
        -> eyre::Result<MuseumRental>;
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn post_message(&self, message: &NewTeamMessage) -> eyre::Result<TeamMessage>;

    /// The latest `limit` messages, oldest first.
    async fn recent_messages(&self, limit: u32) -> eyre::Result<Vec<TeamMessage>>;
}
