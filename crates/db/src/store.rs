//! PostgreSQL implementation of the core store traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use paddock_core::{
    models::{
        availability::WeeklyAvailability,
        horse::Horse,
        instructor::Instructor,
        lesson::{Lesson, LessonStatus, NewLesson},
        message::{NewTeamMessage, TeamMessage},
        rental::{MuseumRental, NewMuseumRental, RentalStatus},
        user::{User, UserCredentials, UserRole},
    },
    store::{
        AccountStore, AvailabilityStore, DirectoryStore, LessonStore, MessageStore, RentalStore,
    },
};
use uuid::Uuid;

use crate::repositories::{availability, horse, instructor, lesson, message, rental, user};
use crate::DbPool;

/// Store handle over a shared connection pool. Cloning is cheap.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AvailabilityStore for PgStore {
    async fn find_weekly_availability(
        &self,
        instructor_id: Uuid,
        week_start_date: NaiveDate,
    ) -> Result<Option<WeeklyAvailability>> {
        availability::find_weekly_availability(&self.pool, instructor_id, week_start_date).await
    }

    async fn save_weekly_availability(
        &self,
        record: &WeeklyAvailability,
    ) -> Result<WeeklyAvailability> {
        availability::save_weekly_availability(&self.pool, record).await
    }
}

#[async_trait]
impl LessonStore for PgStore {
    async fn lessons_for_instructor_on(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Lesson>> {
        lesson::get_lessons_by_instructor_on(&self.pool, instructor_id, date).await
    }

    async fn lessons_for_horse_on(&self, horse_id: Uuid, date: NaiveDate) -> Result<Vec<Lesson>> {
        lesson::get_lessons_by_horse_on(&self.pool, horse_id, date).await
    }

    async fn get_lesson(&self, id: Uuid) -> Result<Option<Lesson>> {
        lesson::get_lesson_by_id(&self.pool, id).await
    }

    async fn create_lesson(&self, new_lesson: &NewLesson) -> Result<Lesson> {
        lesson::create_lesson(&self.pool, new_lesson).await
    }

    async fn update_lesson(
        &self,
        id: Uuid,
        status: LessonStatus,
        horse_id: Option<Uuid>,
    ) -> Result<Lesson> {
        lesson::update_lesson(&self.pool, id, status, horse_id).await
    }

    async fn lessons_for_instructor(&self, instructor_id: Uuid) -> Result<Vec<Lesson>> {
        lesson::get_active_lessons_by_instructor(&self.pool, instructor_id).await
    }

    async fn lessons_for_user(&self, user_id: Uuid) -> Result<Vec<Lesson>> {
        lesson::get_lessons_by_user(&self.pool, user_id).await
    }
}

#[async_trait]
impl DirectoryStore for PgStore {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        user::get_user_by_id(&self.pool, id).await
    }

    async fn get_horse(&self, id: Uuid) -> Result<Option<Horse>> {
        horse::get_horse_by_id(&self.pool, id).await
    }

    async fn get_instructor(&self, id: Uuid) -> Result<Option<Instructor>> {
        instructor::get_instructor_by_id(&self.pool, id).await
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn create_user(
        &self,
        email: &str,
        display_name: Option<String>,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User> {
        user::create_user(&self.pool, email, display_name.as_deref(), password_hash, role).await
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>> {
        user::find_credentials(&self.pool, email).await
    }
}

#[async_trait]
impl RentalStore for PgStore {
    async fn create_rental(&self, new_rental: &NewMuseumRental) -> Result<MuseumRental> {
        rental::create_rental(&self.pool, new_rental).await
    }

    async fn get_rental(&self, id: Uuid) -> Result<Option<MuseumRental>> {
        rental::get_rental_by_id(&self.pool, id).await
    }

    async fn list_rentals(&self) -> Result<Vec<MuseumRental>> {
        rental::list_rentals(&self.pool).await
    }

    async fn update_rental_status(&self, id: Uuid, status: RentalStatus) -> Result<MuseumRental> {
        rental::update_rental_status(&self.pool, id, status).await
    }
}

#[async_trait]
impl MessageStore for PgStore {
    async fn post_message(&self, new_message: &NewTeamMessage) -> Result<TeamMessage> {
        message::create_message(&self.pool, new_message).await
    }

    async fn recent_messages(&self, limit: u32) -> Result<Vec<TeamMessage>> {
        message::get_recent_messages(&self.pool, limit).await
    }
}
