use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
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

// Mock stores for testing
mock! {
    pub AvailabilityRepo {}

    #[async_trait]
    impl AvailabilityStore for AvailabilityRepo {
        async fn find_weekly_availability(
            &self,
            instructor_id: Uuid,
            week_start_date: NaiveDate,
        ) -> eyre::Result<Option<WeeklyAvailability>>;

        async fn save_weekly_availability(
            &self,
            availability: &WeeklyAvailability,
        ) -> eyre::Result<WeeklyAvailability>;
    }
}

mock! {
    pub LessonRepo {}

    #[async_trait]
    impl LessonStore for LessonRepo {
        async fn lessons_for_instructor_on(
            &self,
            instructor_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<Lesson>>;

        async fn lessons_for_horse_on(
            &self,
            horse_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<Lesson>>;

        async fn get_lesson(&self, id: Uuid) -> eyre::Result<Option<Lesson>>;

        async fn create_lesson(&self, lesson: &NewLesson) -> eyre::Result<Lesson>;

        async fn update_lesson(
            &self,
            id: Uuid,
            status: LessonStatus,
            horse_id: Option<Uuid>,
        ) -> eyre::Result<Lesson>;

        async fn lessons_for_instructor(&self, instructor_id: Uuid) -> eyre::Result<Vec<Lesson>>;

        async fn lessons_for_user(&self, user_id: Uuid) -> eyre::Result<Vec<Lesson>>;
    }
}

mock! {
    pub DirectoryRepo {}

    #[async_trait]
    impl DirectoryStore for DirectoryRepo {
        async fn get_user(&self, id: Uuid) -> eyre::Result<Option<User>>;

        async fn get_horse(&self, id: Uuid) -> eyre::Result<Option<Horse>>;

        async fn get_instructor(&self, id: Uuid) -> eyre::Result<Option<Instructor>>;
    }
}

mock! {
    pub AccountRepo {}

    #[async_trait]
    impl AccountStore for AccountRepo {
        async fn create_user(
            &self,
            email: &str,
            display_name: Option<String>,
            password_hash: &str,
            role: UserRole,
        ) -> eyre::Result<User>;

        async fn find_credentials(&self, email: &str) -> eyre::Result<Option<UserCredentials>>;
    }
}

mock! {
    pub RentalRepo {}

    #[async_trait]
    impl RentalStore for RentalRepo {
        async fn create_rental(&self, rental: &NewMuseumRental) -> eyre::Result<MuseumRental>;

        async fn get_rental(&self, id: Uuid) -> eyre::Result<Option<MuseumRental>>;

        async fn list_rentals(&self) -> eyre::Result<Vec<MuseumRental>>;

        async fn update_rental_status(
            &self,
            id: Uuid,
            status: RentalStatus,
        ) -> eyre::Result<MuseumRental>;
    }
}

mock! {
    pub MessageRepo {}

    #[async_trait]
    impl MessageStore for MessageRepo {
        async fn post_message(&self, message: &NewTeamMessage) -> eyre::Result<TeamMessage>;

        async fn recent_messages(&self, limit: u32) -> eyre::Result<Vec<TeamMessage>>;
    }
}
