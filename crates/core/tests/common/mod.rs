#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::eyre;
use paddock_core::{
    models::{
        availability::{TimeInterval, WeeklyAvailability},
        horse::{Horse, Suitability},
        instructor::Instructor,
        lesson::{Lesson, LessonStatus, LessonType, NewLesson},
        message::{NewTeamMessage, TeamMessage},
        rental::{MuseumRental, NewMuseumRental, RentalStatus},
        user::{User, UserRole},
    },
    store::{AvailabilityStore, DirectoryStore, LessonStore, MessageStore, RentalStore},
};
use uuid::Uuid;

/// In-memory stand-in for every store, with switches to simulate backend
/// failures on the read paths the resolver uses.
#[derive(Default)]
pub struct FakeStore {
    pub availability: Mutex<Vec<WeeklyAvailability>>,
    pub lessons: Mutex<Vec<Lesson>>,
    pub users: Mutex<Vec<User>>,
    pub horses: Mutex<Vec<Horse>>,
    pub instructors: Mutex<Vec<Instructor>>,
    pub rentals: Mutex<Vec<MuseumRental>>,
    pub messages: Mutex<Vec<TeamMessage>>,
    pub fail_availability: bool,
    pub fail_horse_lessons: bool,
    pub instructor_queries: Mutex<u32>,
    pub horse_queries: Mutex<u32>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&self, instructor_id: Uuid, intervals: &[(NaiveDate, &str, &str)]) {
        let mut record = WeeklyAvailability::for_week_of(instructor_id, intervals[0].0);
        for (date, start, end) in intervals {
            record.time_slots.push(TimeInterval {
                date: *date,
                start_time: start.parse().unwrap(),
                end_time: end.parse().unwrap(),
            });
        }
        self.availability.lock().unwrap().push(record);
    }

    pub fn book(
        &self,
        instructor_id: Uuid,
        horse_id: Option<Uuid>,
        date: NaiveDate,
        time: &str,
        status: LessonStatus,
    ) -> Lesson {
        let lesson = Lesson {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_name: "Rider".to_string(),
            lesson_type: LessonType::Regular,
            instructor_id,
            horse_id,
            date,
            time: time.parse().unwrap(),
            status,
            created_at: Utc::now(),
        };
        self.lessons.lock().unwrap().push(lesson.clone());
        lesson
    }

    pub fn add_user(&self, role: UserRole) -> User {
        let user = User {
            id: Uuid::new_v4(),
            email: format!("{}@example.org", role.as_str().to_lowercase()),
            display_name: Some(format!("Test {}", role.as_str())),
            role,
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn add_instructor(&self, user_id: Option<Uuid>) -> Instructor {
        let instructor = Instructor {
            id: Uuid::new_v4(),
            name: "Sam Fielding".to_string(),
            specialty: "Therapeutic riding".to_string(),
            bio: String::new(),
            image_url: None,
            user_id,
            created_at: Utc::now(),
        };
        self.instructors.lock().unwrap().push(instructor.clone());
        instructor
    }

    pub fn add_horse(&self, name: &str, suitability: Suitability) -> Horse {
        let horse = Horse {
            id: Uuid::new_v4(),
            name: name.to_string(),
            breed: "Haflinger".to_string(),
            age: 12,
            description: String::new(),
            image_url: None,
            suitability,
            created_at: Utc::now(),
        };
        self.horses.lock().unwrap().push(horse.clone());
        horse
    }
}

#[async_trait]
impl AvailabilityStore for FakeStore {
    async fn find_weekly_availability(
        &self,
        instructor_id: Uuid,
        week_start_date: NaiveDate,
    ) -> eyre::Result<Option<WeeklyAvailability>> {
        if self.fail_availability {
            return Err(eyre!("connection refused"));
        }
        Ok(self
            .availability
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.instructor_id == instructor_id && a.week_start_date == week_start_date)
            .cloned())
    }

    async fn save_weekly_availability(
        &self,
        availability: &WeeklyAvailability,
    ) -> eyre::Result<WeeklyAvailability> {
        let mut records = self.availability.lock().unwrap();
        records.retain(|a| a.id != availability.id);
        records.push(availability.clone());
        Ok(availability.clone())
    }
}

#[async_trait]
impl LessonStore for FakeStore {
    async fn lessons_for_instructor_on(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> eyre::Result<Vec<Lesson>> {
        *self.instructor_queries.lock().unwrap() += 1;
        Ok(self
            .lessons
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.instructor_id == instructor_id && l.date == date)
            .cloned()
            .collect())
    }

    async fn lessons_for_horse_on(&self, horse_id: Uuid, date: NaiveDate) -> eyre::Result<Vec<Lesson>> {
        *self.horse_queries.lock().unwrap() += 1;
        if self.fail_horse_lessons {
            return Err(eyre!("permission denied"));
        }
        Ok(self
            .lessons
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.horse_id == Some(horse_id) && l.date == date)
            .cloned()
            .collect())
    }

    async fn get_lesson(&self, id: Uuid) -> eyre::Result<Option<Lesson>> {
        Ok(self.lessons.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn create_lesson(&self, lesson: &NewLesson) -> eyre::Result<Lesson> {
        let created = Lesson {
            id: Uuid::new_v4(),
            user_id: lesson.user_id,
            user_name: lesson.user_name.clone(),
            lesson_type: lesson.lesson_type,
            instructor_id: lesson.instructor_id,
            horse_id: lesson.horse_id,
            date: lesson.date,
            time: lesson.time,
            status: LessonStatus::Pending,
            created_at: Utc::now(),
        };
        self.lessons.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_lesson(
        &self,
        id: Uuid,
        status: LessonStatus,
        horse_id: Option<Uuid>,
    ) -> eyre::Result<Lesson> {
        let mut lessons = self.lessons.lock().unwrap();
        let lesson = lessons
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| eyre!("Lesson not found"))?;
        lesson.status = status;
        lesson.horse_id = horse_id;
        Ok(lesson.clone())
    }

    async fn lessons_for_instructor(&self, instructor_id: Uuid) -> eyre::Result<Vec<Lesson>> {
        let mut lessons: Vec<Lesson> = self
            .lessons
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.instructor_id == instructor_id && l.status != LessonStatus::Cancelled)
            .cloned()
            .collect();
        lessons.sort_by_key(|l| (l.date, l.time));
        Ok(lessons)
    }

    async fn lessons_for_user(&self, user_id: Uuid) -> eyre::Result<Vec<Lesson>> {
        Ok(self
            .lessons
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DirectoryStore for FakeStore {
    async fn get_user(&self, id: Uuid) -> eyre::Result<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn get_horse(&self, id: Uuid) -> eyre::Result<Option<Horse>> {
        Ok(self.horses.lock().unwrap().iter().find(|h| h.id == id).cloned())
    }

    async fn get_instructor(&self, id: Uuid) -> eyre::Result<Option<Instructor>> {
        Ok(self.instructors.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }
}

#[async_trait]
impl RentalStore for FakeStore {
    async fn create_rental(&self, rental: &NewMuseumRental) -> eyre::Result<MuseumRental> {
        let created = MuseumRental {
            id: Uuid::new_v4(),
            user_id: rental.user_id,
            user_name: rental.user_name.clone(),
            email: rental.email.clone(),
            date: rental.date,
            time: rental.time,
            guests: rental.guests,
            notes: rental.notes.clone(),
            status: RentalStatus::Pending,
            created_at: Utc::now(),
        };
        self.rentals.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get_rental(&self, id: Uuid) -> eyre::Result<Option<MuseumRental>> {
        Ok(self.rentals.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list_rentals(&self) -> eyre::Result<Vec<MuseumRental>> {
        let mut rentals = self.rentals.lock().unwrap().clone();
        rentals.sort_by_key(|r| (r.date, r.time));
        Ok(rentals)
    }

    async fn update_rental_status(&self, id: Uuid, status: RentalStatus) -> eyre::Result<MuseumRental> {
        let mut rentals = self.rentals.lock().unwrap();
        let rental = rentals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| eyre!("Rental not found"))?;
        rental.status = status;
        Ok(rental.clone())
    }
}

#[async_trait]
impl MessageStore for FakeStore {
    async fn post_message(&self, message: &NewTeamMessage) -> eyre::Result<TeamMessage> {
        let posted = TeamMessage {
            id: Uuid::new_v4(),
            user_id: message.user_id,
            user_name: message.user_name.clone(),
            text: message.text.clone(),
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(posted.clone());
        Ok(posted)
    }

    async fn recent_messages(&self, limit: u32) -> eyre::Result<Vec<TeamMessage>> {
        let messages = self.messages.lock().unwrap();
        let skip = messages.len().saturating_sub(limit as usize);
        Ok(messages[skip..].to_vec())
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
