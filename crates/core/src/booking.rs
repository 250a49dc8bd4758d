//! # Booking Workflow
//!
//! Rules for the write side of the booking flow: riders book a slot the
//! resolver offered, staff assign a horse (which confirms the lesson), and
//! either side may cancel with at least a day of notice. Instructors also
//! maintain their weekly availability here.
//!
//! Booking checks the slot against the resolver but the check and the insert
//! are not atomic. Two riders racing for the same slot can both succeed.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    availability::{TimeInterval, WeeklyAvailability},
    instructor::Instructor,
    lesson::{BookLessonRequest, Lesson, LessonStatus, NewLesson, CANCELLATION_NOTICE_HOURS},
    user::{User, UserRole},
};
use crate::resolver::AvailabilityResolver;
use crate::slots::{week_start, SlotGranularity};
use crate::store::{AvailabilityStore, DirectoryStore, LessonStore};

pub struct BookingService<'a> {
    availability: &'a dyn AvailabilityStore,
    lessons: &'a dyn LessonStore,
    directory: &'a dyn DirectoryStore,
    granularity: SlotGranularity,
}

impl<'a> BookingService<'a> {
    pub fn new(
        availability: &'a dyn AvailabilityStore,
        lessons: &'a dyn LessonStore,
        directory: &'a dyn DirectoryStore,
        granularity: SlotGranularity,
    ) -> Self {
        Self {
            availability,
            lessons,
            directory,
            granularity,
        }
    }

    pub fn resolver(&self) -> AvailabilityResolver<'a> {
        AvailabilityResolver::new(self.availability, self.lessons, self.granularity)
    }

    pub async fn book_lesson(
        &self,
        rider: &User,
        request: BookLessonRequest,
        now: NaiveDateTime,
    ) -> BookingResult<Lesson> {
        if request.date.and_time(request.time.as_naive()) <= now {
            return Err(BookingError::Validation(
                "Lessons cannot be booked in the past".to_string(),
            ));
        }

        self.instructor(request.instructor_id).await?;

        if let Some(horse_id) = request.horse_id {
            let horse = self
                .directory
                .get_horse(horse_id)
                .await?
                .ok_or_else(|| BookingError::NotFound(format!("Horse with ID {} not found", horse_id)))?;
            if !horse.suits(request.lesson_type) {
                return Err(BookingError::Validation(format!(
                    "{} is not available for {} lessons",
                    horse.name,
                    request.lesson_type.as_str()
                )));
            }
        }

        let open = self
            .resolver()
            .resolve_available_slots(request.instructor_id, request.horse_id, request.date)
            .await?;
        if !open.contains(&request.time) {
            return Err(BookingError::Conflict(format!(
                "{} on {} is not available",
                request.time, request.date
            )));
        }

        let lesson = self
            .lessons
            .create_lesson(&NewLesson {
                user_id: rider.id,
                user_name: rider.label().to_string(),
                lesson_type: request.lesson_type,
                instructor_id: request.instructor_id,
                horse_id: request.horse_id,
                date: request.date,
                time: request.time,
            })
            .await?;

        info!(lesson_id = %lesson.id, instructor_id = %lesson.instructor_id, date = %lesson.date, time = %lesson.time, "Lesson booked");
        Ok(lesson)
    }

    /// Assigns a horse and confirms the lesson.
    pub async fn assign_horse(
        &self,
        actor: &User,
        lesson_id: Uuid,
        horse_id: Uuid,
    ) -> BookingResult<Lesson> {
        let lesson = self.lesson(lesson_id).await?;
        let instructor = self.instructor(lesson.instructor_id).await?;
        if !manages_instructor(actor, &instructor) {
            return Err(BookingError::Authorization(
                "Only the lesson's instructor or a manager can assign horses".to_string(),
            ));
        }

        if lesson.status == LessonStatus::Cancelled {
            return Err(BookingError::Validation(
                "A cancelled lesson cannot be confirmed".to_string(),
            ));
        }

        let horse = self
            .directory
            .get_horse(horse_id)
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("Horse with ID {} not found", horse_id)))?;
        if !horse.suits(lesson.lesson_type) {
            return Err(BookingError::Validation(format!(
                "{} is not available for {} lessons",
                horse.name,
                lesson.lesson_type.as_str()
            )));
        }

        // The horse may already be out with another lesson in this slot
        let horse_lessons = self.lessons.lessons_for_horse_on(horse.id, lesson.date).await?;
        if horse_lessons
            .iter()
            .any(|other| other.id != lesson.id && other.blocks_slot() && other.time == lesson.time)
        {
            return Err(BookingError::Conflict(format!(
                "{} already has a lesson at {} on {}",
                horse.name, lesson.time, lesson.date
            )));
        }

        let updated = self
            .lessons
            .update_lesson(lesson.id, LessonStatus::Confirmed, Some(horse.id))
            .await?;
        info!(lesson_id = %updated.id, horse_id = %horse.id, "Horse assigned, lesson confirmed");
        Ok(updated)
    }

    pub async fn cancel_lesson(
        &self,
        actor: &User,
        lesson_id: Uuid,
        now: NaiveDateTime,
    ) -> BookingResult<Lesson> {
        let lesson = self.lesson(lesson_id).await?;

        if lesson.user_id != actor.id {
            let instructor = self.instructor(lesson.instructor_id).await?;
            if !manages_instructor(actor, &instructor) {
                return Err(BookingError::Authorization(
                    "You can only cancel your own lessons".to_string(),
                ));
            }
        }

        if !lesson.status.can_transition_to(LessonStatus::Cancelled) {
            return Err(BookingError::Validation("Lesson is already cancelled".to_string()));
        }
        if !lesson.is_cancelable(now) {
            return Err(BookingError::Validation(format!(
                "Lessons cannot be cancelled within {} hours of the start time",
                CANCELLATION_NOTICE_HOURS
            )));
        }

        let updated = self
            .lessons
            .update_lesson(lesson.id, LessonStatus::Cancelled, lesson.horse_id)
            .await?;
        info!(lesson_id = %updated.id, "Lesson cancelled");
        Ok(updated)
    }

    pub async fn weekly_availability(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> BookingResult<Option<WeeklyAvailability>> {
        Ok(self
            .availability
            .find_weekly_availability(instructor_id, week_start(date))
            .await?)
    }

    pub async fn add_availability(
        &self,
        actor: &User,
        instructor_id: Uuid,
        interval: TimeInterval,
    ) -> BookingResult<WeeklyAvailability> {
        self.check_availability_access(actor, instructor_id).await?;

        let mut record = self
            .weekly_availability(instructor_id, interval.date)
            .await?
            .unwrap_or_else(|| WeeklyAvailability::for_week_of(instructor_id, interval.date));
        record.add_interval(interval)?;

        Ok(self.availability.save_weekly_availability(&record).await?)
    }

    pub async fn remove_availability(
        &self,
        actor: &User,
        instructor_id: Uuid,
        interval: TimeInterval,
    ) -> BookingResult<WeeklyAvailability> {
        self.check_availability_access(actor, instructor_id).await?;

        let mut record = self
            .weekly_availability(instructor_id, interval.date)
            .await?
            .ok_or_else(|| {
                BookingError::NotFound(format!(
                    "No availability for the week starting {}",
                    week_start(interval.date)
                ))
            })?;
        record.remove_interval(&interval)?;

        Ok(self.availability.save_weekly_availability(&record).await?)
    }

    async fn check_availability_access(&self, actor: &User, instructor_id: Uuid) -> BookingResult<()> {
        let instructor = self.instructor(instructor_id).await?;
        if manages_instructor(actor, &instructor) {
            Ok(())
        } else {
            Err(BookingError::Authorization(
                "Only the instructor or a manager can change this availability".to_string(),
            ))
        }
    }

    async fn lesson(&self, id: Uuid) -> BookingResult<Lesson> {
        self.lessons
            .get_lesson(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("Lesson with ID {} not found", id)))
    }

    async fn instructor(&self, id: Uuid) -> BookingResult<Instructor> {
        self.directory
            .get_instructor(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("Instructor with ID {} not found", id)))
    }
}

/// Managers and admins act for any instructor; an instructor acts for the
/// profile linked to their own account.
pub fn manages_instructor(actor: &User, instructor: &Instructor) -> bool {
    match actor.role {
        UserRole::Manager | UserRole::Admin => true,
        UserRole::Instructor => instructor.user_id == Some(actor.id),
        UserRole::Rider => false,
    }
}
