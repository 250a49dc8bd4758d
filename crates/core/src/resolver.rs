//! # Availability Resolver
//!
//! Computes which slots of an instructor's day are still open for booking.
//!
//! 1. Find the instructor's availability record for the Monday-aligned week
//!    containing the date. No record means no availability.
//! 2. Expand that day's intervals into whole slots and sort them.
//! 3. Fetch the instructor's lessons on the date and, when a horse is
//!    selected, the horse's lessons on the date. Both queries run together.
//! 4. Drop every slot held by a lesson that is not cancelled.
//!
//! The resolver holds no state between calls and takes no locks. Two riders
//! can be shown the same open slot; nothing here prevents both from booking it.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::slots::{expand_interval, week_start, SlotGranularity, TimeOfDay};
use crate::store::{AvailabilityStore, LessonStore};

pub struct AvailabilityResolver<'a> {
    availability: &'a dyn AvailabilityStore,
    lessons: &'a dyn LessonStore,
    granularity: SlotGranularity,
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(
        availability: &'a dyn AvailabilityStore,
        lessons: &'a dyn LessonStore,
        granularity: SlotGranularity,
    ) -> Self {
        Self {
            availability,
            lessons,
            granularity,
        }
    }

    /// Open slots for `instructor_id` on `date`, earliest first.
    ///
    /// An empty list means either that the instructor declared nothing for
    /// that week or that every slot is taken. A failed store read is returned
    /// as [`BookingError::Database`] and never as an empty list.
    pub async fn resolve_available_slots(
        &self,
        instructor_id: Uuid,
        horse_id: Option<Uuid>,
        date: NaiveDate,
    ) -> BookingResult<Vec<TimeOfDay>> {
        if instructor_id.is_nil() {
            return Err(BookingError::Validation(
                "An instructor must be selected".to_string(),
            ));
        }

        let week = week_start(date);
        let Some(record) = self
            .availability
            .find_weekly_availability(instructor_id, week)
            .await
            .map_err(BookingError::Database)?
        else {
            debug!(%instructor_id, %week, "No availability declared for week");
            return Ok(Vec::new());
        };

        let mut slots: Vec<TimeOfDay> = Vec::new();
        for interval in record.intervals_on(date) {
            if !interval.is_well_formed() {
                warn!(
                    %instructor_id,
                    date = %interval.date,
                    start = %interval.start_time,
                    end = %interval.end_time,
                    "Skipping availability interval that ends before it starts"
                );
                continue;
            }
            slots.extend(expand_interval(interval, self.granularity));
        }
        slots.sort();
        slots.dedup();

        if slots.is_empty() {
            return Ok(slots);
        }

        let horse_lessons = async {
            match horse_id {
                Some(horse_id) => self.lessons.lessons_for_horse_on(horse_id, date).await,
                None => Ok(Vec::new()),
            }
        };
        let (instructor_lessons, horse_lessons) = tokio::try_join!(
            self.lessons.lessons_for_instructor_on(instructor_id, date),
            horse_lessons,
        )
        .map_err(BookingError::Database)?;

        let booked: HashSet<TimeOfDay> = instructor_lessons
            .iter()
            .chain(horse_lessons.iter())
            .filter(|lesson| lesson.date == date && lesson.blocks_slot())
            .map(|lesson| lesson.time)
            .collect();

        slots.retain(|slot| !booked.contains(slot));

        debug!(
            %instructor_id,
            ?horse_id,
            %date,
            open = slots.len(),
            booked = booked.len(),
            "Resolved available slots"
        );
        Ok(slots)
    }
}
