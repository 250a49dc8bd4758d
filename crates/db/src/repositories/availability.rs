use crate::models::{DbAvailabilityInterval, DbWeeklyAvailability};
use chrono::NaiveDate;
use eyre::Result;
use paddock_core::models::availability::WeeklyAvailability;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn find_weekly_availability(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
    week_start_date: NaiveDate,
) -> Result<Option<WeeklyAvailability>> {
    tracing::debug!(
        "Looking up availability: instructor_id={}, week_start_date={}",
        instructor_id, week_start_date
    );

    let header = sqlx::query_as::<_, DbWeeklyAvailability>(
        r#"
        SELECT id, instructor_id, week_start_date
        FROM weekly_availability
        WHERE instructor_id = $1 AND week_start_date = $2
        "#,
    )
    .bind(instructor_id)
    .bind(week_start_date)
    .fetch_optional(pool)
    .await?;

    let Some(header) = header else {
        return Ok(None);
    };

    let intervals = sqlx::query_as::<_, DbAvailabilityInterval>(
        r#"
        SELECT availability_id, position, date, start_time, end_time
        FROM availability_intervals
        WHERE availability_id = $1
        ORDER BY position ASC
        "#,
    )
    .bind(header.id)
    .fetch_all(pool)
    .await?;

    Ok(Some(WeeklyAvailability {
        id: header.id,
        instructor_id: header.instructor_id,
        week_start_date: header.week_start_date,
        time_slots: intervals.into_iter().map(Into::into).collect(),
    }))
}

/// Writes the record and replaces its interval list in one transaction.
pub async fn save_weekly_availability(
    pool: &Pool<Postgres>,
    availability: &WeeklyAvailability,
) -> Result<WeeklyAvailability> {
    let mut tx = pool.begin().await?;

    // An existing row for the same instructor and week keeps its id.
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO weekly_availability (id, instructor_id, week_start_date)
        VALUES ($1, $2, $3)
        ON CONFLICT (instructor_id, week_start_date)
        DO UPDATE SET week_start_date = EXCLUDED.week_start_date
        RETURNING id
        "#,
    )
    .bind(availability.id)
    .bind(availability.instructor_id)
    .bind(availability.week_start_date)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        DELETE FROM availability_intervals
        WHERE availability_id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    for (position, interval) in availability.time_slots.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO availability_intervals (availability_id, position, date, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(position as i32)
        .bind(interval.date)
        .bind(interval.start_time.as_naive())
        .bind(interval.end_time.as_naive())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!(
        "Availability saved: id={}, intervals={}",
        id,
        availability.time_slots.len()
    );

    Ok(WeeklyAvailability {
        id,
        ..availability.clone()
    })
}
