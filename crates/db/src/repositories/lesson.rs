use crate::models::DbLesson;
use chrono::{NaiveDate, Utc};
use eyre::{eyre, Result};
use paddock_core::models::lesson::{Lesson, LessonStatus, NewLesson};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const LESSON_COLUMNS: &str =
    "id, user_id, user_name, lesson_type, instructor_id, horse_id, date, time, status, created_at";

fn into_lessons(rows: Vec<DbLesson>) -> Result<Vec<Lesson>> {
    rows.into_iter().map(DbLesson::into_lesson).collect()
}

pub async fn create_lesson(pool: &Pool<Postgres>, lesson: &NewLesson) -> Result<Lesson> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        INSERT INTO lessons (id, user_id, user_name, lesson_type, instructor_id, horse_id, date, time, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {LESSON_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(lesson.user_id)
    .bind(&lesson.user_name)
    .bind(lesson.lesson_type.as_str())
    .bind(lesson.instructor_id)
    .bind(lesson.horse_id)
    .bind(lesson.date)
    .bind(lesson.time.as_naive())
    .bind(LessonStatus::Pending.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Lesson created: id={}", id);
    row.into_lesson()
}

pub async fn get_lesson_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Lesson>> {
    let row = sqlx::query_as::<_, DbLesson>(&format!(
        "SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(DbLesson::into_lesson).transpose()
}

pub async fn get_lessons_by_instructor_on(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<Lesson>> {
    let rows = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        SELECT {LESSON_COLUMNS}
        FROM lessons
        WHERE instructor_id = $1 AND date = $2
        ORDER BY time ASC
        "#
    ))
    .bind(instructor_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    into_lessons(rows)
}

pub async fn get_lessons_by_horse_on(
    pool: &Pool<Postgres>,
    horse_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<Lesson>> {
    let rows = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        SELECT {LESSON_COLUMNS}
        FROM lessons
        WHERE horse_id = $1 AND date = $2
        ORDER BY time ASC
        "#
    ))
    .bind(horse_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    into_lessons(rows)
}

pub async fn get_active_lessons_by_instructor(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
) -> Result<Vec<Lesson>> {
    let rows = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        SELECT {LESSON_COLUMNS}
        FROM lessons
        WHERE instructor_id = $1 AND status <> $2
        ORDER BY date ASC, time ASC
        "#
    ))
    .bind(instructor_id)
    .bind(LessonStatus::Cancelled.as_str())
    .fetch_all(pool)
    .await?;

    into_lessons(rows)
}

pub async fn get_lessons_by_user(pool: &Pool<Postgres>, user_id: Uuid) -> Result<Vec<Lesson>> {
    let rows = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        SELECT {LESSON_COLUMNS}
        FROM lessons
        WHERE user_id = $1
        ORDER BY date DESC, time DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    into_lessons(rows)
}

pub async fn update_lesson(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: LessonStatus,
    horse_id: Option<Uuid>,
) -> Result<Lesson> {
    let row = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        UPDATE lessons
        SET status = $2, horse_id = $3
        WHERE id = $1
        RETURNING {LESSON_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(status.as_str())
    .bind(horse_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| eyre!("Lesson not found"))?;

    tracing::debug!("Lesson updated: id={}, status={}", id, status.as_str());
    row.into_lesson()
}
