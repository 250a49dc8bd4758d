use crate::models::DbInstructor;
use chrono::Utc;
use eyre::Result;
use paddock_core::models::instructor::{CreateInstructorRequest, Instructor};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_instructor(
    pool: &Pool<Postgres>,
    instructor: &CreateInstructorRequest,
) -> Result<Instructor> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbInstructor>(
        r#"
        INSERT INTO instructors (id, name, specialty, bio, image_url, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, specialty, bio, image_url, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(&instructor.name)
    .bind(&instructor.specialty)
    .bind(&instructor.bio)
    .bind(&instructor.image_url)
    .bind(instructor.user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn get_instructor_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Instructor>> {
    let row = sqlx::query_as::<_, DbInstructor>(
        r#"
        SELECT id, name, specialty, bio, image_url, user_id, created_at
        FROM instructors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn list_instructors(pool: &Pool<Postgres>) -> Result<Vec<Instructor>> {
    let rows = sqlx::query_as::<_, DbInstructor>(
        r#"
        SELECT id, name, specialty, bio, image_url, user_id, created_at
        FROM instructors
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}
