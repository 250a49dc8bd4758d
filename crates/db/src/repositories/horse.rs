use crate::models::DbHorse;
use chrono::Utc;
use eyre::{eyre, Result};
use paddock_core::models::horse::{CreateHorseRequest, Horse, Suitability, UpdateHorseRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_horse(pool: &Pool<Postgres>, horse: &CreateHorseRequest) -> Result<Horse> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbHorse>(
        r#"
        INSERT INTO horses (id, name, breed, age, description, image_url, suitability, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, breed, age, description, image_url, suitability, created_at
        "#,
    )
    .bind(id)
    .bind(&horse.name)
    .bind(&horse.breed)
    .bind(horse.age)
    .bind(&horse.description)
    .bind(&horse.image_url)
    .bind(horse.suitability.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Horse created: id={}, name={}", id, horse.name);
    row.into_horse()
}

pub async fn get_horse_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Horse>> {
    let row = sqlx::query_as::<_, DbHorse>(
        r#"
        SELECT id, name, breed, age, description, image_url, suitability, created_at
        FROM horses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(DbHorse::into_horse).transpose()
}

/// All horses by name, optionally restricted to one suitability.
pub async fn list_horses(
    pool: &Pool<Postgres>,
    suitability: Option<Suitability>,
) -> Result<Vec<Horse>> {
    let rows = sqlx::query_as::<_, DbHorse>(
        r#"
        SELECT id, name, breed, age, description, image_url, suitability, created_at
        FROM horses
        WHERE $1::VARCHAR IS NULL OR suitability = $1
        ORDER BY name ASC
        "#,
    )
    .bind(suitability.map(|s| s.as_str()))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(DbHorse::into_horse).collect()
}

pub async fn update_horse(
    pool: &Pool<Postgres>,
    id: Uuid,
    changes: &UpdateHorseRequest,
) -> Result<Horse> {
    let horse = get_horse_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Horse not found"))?;

    let row = sqlx::query_as::<_, DbHorse>(
        r#"
        UPDATE horses
        SET name = $2, breed = $3, age = $4, description = $5, image_url = $6, suitability = $7
        WHERE id = $1
        RETURNING id, name, breed, age, description, image_url, suitability, created_at
        "#,
    )
    .bind(id)
    .bind(changes.name.as_deref().unwrap_or(&horse.name))
    .bind(changes.breed.as_deref().unwrap_or(&horse.breed))
    .bind(changes.age.unwrap_or(horse.age))
    .bind(changes.description.as_deref().unwrap_or(&horse.description))
    .bind(changes.image_url.as_deref().or(horse.image_url.as_deref()))
    .bind(changes.suitability.unwrap_or(horse.suitability).as_str())
    .fetch_one(pool)
    .await?;

    row.into_horse()
}

/// Returns whether a row was deleted.
pub async fn delete_horse(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM horses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
