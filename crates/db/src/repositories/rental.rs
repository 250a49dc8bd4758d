use crate::models::DbRental;
use chrono::Utc;
use eyre::Result;
use paddock_core::models::rental::{MuseumRental, NewMuseumRental, RentalStatus};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const RENTAL_COLUMNS: &str =
    "id, user_id, user_name, email, date, time, guests, notes, status, created_at";

pub async fn create_rental(pool: &Pool<Postgres>, rental: &NewMuseumRental) -> Result<MuseumRental> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbRental>(&format!(
        r#"
        INSERT INTO rentals (id, user_id, user_name, email, date, time, guests, notes, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {RENTAL_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(rental.user_id)
    .bind(&rental.user_name)
    .bind(&rental.email)
    .bind(rental.date)
    .bind(rental.time.as_naive())
    .bind(rental.guests)
    .bind(rental.notes.as_deref())
    .bind(RentalStatus::Pending.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Rental created: id={}", id);
    row.into_rental()
}

pub async fn get_rental_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<MuseumRental>> {
    let row = sqlx::query_as::<_, DbRental>(&format!(
        "SELECT {RENTAL_COLUMNS} FROM rentals WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(DbRental::into_rental).transpose()
}

pub async fn list_rentals(pool: &Pool<Postgres>) -> Result<Vec<MuseumRental>> {
    let rows = sqlx::query_as::<_, DbRental>(&format!(
        "SELECT {RENTAL_COLUMNS} FROM rentals ORDER BY date ASC, time ASC"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(DbRental::into_rental).collect()
}

pub async fn update_rental_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: RentalStatus,
) -> Result<MuseumRental> {
    let row = sqlx::query_as::<_, DbRental>(&format!(
        "UPDATE rentals SET status = $2 WHERE id = $1 RETURNING {RENTAL_COLUMNS}"
    ))
    .bind(id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await?;

    tracing::debug!("Rental {} marked {}", id, status.as_str());
    row.into_rental()
}
