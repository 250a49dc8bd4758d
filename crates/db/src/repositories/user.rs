use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use paddock_core::models::user::{User, UserCredentials, UserRole};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_user(
    pool: &Pool<Postgres>,
    email: &str,
    display_name: Option<&str>,
    password_hash: &str,
    role: UserRole,
) -> Result<User> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, role={}", id, role.as_str());

    let row = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, email, display_name, password_hash, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, display_name, password_hash, role, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(display_name)
    .bind(password_hash)
    .bind(role.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    row.into_user()
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, display_name, password_hash, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(DbUser::into_user).transpose()
}

/// Raw row including the password hash, for login.
pub async fn get_user_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbUser>> {
    let row = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, display_name, password_hash, role, created_at
        FROM users
        WHERE lower(email) = lower($1)
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn find_credentials(pool: &Pool<Postgres>, email: &str) -> Result<Option<UserCredentials>> {
    get_user_by_email(pool, email)
        .await?
        .map(DbUser::into_credentials)
        .transpose()
}
