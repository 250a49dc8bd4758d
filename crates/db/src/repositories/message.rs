use crate::models::DbTeamMessage;
use chrono::Utc;
use eyre::Result;
use paddock_core::models::message::{NewTeamMessage, TeamMessage};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_message(pool: &Pool<Postgres>, message: &NewTeamMessage) -> Result<TeamMessage> {
    let row = sqlx::query_as::<_, DbTeamMessage>(
        r#"
        INSERT INTO team_messages (id, user_id, user_name, text, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, user_name, text, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(message.user_id)
    .bind(&message.user_name)
    .bind(&message.text)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// The latest `limit` messages, oldest first.
pub async fn get_recent_messages(pool: &Pool<Postgres>, limit: u32) -> Result<Vec<TeamMessage>> {
    let rows = sqlx::query_as::<_, DbTeamMessage>(
        r#"
        SELECT id, user_id, user_name, text, created_at
        FROM team_messages
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().rev().map(TeamMessage::from).collect())
}
