use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use paddock_core::models::message::{MessageQuery, PostMessageRequest, TeamMessage};
use std::sync::Arc;

use crate::{
    middleware::{auth::Actor, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn post_message(
    State(state): State<Arc<ApiState>>,
    Actor(author): Actor,
    Json(payload): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<TeamMessage>), AppError> {
    let message = state.team_board().post(&author, &payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// Latest messages, oldest first. `?limit=` caps the count.
#[axum::debug_handler]
pub async fn recent_messages(
    State(state): State<Arc<ApiState>>,
    Actor(reader): Actor,
    Query(query): Query<MessageQuery>,
) -> Result<Json<Vec<TeamMessage>>, AppError> {
    let messages = state.team_board().recent(&reader, &query).await?;
    Ok(Json(messages))
}
