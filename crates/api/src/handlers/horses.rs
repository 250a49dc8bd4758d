use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use paddock_core::{
    errors::BookingError,
    models::{
        horse::{CreateHorseRequest, Horse, HorseQuery, Suitability, UpdateHorseRequest},
        lesson::LessonType,
        user::User,
    },
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{auth::Actor, error_handling::AppError},
    ApiState,
};

fn require_roster_access(actor: &User) -> Result<(), AppError> {
    if actor.role.manages_roster() {
        Ok(())
    } else {
        Err(AppError(BookingError::Authorization(
            "Only managers can change the horse roster".to_string(),
        )))
    }
}

/// Lists horses. `?lesson_type=Therapy` narrows the list to therapy horses.
#[axum::debug_handler]
pub async fn list_horses(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<HorseQuery>,
) -> Result<Json<Vec<Horse>>, AppError> {
    let suitability = match query.lesson_type {
        Some(LessonType::Therapy) => Some(Suitability::Therapy),
        Some(LessonType::Regular) | None => None,
    };

    let horses = paddock_db::repositories::horse::list_horses(&state.db_pool, suitability)
        .await
        .map_err(BookingError::Database)?;
    Ok(Json(horses))
}

#[axum::debug_handler]
pub async fn get_horse(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Horse>, AppError> {
    let horse = state
        .directory
        .get_horse(id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Horse with ID {} not found", id)))?;
    Ok(Json(horse))
}

#[axum::debug_handler]
pub async fn create_horse(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Json(payload): Json<CreateHorseRequest>,
) -> Result<(StatusCode, Json<Horse>), AppError> {
    require_roster_access(&actor)?;
    payload.validate()?;

    let horse = paddock_db::repositories::horse::create_horse(&state.db_pool, &payload)
        .await
        .map_err(BookingError::Database)?;

    info!(horse_id = %horse.id, name = %horse.name, "Horse added");
    Ok((StatusCode::CREATED, Json(horse)))
}

#[axum::debug_handler]
pub async fn update_horse(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHorseRequest>,
) -> Result<Json<Horse>, AppError> {
    require_roster_access(&actor)?;

    state
        .directory
        .get_horse(id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Horse with ID {} not found", id)))?;

    let horse = paddock_db::repositories::horse::update_horse(&state.db_pool, id, &payload)
        .await
        .map_err(BookingError::Database)?;
    Ok(Json(horse))
}

#[axum::debug_handler]
pub async fn delete_horse(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_roster_access(&actor)?;

    let deleted = paddock_db::repositories::horse::delete_horse(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;
    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Horse with ID {} not found",
            id
        ))));
    }

    info!(horse_id = %id, "Horse removed");
    Ok(StatusCode::NO_CONTENT)
}
