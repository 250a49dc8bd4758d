use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use paddock_core::{
    errors::BookingError,
    models::instructor::{CreateInstructorRequest, Instructor},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{auth::Actor, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_instructors(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let instructors = paddock_db::repositories::instructor::list_instructors(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;
    Ok(Json(instructors))
}

#[axum::debug_handler]
pub async fn get_instructor(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Instructor>, AppError> {
    let instructor = state
        .directory
        .get_instructor(id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Instructor with ID {} not found", id)))?;
    Ok(Json(instructor))
}

#[axum::debug_handler]
pub async fn create_instructor(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Json(payload): Json<CreateInstructorRequest>,
) -> Result<(StatusCode, Json<Instructor>), AppError> {
    if !actor.role.manages_roster() {
        return Err(AppError(BookingError::Authorization(
            "Only managers can add instructors".to_string(),
        )));
    }
    payload.validate()?;

    let instructor =
        paddock_db::repositories::instructor::create_instructor(&state.db_pool, &payload)
            .await
            .map_err(BookingError::Database)?;

    info!(instructor_id = %instructor.id, name = %instructor.name, "Instructor added");
    Ok((StatusCode::CREATED, Json(instructor)))
}
