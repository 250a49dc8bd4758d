use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use paddock_core::{
    errors::BookingError,
    models::lesson::{AssignHorseRequest, BookLessonRequest, Lesson},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::Actor, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn book_lesson(
    State(state): State<Arc<ApiState>>,
    Actor(rider): Actor,
    Json(payload): Json<BookLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    // Lesson times are wall-clock times at the riding center
    let now = Local::now().naive_local();

    let lesson = state.booking().book_lesson(&rider, payload, now).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

#[axum::debug_handler]
pub async fn get_lesson(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<Lesson>, AppError> {
    let lesson = state
        .lessons
        .get_lesson(id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Lesson with ID {} not found", id)))?;

    if lesson.user_id != actor.id && !actor.role.is_staff() {
        return Err(AppError(BookingError::Authorization(
            "You can only view your own lessons".to_string(),
        )));
    }

    Ok(Json(lesson))
}

#[axum::debug_handler]
pub async fn assign_horse(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignHorseRequest>,
) -> Result<Json<Lesson>, AppError> {
    let lesson = state
        .booking()
        .assign_horse(&actor, id, payload.horse_id)
        .await?;
    Ok(Json(lesson))
}

#[axum::debug_handler]
pub async fn cancel_lesson(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<Lesson>, AppError> {
    let now = Local::now().naive_local();

    let lesson = state.booking().cancel_lesson(&actor, id, now).await?;
    Ok(Json(lesson))
}

/// Upcoming and past lessons for one instructor, cancelled ones excluded.
#[axum::debug_handler]
pub async fn instructor_lessons(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(instructor_id): Path<Uuid>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    if !actor.role.is_staff() {
        return Err(AppError(BookingError::Authorization(
            "Only staff can view an instructor's schedule".to_string(),
        )));
    }

    state
        .directory
        .get_instructor(instructor_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Instructor with ID {} not found", instructor_id))
        })?;

    let lessons = state
        .lessons
        .lessons_for_instructor(instructor_id)
        .await
        .map_err(BookingError::Database)?;
    Ok(Json(lessons))
}

#[axum::debug_handler]
pub async fn user_lessons(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    if user_id != actor.id && !actor.role.is_staff() {
        return Err(AppError(BookingError::Authorization(
            "You can only view your own lessons".to_string(),
        )));
    }

    let lessons = state
        .lessons
        .lessons_for_user(user_id)
        .await
        .map_err(BookingError::Database)?;
    Ok(Json(lessons))
}
