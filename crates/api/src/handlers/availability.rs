use axum::{
    extract::{Path, Query, State},
    Json,
};
use paddock_core::models::availability::{
    AvailableSlotsQuery, AvailableSlotsResponse, TimeInterval, WeekQuery, WeeklyAvailability,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::Actor, error_handling::AppError},
    ApiState,
};

/// Open lesson start times for an instructor on one date, optionally
/// restricted to times the requested horse is also free.
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let slots = state
        .booking()
        .resolver()
        .resolve_available_slots(instructor_id, query.horse_id, query.date)
        .await?;

    Ok(Json(AvailableSlotsResponse {
        instructor_id,
        horse_id: query.horse_id,
        date: query.date,
        slots,
    }))
}

/// The declared availability for the week containing `week_start`. An
/// instructor who has not declared anything gets an empty week.
#[axum::debug_handler]
pub async fn get_weekly_availability(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeeklyAvailability>, AppError> {
    let record = state
        .booking()
        .weekly_availability(instructor_id, query.week_start)
        .await?
        .unwrap_or_else(|| WeeklyAvailability::for_week_of(instructor_id, query.week_start));

    Ok(Json(record))
}

#[axum::debug_handler]
pub async fn add_availability(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(instructor_id): Path<Uuid>,
    Json(interval): Json<TimeInterval>,
) -> Result<Json<WeeklyAvailability>, AppError> {
    let record = state
        .booking()
        .add_availability(&actor, instructor_id, interval)
        .await?;
    Ok(Json(record))
}

#[axum::debug_handler]
pub async fn remove_availability(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(instructor_id): Path<Uuid>,
    Json(interval): Json<TimeInterval>,
) -> Result<Json<WeeklyAvailability>, AppError> {
    let record = state
        .booking()
        .remove_availability(&actor, instructor_id, interval)
        .await?;
    Ok(Json(record))
}
