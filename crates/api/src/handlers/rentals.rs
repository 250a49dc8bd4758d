use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use paddock_core::models::rental::{MuseumRental, RentalRequest, RentalStatusUpdate};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::Actor, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn request_rental(
    State(state): State<Arc<ApiState>>,
    Actor(requester): Actor,
    Json(payload): Json<RentalRequest>,
) -> Result<(StatusCode, Json<MuseumRental>), AppError> {
    let today = Local::now().date_naive();

    let rental = state
        .rental_service()
        .request_rental(&requester, payload, today)
        .await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

#[axum::debug_handler]
pub async fn list_rentals(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
) -> Result<Json<Vec<MuseumRental>>, AppError> {
    let rentals = state.rental_service().list_rentals(&actor).await?;
    Ok(Json(rentals))
}

#[axum::debug_handler]
pub async fn update_rental_status(
    State(state): State<Arc<ApiState>>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<RentalStatusUpdate>,
) -> Result<Json<MuseumRental>, AppError> {
    let rental = state
        .rental_service()
        .set_status(&actor, id, payload.status)
        .await?;
    Ok(Json(rental))
}
