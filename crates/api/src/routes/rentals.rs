use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/rentals",
            get(handlers::rentals::list_rentals).post(handlers::rentals::request_rental),
        )
        .route(
            "/api/rentals/:id/status",
            put(handlers::rentals::update_rental_status),
        )
}
