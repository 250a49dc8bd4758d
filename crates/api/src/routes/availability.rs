use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/instructors/:id/available-slots",
            get(handlers::availability::available_slots),
        )
        .route(
            "/api/instructors/:id/availability",
            get(handlers::availability::get_weekly_availability)
                .post(handlers::availability::add_availability)
                .delete(handlers::availability::remove_availability),
        )
}
