use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/instructors",
            get(handlers::instructors::list_instructors)
                .post(handlers::instructors::create_instructor),
        )
        .route(
            "/api/instructors/:id",
            get(handlers::instructors::get_instructor),
        )
}
