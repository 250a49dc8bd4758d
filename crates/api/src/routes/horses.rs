use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/horses",
            get(handlers::horses::list_horses).post(handlers::horses::create_horse),
        )
        .route(
            "/api/horses/:id",
            get(handlers::horses::get_horse)
                .put(handlers::horses::update_horse)
                .delete(handlers::horses::delete_horse),
        )
}
