use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/lessons", post(handlers::lessons::book_lesson))
        .route("/api/lessons/:id", get(handlers::lessons::get_lesson))
        .route("/api/lessons/:id/horse", put(handlers::lessons::assign_horse))
        .route("/api/lessons/:id/cancel", post(handlers::lessons::cancel_lesson))
        .route(
            "/api/instructors/:id/lessons",
            get(handlers::lessons::instructor_lessons),
        )
        .route("/api/users/:id/lessons", get(handlers::lessons::user_lessons))
}
