use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/messages",
        get(handlers::messages::recent_messages).post(handlers::messages::post_message),
    )
}
