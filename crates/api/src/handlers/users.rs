use axum::{extract::State, http::StatusCode, Json};
use paddock_core::{
    errors::BookingError,
    models::user::{CreateUserRequest, LoginRequest, User},
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

fn is_unique_violation(err: &eyre::Report) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

/// Creates an account. Riders by default; staff roles need the signup code.
#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    payload.validate()?;
    let role = payload.granted_role(state.staff_signup_code.as_deref())?;

    let password_hash = auth::hash_password(&payload.password)?;
    let email = payload.email.trim().to_lowercase();

    let user = state
        .accounts
        .create_user(&email, payload.display_name.clone(), &password_hash, role)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BookingError::Conflict("An account with this email already exists".to_string())
            } else {
                BookingError::Database(e)
            }
        })?;

    info!(user_id = %user.id, role = user.role.as_str(), "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let invalid = || BookingError::Authentication("Invalid email or password".to_string());

    let credentials = state
        .accounts
        .find_credentials(payload.email.trim())
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(invalid)?;

    if !auth::verify_password(&payload.password, &credentials.password_hash)? {
        warn!(user_id = %credentials.user.id, "Failed login attempt");
        return Err(AppError(invalid()));
    }

    Ok(Json(credentials.user))
}
