//! # Authentication Module
//!
//! Password hashing for user accounts and the [`Actor`] extractor that
//! resolves the calling user for handlers that need one.
//!
//! The API sits behind the site's session layer, which forwards the signed-in
//! user's id in the `X-User-Id` header. Requests without it, or with an id
//! that matches no user, are rejected with 401.

use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use eyre::Result;
use paddock_core::{errors::BookingError, models::user::User};
use rand::rngs::OsRng;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Hashes a password using the Argon2 algorithm
///
/// Returns the hash in PHC string format, which embeds the algorithm,
/// parameters and a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks a password against a stored PHC hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// The signed-in user making the request.
#[derive(Debug, Clone)]
pub struct Actor(pub User);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .ok_or_else(|| {
                AppError(BookingError::Authentication(
                    "Sign in to continue".to_string(),
                ))
            })?;

        let user = state.directory.get_user(id).await?.ok_or_else(|| {
            AppError(BookingError::Authentication("Unknown user".to_string()))
        })?;

        Ok(Actor(user))
    }
}
