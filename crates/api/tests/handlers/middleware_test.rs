use axum::{body::to_bytes, http::StatusCode};
use fake::{faker::internet::en::Password, Fake};
use paddock_api::middleware::{auth, error_handling::map_error};
use paddock_core::errors::BookingError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

use crate::test_utils::TestContext;

#[rstest]
#[case(BookingError::NotFound("Lesson not found".into()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("Invalid input".into()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Authentication("Sign in".into()), StatusCode::UNAUTHORIZED)]
#[case(BookingError::Authorization("Not allowed".into()), StatusCode::FORBIDDEN)]
#[case(BookingError::Conflict("Slot taken".into()), StatusCode::CONFLICT)]
#[case(BookingError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    BookingError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_carries_message() {
    let response = map_error(BookingError::Conflict("10:00 on 2026-11-02 is not available".into()));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body["error"],
        "Conflict: 10:00 on 2026-11-02 is not available"
    );
}

#[test]
fn test_hash_password() {
    let password: String = Password(8..24).fake();
    let hashed = auth::hash_password(&password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[test]
fn test_hashes_are_salted() {
    let first = auth::hash_password("correct horse").unwrap();
    let second = auth::hash_password("correct horse").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_verify_password() {
    let password: String = Password(8..24).fake();
    let hashed = auth::hash_password(&password).unwrap();

    assert!(auth::verify_password(&password, &hashed).unwrap());
    assert!(!auth::verify_password("wrong password", &hashed).unwrap());
}

#[test]
fn test_verify_password_rejects_malformed_hash() {
    assert!(auth::verify_password("anything", "not-a-phc-string").is_err());
}

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_malformed_user_header_is_unauthorized() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/lessons")
        .add_header(
            axum::http::HeaderName::from_static(auth::USER_ID_HEADER),
            axum::http::HeaderValue::from_static("not-a-uuid"),
        )
        .json(&serde_json::json!({}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
