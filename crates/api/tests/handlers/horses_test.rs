use axum::http::{HeaderName, HeaderValue, StatusCode};
use chrono::Utc;
use paddock_api::middleware::auth::USER_ID_HEADER;
use paddock_core::models::{
    horse::{Horse, Suitability},
    user::UserRole,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{user, TestContext};

#[rstest]
#[case(UserRole::Rider)]
#[case(UserRole::Instructor)]
#[tokio::test]
async fn test_create_horse_requires_manager(#[case] role: UserRole) {
    let mut ctx = TestContext::new();
    let actor = user(role);
    let signed_in = actor.clone();
    ctx.directory_repo
        .expect_get_user()
        .returning(move |_| Ok(Some(signed_in.clone())));

    let server = ctx.server();
    let response = server
        .post("/api/horses")
        .add_header(
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&actor.id.to_string()).unwrap(),
        )
        .json(&json!({
            "name": "Biscuit",
            "breed": "Haflinger",
            "age": 12,
            "description": "Calm",
            "suitability": "Therapy"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_horse_unknown_user() {
    let mut ctx = TestContext::new();
    ctx.directory_repo.expect_get_user().returning(|_| Ok(None));

    let server = ctx.server();
    let response = server
        .post("/api/horses")
        .add_header(
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
        )
        .json(&json!({
            "name": "Biscuit",
            "breed": "Haflinger",
            "age": 12,
            "description": "Calm",
            "suitability": "Therapy"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_horse() {
    let mut ctx = TestContext::new();
    let horse = Horse {
        id: Uuid::new_v4(),
        name: "Biscuit".to_string(),
        breed: "Haflinger".to_string(),
        age: 12,
        description: "Calm".to_string(),
        image_url: None,
        suitability: Suitability::Therapy,
        created_at: Utc::now(),
    };
    let horse_id = horse.id;
    let stored = horse.clone();
    ctx.directory_repo
        .expect_get_horse()
        .returning(move |_| Ok(Some(stored.clone())));

    let server = ctx.server();
    let response = server.get(&format!("/api/horses/{}", horse_id)).await;

    response.assert_status_ok();
    let body: Horse = response.json();
    assert_eq!(body, horse);
}

#[tokio::test]
async fn test_get_missing_horse() {
    let mut ctx = TestContext::new();
    ctx.directory_repo.expect_get_horse().returning(|_| Ok(None));

    let server = ctx.server();
    let response = server.get(&format!("/api/horses/{}", Uuid::new_v4())).await;

    response.assert_status(StatusCode::NOT_FOUND);
}
