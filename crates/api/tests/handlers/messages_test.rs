use axum::http::StatusCode;
use mockall::predicate;
use paddock_core::models::{message::TeamMessage, user::UserRole};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{sign_in, team_message, user, user_header, TestContext};

#[tokio::test]
async fn test_rider_cannot_read_team_board() {
    let mut ctx = TestContext::new();
    let rider = user(UserRole::Rider);
    sign_in(&mut ctx, &rider);
    ctx.message_repo.expect_recent_messages().never();

    let server = ctx.server();
    let (name, value) = user_header(rider.id);
    let response = server.get("/api/messages").add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_rider_cannot_post_to_team_board() {
    let mut ctx = TestContext::new();
    let rider = user(UserRole::Rider);
    sign_in(&mut ctx, &rider);
    ctx.message_repo.expect_post_message().never();

    let server = ctx.server();
    let (name, value) = user_header(rider.id);
    let response = server
        .post("/api/messages")
        .add_header(name, value)
        .json(&json!({ "text": "hello" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_posts_message() {
    let mut ctx = TestContext::new();
    let coach = user(UserRole::Instructor);
    sign_in(&mut ctx, &coach);

    let author = coach.clone();
    ctx.message_repo
        .expect_post_message()
        .withf(|message| message.text == "Farrier is here at 3")
        .times(1)
        .returning(move |message| Ok(team_message(&author, &message.text)));

    let server = ctx.server();
    let (name, value) = user_header(coach.id);
    let response = server
        .post("/api/messages")
        .add_header(name, value)
        .json(&json!({ "text": "  Farrier is here at 3  " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let posted: TeamMessage = response.json();
    assert_eq!(posted.user_id, coach.id);
    assert_eq!(posted.user_name, "Test Instructor");
}

#[tokio::test]
async fn test_blank_message_rejected() {
    let mut ctx = TestContext::new();
    let manager = user(UserRole::Manager);
    sign_in(&mut ctx, &manager);
    ctx.message_repo.expect_post_message().never();

    let server = ctx.server();
    let (name, value) = user_header(manager.id);
    let response = server
        .post("/api/messages")
        .add_header(name, value)
        .json(&json!({ "text": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recent_messages_honours_limit() {
    let mut ctx = TestContext::new();
    let manager = user(UserRole::Manager);
    sign_in(&mut ctx, &manager);

    let board = vec![
        team_message(&manager, "vet at noon"),
        team_message(&manager, "arena closed"),
    ];
    ctx.message_repo
        .expect_recent_messages()
        .with(predicate::eq(2))
        .times(1)
        .returning(move |_| Ok(board.clone()));

    let server = ctx.server();
    let (name, value) = user_header(manager.id);
    let response = server
        .get("/api/messages?limit=2")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let messages: Vec<TeamMessage> = response.json();
    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["vet at noon", "arena closed"]);
}
