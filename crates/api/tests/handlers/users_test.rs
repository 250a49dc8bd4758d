use axum::http::StatusCode;
use chrono::Utc;
use paddock_api::middleware::auth;
use paddock_core::models::user::{User, UserCredentials, UserRole};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{user, TestContext, STAFF_CODE};

/// Echoes whatever the handler asks to store.
fn accept_new_accounts(ctx: &mut TestContext) {
    ctx.account_repo
        .expect_create_user()
        .times(1)
        .returning(|email, display_name, _, role| {
            Ok(User {
                id: Uuid::new_v4(),
                email: email.to_string(),
                display_name,
                role,
                created_at: Utc::now(),
            })
        });
}

#[test_log::test(tokio::test)]
async fn test_register_defaults_to_rider() {
    let mut ctx = TestContext::new();
    accept_new_accounts(&mut ctx);

    let server = ctx.server();
    let response = server
        .post("/api/users")
        .json(&json!({
            "email": "  New.Rider@Example.org ",
            "password": "hunter2hunter2",
            "display_name": "New Rider"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: User = response.json();
    assert_eq!(created.role, UserRole::Rider);
    assert_eq!(created.email, "new.rider@example.org");
}

#[rstest]
#[case("Instructor", UserRole::Instructor)]
#[case("Manager", UserRole::Manager)]
#[tokio::test]
async fn test_register_staff_with_valid_code(#[case] requested: &str, #[case] expected: UserRole) {
    let mut ctx = TestContext::new();
    accept_new_accounts(&mut ctx);

    let server = ctx.server();
    let response = server
        .post("/api/users")
        .json(&json!({
            "email": "coach@example.org",
            "password": "hunter2hunter2",
            "role": requested,
            "registration_code": format!(" {STAFF_CODE} ")
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: User = response.json();
    assert_eq!(created.role, expected);
}

#[rstest]
#[case::wrong_code(json!({ "role": "Instructor", "registration_code": "let-me-in" }))]
#[case::missing_code(json!({ "role": "Manager" }))]
#[case::admin_with_code(json!({ "role": "Admin", "registration_code": STAFF_CODE }))]
#[tokio::test]
async fn test_register_staff_rejected(#[case] extra: Value) {
    let mut ctx = TestContext::new();
    ctx.account_repo.expect_create_user().never();

    let mut body = json!({ "email": "coach@example.org", "password": "hunter2hunter2" });
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        body.extend(extra.clone());
    }

    let server = ctx.server();
    let response = server.post("/api/users").json(&body).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_signup_disabled_without_configured_code() {
    let mut ctx = TestContext::new();
    ctx.staff_signup_code = None;
    ctx.account_repo.expect_create_user().never();

    let server = ctx.server();
    let response = server
        .post("/api/users")
        .json(&json!({
            "email": "coach@example.org",
            "password": "hunter2hunter2",
            "role": "Instructor",
            "registration_code": ""
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_register_short_password_rejected() {
    let mut ctx = TestContext::new();
    ctx.account_repo.expect_create_user().never();

    let server = ctx.server();
    let response = server
        .post("/api/users")
        .json(&json!({ "email": "rider@example.org", "password": "short" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_account() {
    let mut ctx = TestContext::new();
    let account = user(UserRole::Manager);
    let credentials = UserCredentials {
        user: account.clone(),
        password_hash: auth::hash_password("correct horse battery").unwrap(),
    };
    ctx.account_repo
        .expect_find_credentials()
        .returning(move |_| Ok(Some(credentials.clone())));

    let server = ctx.server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": account.email, "password": "correct horse battery" }))
        .await;

    response.assert_status_ok();
    let signed_in: User = response.json();
    assert_eq!(signed_in, account);
}

#[rstest]
#[case::wrong_password(true)]
#[case::unknown_email(false)]
#[tokio::test]
async fn test_login_failure_is_unauthorized(#[case] account_exists: bool) {
    let mut ctx = TestContext::new();
    let credentials = account_exists.then(|| UserCredentials {
        user: user(UserRole::Rider),
        password_hash: auth::hash_password("correct horse battery").unwrap(),
    });
    ctx.account_repo
        .expect_find_credentials()
        .returning(move |_| Ok(credentials.clone()));

    let server = ctx.server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "rider@paddock.test", "password": "wrong password" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
