use axum::http::StatusCode;
use chrono::Utc;
use mockall::predicate;
use paddock_core::models::{
    rental::{MuseumRental, RentalStatus},
    user::UserRole,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{future_day, rental, sign_in, user, user_header, TestContext};

#[test_log::test(tokio::test)]
async fn test_member_requests_rental() {
    let mut ctx = TestContext::new();
    let rider = user(UserRole::Rider);
    let day = future_day();
    sign_in(&mut ctx, &rider);

    ctx.rental_repo
        .expect_create_rental()
        .withf(|new_rental| new_rental.guests == 30 && new_rental.notes.as_deref() == Some("Pony club"))
        .times(1)
        .returning(|new_rental| {
            Ok(MuseumRental {
                id: Uuid::new_v4(),
                user_id: new_rental.user_id,
                user_name: new_rental.user_name.clone(),
                email: new_rental.email.clone(),
                date: new_rental.date,
                time: new_rental.time,
                guests: new_rental.guests,
                notes: new_rental.notes.clone(),
                status: RentalStatus::Pending,
                created_at: Utc::now(),
            })
        });

    let server = ctx.server();
    let (name, value) = user_header(rider.id);
    let response = server
        .post("/api/rentals")
        .add_header(name, value)
        .json(&json!({ "date": day, "time": "18:30", "guests": 30, "notes": " Pony club " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: MuseumRental = response.json();
    assert_eq!(created.status, RentalStatus::Pending);
    assert_eq!(created.user_id, rider.id);
    assert_eq!(created.email, rider.email);
}

#[tokio::test]
async fn test_rental_with_too_many_guests_rejected() {
    let mut ctx = TestContext::new();
    let rider = user(UserRole::Rider);
    sign_in(&mut ctx, &rider);
    ctx.rental_repo.expect_create_rental().never();

    let server = ctx.server();
    let (name, value) = user_header(rider.id);
    let response = server
        .post("/api/rentals")
        .add_header(name, value)
        .json(&json!({ "date": future_day(), "time": "18:30", "guests": 51 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rider_cannot_list_rentals() {
    let mut ctx = TestContext::new();
    let rider = user(UserRole::Rider);
    sign_in(&mut ctx, &rider);
    ctx.rental_repo.expect_list_rentals().never();

    let server = ctx.server();
    let (name, value) = user_header(rider.id);
    let response = server.get("/api/rentals").add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[rstest]
#[case(UserRole::Instructor)]
#[case(UserRole::Manager)]
#[tokio::test]
async fn test_staff_list_rentals(#[case] role: UserRole) {
    let mut ctx = TestContext::new();
    let staff = user(role);
    sign_in(&mut ctx, &staff);

    let member = user(UserRole::Rider);
    let requests = vec![
        rental(&member, future_day(), RentalStatus::Pending),
        rental(&member, future_day(), RentalStatus::Confirmed),
    ];
    ctx.rental_repo
        .expect_list_rentals()
        .returning(move || Ok(requests.clone()));

    let server = ctx.server();
    let (name, value) = user_header(staff.id);
    let response = server.get("/api/rentals").add_header(name, value).await;

    response.assert_status_ok();
    let listed: Vec<MuseumRental> = response.json();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_instructor_cannot_confirm_rental() {
    let mut ctx = TestContext::new();
    let coach = user(UserRole::Instructor);
    sign_in(&mut ctx, &coach);
    ctx.rental_repo.expect_update_rental_status().never();

    let server = ctx.server();
    let (name, value) = user_header(coach.id);
    let response = server
        .put(&format!("/api/rentals/{}/status", Uuid::new_v4()))
        .add_header(name, value)
        .json(&json!({ "status": "Confirmed" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_manager_confirms_rental() {
    let mut ctx = TestContext::new();
    let manager = user(UserRole::Manager);
    sign_in(&mut ctx, &manager);

    let pending = rental(&user(UserRole::Rider), future_day(), RentalStatus::Pending);
    let rental_id = pending.id;
    let stored = pending.clone();
    ctx.rental_repo
        .expect_get_rental()
        .with(predicate::eq(rental_id))
        .returning(move |_| Ok(Some(stored.clone())));
    ctx.rental_repo
        .expect_update_rental_status()
        .with(predicate::eq(rental_id), predicate::eq(RentalStatus::Confirmed))
        .times(1)
        .returning(move |_, status| {
            Ok(MuseumRental {
                status,
                ..pending.clone()
            })
        });

    let server = ctx.server();
    let (name, value) = user_header(manager.id);
    let response = server
        .put(&format!("/api/rentals/{}/status", rental_id))
        .add_header(name, value)
        .json(&json!({ "status": "Confirmed" }))
        .await;

    response.assert_status_ok();
    let confirmed: MuseumRental = response.json();
    assert_eq!(confirmed.status, RentalStatus::Confirmed);
}

#[tokio::test]
async fn test_cancelled_rental_cannot_be_confirmed() {
    let mut ctx = TestContext::new();
    let manager = user(UserRole::Manager);
    sign_in(&mut ctx, &manager);

    let cancelled = rental(&user(UserRole::Rider), future_day(), RentalStatus::Cancelled);
    let rental_id = cancelled.id;
    ctx.rental_repo
        .expect_get_rental()
        .returning(move |_| Ok(Some(cancelled.clone())));
    ctx.rental_repo.expect_update_rental_status().never();

    let server = ctx.server();
    let (name, value) = user_header(manager.id);
    let response = server
        .put(&format!("/api/rentals/{}/status", rental_id))
        .add_header(name, value)
        .json(&json!({ "status": "Confirmed" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_rental_not_found() {
    let mut ctx = TestContext::new();
    let manager = user(UserRole::Manager);
    sign_in(&mut ctx, &manager);
    ctx.rental_repo.expect_get_rental().returning(|_| Ok(None));

    let server = ctx.server();
    let (name, value) = user_header(manager.id);
    let response = server
        .put(&format!("/api/rentals/{}/status", Uuid::new_v4()))
        .add_header(name, value)
        .json(&json!({ "status": "Cancelled" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
