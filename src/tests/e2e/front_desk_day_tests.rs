// A front-desk day driven through the HTTP router: the board, check-in,
// session start and completion of the 09:00 booking, and a walk-in.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::modules::clinic_tracking::adapters::outbound::booking_store::BookingStore;
use crate::modules::clinic_tracking::core::status::{LifecycleStatus, TrackingStatus};
use crate::shell::http::router;
use crate::tests::fixtures::state::{TEST_TOPIC, make_test_state};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn board() -> Request<Body> {
    Request::get("/clinics/clinic-0001/today")
        .body(Body::empty())
        .unwrap()
}

fn move_to(booking_id: &str, status: &str) -> Request<Body> {
    Request::patch(format!("/bookings/{booking_id}/tracking-status"))
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"status":"{status}"}}"#)))
        .unwrap()
}

#[tokio::test]
async fn it_should_carry_a_booking_from_scheduled_to_completed() {
    let (state, deps) = make_test_state().await;
    let app = router(state);

    let (status, rows) = send(&app, board()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows[0]["id"], "booking-0001");
    assert_eq!(rows[0]["status"], "SCHEDULED");

    deps.clock.advance(Duration::minutes(25));
    let (status, row) = send(&app, move_to("booking-0001", "WAITING")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row["status"], "WAITING");
    assert_eq!(row["checked_in_at"], "2024-05-01T08:55:00Z");

    deps.clock.advance(Duration::minutes(5));
    let (status, row) = send(&app, move_to("booking-0001", "IN_SESSION")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row["lifecycle_status"], "IN_PROGRESS");
    assert_eq!(row["session_started_at"], "2024-05-01T09:00:00Z");

    deps.clock.advance(Duration::minutes(50));
    let (status, row) = send(&app, move_to("booking-0001", "COMPLETED")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row["status"], "COMPLETED");
    assert_eq!(row["session_ended_at"], "2024-05-01T09:50:00Z");
    assert_eq!(row["session_completed_at"], "2024-05-01T09:50:00Z");
    assert_eq!(row["version"], 3);

    let (_, rows) = send(&app, board()).await;
    assert_eq!(rows[0]["status"], "COMPLETED");
    assert_eq!(rows[0]["lifecycle_status"], "COMPLETED");

    let stored = deps.store.load("booking-0001").await.unwrap().unwrap();
    assert_eq!(stored.tracking_status, Some(TrackingStatus::Completed));
    assert_eq!(stored.lifecycle_status, LifecycleStatus::Completed);

    let messages = deps.outbox.messages().await;
    let transitions: Vec<_> = messages
        .iter()
        .map(|m| (m.payload["from"].clone(), m.payload["to"].clone()))
        .collect();
    assert_eq!(
        transitions,
        vec![
            (Value::from("SCHEDULED"), Value::from("WAITING")),
            (Value::from("WAITING"), Value::from("IN_SESSION")),
            (Value::from("IN_SESSION"), Value::from("COMPLETED")),
        ]
    );
    assert!(messages.iter().all(|m| m.topic == TEST_TOPIC));
}

#[tokio::test]
async fn it_should_keep_a_completed_booking_closed() {
    let (state, deps) = make_test_state().await;
    let app = router(state);
    for status in ["WAITING", "IN_SESSION", "COMPLETED"] {
        let (code, _) = send(&app, move_to("booking-0001", status)).await;
        assert_eq!(code, StatusCode::OK);
    }
    let before = deps.store.load("booking-0001").await.unwrap();

    let (status, _) = send(&app, move_to("booking-0001", "WAITING")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(deps.store.load("booking-0001").await.unwrap(), before);
}

#[tokio::test]
async fn it_should_put_a_walkin_on_the_board_and_check_it_in() {
    let (state, _) = make_test_state().await;
    let app = router(state);

    let (status, created) = send(
        &app,
        Request::post("/clinics/clinic-0001/walkin-bookings")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"child_id":"child-0001","therapist_id":"therapist-0001","scheduled_at":"2024-05-01T08:30:00Z","duration_minutes":30}"#,
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let walkin_id = created["id"].as_str().unwrap().to_string();

    let (_, rows) = send(&app, board()).await;
    let ids: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec![walkin_id.clone(), "booking-0001".to_string()]);

    let (status, row) = send(&app, move_to(&walkin_id, "WAITING")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row["status"], "WAITING");
    assert_eq!(row["child"]["first_name"], "Maya");
}

#[tokio::test]
async fn it_should_answer_404_for_a_booking_that_does_not_exist() {
    let (state, _) = make_test_state().await;
    let app = router(state);

    let (status, _) = send(&app, move_to("booking-unknown", "WAITING")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
