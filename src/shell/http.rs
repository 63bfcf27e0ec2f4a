use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::clinic_tracking::use_cases::create_walkin_booking::inbound::http as walkin_http;
use crate::modules::clinic_tracking::use_cases::get_daily_board::inbound::http as board_http;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::inbound::http as tracking_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/clinics/{clinic_id}/today", get(board_http::handle))
        .route(
            "/clinics/{clinic_id}/walkin-bookings",
            post(walkin_http::handle),
        )
        .route(
            "/bookings/{booking_id}/tracking-status",
            patch(tracking_http::handle),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
