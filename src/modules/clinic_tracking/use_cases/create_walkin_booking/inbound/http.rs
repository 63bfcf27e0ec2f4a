use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::clinic_tracking::use_cases::create_walkin_booking::command::CreateWalkinBooking;
use crate::modules::clinic_tracking::use_cases::create_walkin_booking::handler::WalkinError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateWalkinBookingBody {
    pub child_id: String,
    pub therapist_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
    pub session_type_id: Option<String>,
    pub case_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(clinic_id): Path<String>,
    body: Result<Json<CreateWalkinBookingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateWalkinBooking {
        clinic_id,
        child_id: body.child_id,
        therapist_id: body.therapist_id,
        scheduled_at: body.scheduled_at,
        duration_minutes: body.duration_minutes,
        session_type_id: body.session_type_id,
        case_id: body.case_id,
    };

    match state.walkin_handler.handle(command).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(WalkinError::ChildNotFound(_)) | Err(WalkinError::TherapistNotFound(_)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(WalkinError::InvalidDuration) | Err(WalkinError::InvalidSchedule(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
