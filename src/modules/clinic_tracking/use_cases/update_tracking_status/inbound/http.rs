use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::clinic_tracking::core::status::TrackingStatus;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::command::UpdateTrackingStatus;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTrackingStatusBody {
    pub status: TrackingStatus,
    pub notes: Option<String>,
    pub case_id: Option<String>,
    pub expected_version: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    body: Result<Json<UpdateTrackingStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    // Unknown status values fail here too.
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTrackingStatus {
        booking_id,
        status: body.status,
        notes: body.notes,
        case_id: body.case_id,
        expected_version: body.expected_version,
    };

    match state.tracking_handler.handle(command).await {
        Ok(row) => (StatusCode::OK, Json(row)).into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ApplicationError::Domain(_)) | Err(ApplicationError::VersionConflict { .. }) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
