use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::clinic_tracking::use_cases::get_daily_board::handler::BoardError;
use crate::modules::clinic_tracking::use_cases::get_daily_board::query::GetDailyBoard;
use crate::shared::core::calendar::parse_iso_date;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TodayParams {
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(clinic_id): Path<String>,
    Query(params): Query<TodayParams>,
) -> impl IntoResponse {
    let date = match params.date.as_deref().map(parse_iso_date).transpose() {
        Ok(date) => date,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state
        .board_handler
        .handle(GetDailyBoard { clinic_id, date })
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(BoardError::Calendar(_)) => StatusCode::BAD_REQUEST.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
