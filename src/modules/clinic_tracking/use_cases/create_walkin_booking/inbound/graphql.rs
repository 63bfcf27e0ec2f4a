use async_graphql::{Context, Object, Result as GqlResult};
use chrono::DateTime;

use crate::modules::clinic_tracking::use_cases::create_walkin_booking::command::CreateWalkinBooking;
use crate::modules::clinic_tracking::use_cases::get_daily_board::inbound::graphql::GqlBoardRow;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateWalkinBookingMutation;

#[Object]
impl CreateWalkinBookingMutation {
    /// `scheduled_at` is epoch milliseconds.
    #[allow(clippy::too_many_arguments)]
    async fn create_walkin_booking(
        &self,
        context: &Context<'_>,
        clinic_id: String,
        child_id: String,
        therapist_id: String,
        scheduled_at: i64,
        duration_minutes: Option<u32>,
        session_type_id: Option<String>,
        case_id: Option<String>,
    ) -> GqlResult<GqlBoardRow> {
        let state = context.data_unchecked::<AppState>();
        let scheduled_at = DateTime::from_timestamp_millis(scheduled_at)
            .ok_or_else(|| async_graphql::Error::new("scheduled_at out of range"))?;

        let command = CreateWalkinBooking {
            clinic_id,
            child_id,
            therapist_id,
            scheduled_at,
            duration_minutes,
            session_type_id,
            case_id,
        };

        let row = state
            .walkin_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(row.into())
    }
}
