use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::clinic_tracking::use_cases::get_daily_board::inbound::graphql::{
    GqlBoardRow, GqlTrackingStatus,
};
use crate::modules::clinic_tracking::use_cases::update_tracking_status::command::UpdateTrackingStatus;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateTrackingStatusMutation;

#[Object]
impl UpdateTrackingStatusMutation {
    async fn update_tracking_status(
        &self,
        context: &Context<'_>,
        booking_id: String,
        status: GqlTrackingStatus,
        notes: Option<String>,
        case_id: Option<String>,
        expected_version: Option<i64>,
    ) -> GqlResult<GqlBoardRow> {
        let state = context.data_unchecked::<AppState>();

        let command = UpdateTrackingStatus {
            booking_id,
            status: status.into(),
            notes,
            case_id,
            expected_version,
        };

        let row = state
            .tracking_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(row.into())
    }
}
