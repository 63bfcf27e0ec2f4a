use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::clinic_tracking::use_cases::get_daily_board::inbound::graphql::QueryRoot;
use crate::modules::clinic_tracking::use_cases::create_walkin_booking::inbound::graphql::CreateWalkinBookingMutation;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::inbound::graphql::UpdateTrackingStatusMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(UpdateTrackingStatusMutation, CreateWalkinBookingMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
