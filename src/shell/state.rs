use crate::modules::clinic_tracking::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use crate::modules::clinic_tracking::adapters::outbound::directory_in_memory::InMemoryParticipantDirectory;
use crate::modules::clinic_tracking::use_cases::create_walkin_booking::handler::CreateWalkinBookingHandler;
use crate::modules::clinic_tracking::use_cases::get_daily_board::handler::DailyBoardHandler;
use crate::modules::clinic_tracking::use_cases::get_daily_board::projection::BoardRowProjector;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::handler::UpdateTrackingStatusHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::notification_outbox::in_memory::InMemoryNotificationOutbox;
use chrono::FixedOffset;
use std::sync::Arc;

pub type TrackingHandler = UpdateTrackingStatusHandler<
    InMemoryBookingStore,
    InMemoryNotificationOutbox,
    InMemoryParticipantDirectory,
>;
pub type BoardHandler = DailyBoardHandler<InMemoryBookingStore, InMemoryParticipantDirectory>;
pub type WalkinHandler =
    CreateWalkinBookingHandler<InMemoryBookingStore, InMemoryParticipantDirectory>;

#[derive(Clone)]
pub struct AppState {
    pub tracking_handler: Arc<TrackingHandler>,
    pub board_handler: Arc<BoardHandler>,
    pub walkin_handler: Arc<WalkinHandler>,
}

impl AppState {
    /// Wires every handler onto the same store, directory and clock.
    pub fn new(
        topic: &str,
        offset: FixedOffset,
        clock: Arc<dyn Clock>,
        store: Arc<InMemoryBookingStore>,
        outbox: Arc<InMemoryNotificationOutbox>,
        directory: Arc<InMemoryParticipantDirectory>,
    ) -> Self {
        let projector = Arc::new(BoardRowProjector::new(
            directory.clone(),
            clock.clone(),
            offset,
        ));
        Self {
            tracking_handler: Arc::new(UpdateTrackingStatusHandler::new(
                topic,
                store.clone(),
                outbox,
                clock,
                projector.clone(),
            )),
            board_handler: Arc::new(DailyBoardHandler::new(store.clone(), projector.clone())),
            walkin_handler: Arc::new(CreateWalkinBookingHandler::new(store, directory, projector)),
        }
    }
}
