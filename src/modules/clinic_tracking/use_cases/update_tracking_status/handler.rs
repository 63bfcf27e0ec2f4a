use crate::modules::clinic_tracking::adapters::outbound::booking_store::{
    BookingStore, BookingStoreError,
};
use crate::modules::clinic_tracking::adapters::outbound::directory::ParticipantDirectory;
use crate::modules::clinic_tracking::adapters::outbound::notification_outbox::dispatch_intents;
use crate::modules::clinic_tracking::core::booking::apply;
use crate::modules::clinic_tracking::use_cases::get_daily_board::projection::{
    BoardRow, BoardRowProjector,
};
use crate::modules::clinic_tracking::use_cases::update_tracking_status::command::UpdateTrackingStatus;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::decide::decide_update_tracking_status;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::decision::{
    DecideError, Decision,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::notification_outbox::NotificationOutbox;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("booking {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("version conflict: expected {expected}, actual {actual}")]
    VersionConflict { expected: i64, actual: i64 },

    #[error(transparent)]
    Store(BookingStoreError),

    #[error(transparent)]
    Directory(#[from] anyhow::Error),
}

impl From<BookingStoreError> for ApplicationError {
    fn from(err: BookingStoreError) -> Self {
        match err {
            BookingStoreError::NotFound(id) => Self::NotFound(id),
            BookingStoreError::VersionMismatch { expected, actual } => {
                Self::VersionConflict { expected, actual }
            }
            other => Self::Store(other),
        }
    }
}

pub struct UpdateTrackingStatusHandler<TStore, TOutbox, TDirectory>
where
    TStore: BookingStore + 'static,
    TOutbox: NotificationOutbox + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
    clock: Arc<dyn Clock>,
    projector: Arc<BoardRowProjector<TDirectory>>,
}

impl<TStore, TOutbox, TDirectory> UpdateTrackingStatusHandler<TStore, TOutbox, TDirectory>
where
    TStore: BookingStore + 'static,
    TOutbox: NotificationOutbox + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        store: Arc<TStore>,
        outbox: Arc<TOutbox>,
        clock: Arc<dyn Clock>,
        projector: Arc<BoardRowProjector<TDirectory>>,
    ) -> Self {
        Self {
            topic: topic.into(),
            store,
            outbox,
            clock,
            projector,
        }
    }

    pub async fn handle(&self, command: UpdateTrackingStatus) -> Result<BoardRow, ApplicationError> {
        let booking = self
            .store
            .load(&command.booking_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(command.booking_id.clone()))?;

        let expected_version = command.expected_version.unwrap_or(booking.version);
        if expected_version != booking.version {
            return Err(ApplicationError::VersionConflict {
                expected: expected_version,
                actual: booking.version,
            });
        }

        match decide_update_tracking_status(&booking, &command, self.clock.now()) {
            Decision::Accepted { patch, intents } => {
                // Links come from the post-transition record and must resolve before the write.
                let links = self
                    .projector
                    .links_for(&apply(booking.clone(), &patch))
                    .await?;
                let updated = self
                    .store
                    .update(&booking.id, expected_version, &patch)
                    .await?;
                info!(
                    booking_id = %updated.id,
                    status = %command.status,
                    version = updated.version,
                    "tracking status updated"
                );

                // The booking write has landed; a lost notification must not undo it.
                if let Err(err) = dispatch_intents(
                    &*self.outbox,
                    &updated.id,
                    updated.version,
                    &self.topic,
                    intents,
                )
                .await
                {
                    error!(booking_id = %updated.id, error = %err, "failed to enqueue tracking notification");
                }

                Ok(self.projector.row(updated, links))
            }
            Decision::Rejected { reason } => {
                warn!(booking_id = %booking.id, %reason, "tracking status change rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
