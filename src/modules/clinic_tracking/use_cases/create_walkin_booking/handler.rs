// Walk-in booking creation.
//
// Purpose
// - Put a child who turned up without an appointment on today's board.
//
// Boundaries
// - No payment or acceptance step. The booking starts CONFIRMED with no
//   tracking status, so it resolves to SCHEDULED like any other booking.

use crate::modules::clinic_tracking::adapters::outbound::booking_store::{
    BookingStore, BookingStoreError,
};
use crate::modules::clinic_tracking::adapters::outbound::directory::ParticipantDirectory;
use crate::modules::clinic_tracking::core::booking::Booking;
use crate::modules::clinic_tracking::core::status::LifecycleStatus;
use crate::modules::clinic_tracking::use_cases::create_walkin_booking::command::{
    CreateWalkinBooking, DEFAULT_WALKIN_DURATION_MINUTES,
};
use crate::modules::clinic_tracking::use_cases::get_daily_board::projection::{
    BoardRow, BoardRowProjector,
};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WalkinError {
    #[error("child {0} not found")]
    ChildNotFound(String),

    #[error("therapist {0} not found")]
    TherapistNotFound(String),

    #[error("duration must be at least one minute")]
    InvalidDuration,

    #[error("walk-in scheduled at {0} ends outside the supported calendar")]
    InvalidSchedule(DateTime<Utc>),

    #[error(transparent)]
    Store(#[from] BookingStoreError),

    #[error(transparent)]
    Directory(#[from] anyhow::Error),
}

pub struct CreateWalkinBookingHandler<TStore, TDirectory>
where
    TStore: BookingStore + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    projector: Arc<BoardRowProjector<TDirectory>>,
}

impl<TStore, TDirectory> CreateWalkinBookingHandler<TStore, TDirectory>
where
    TStore: BookingStore + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        directory: Arc<TDirectory>,
        projector: Arc<BoardRowProjector<TDirectory>>,
    ) -> Self {
        Self {
            store,
            directory,
            projector,
        }
    }

    pub async fn handle(&self, command: CreateWalkinBooking) -> Result<BoardRow, WalkinError> {
        let duration_minutes = command
            .duration_minutes
            .unwrap_or(DEFAULT_WALKIN_DURATION_MINUTES);
        if duration_minutes == 0 {
            return Err(WalkinError::InvalidDuration);
        }

        let child = self
            .directory
            .child(&command.child_id)
            .await?
            .ok_or_else(|| WalkinError::ChildNotFound(command.child_id.clone()))?;
        if self.directory.therapist(&command.therapist_id).await?.is_none() {
            return Err(WalkinError::TherapistNotFound(command.therapist_id));
        }

        let end_date_time = command
            .scheduled_at
            .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
            .ok_or(WalkinError::InvalidSchedule(command.scheduled_at))?;

        let booking = Booking {
            id: Uuid::now_v7().to_string(),
            clinic_id: command.clinic_id,
            start_date_time: command.scheduled_at,
            end_date_time,
            lifecycle_status: LifecycleStatus::Confirmed,
            tracking_status: None,
            checked_in_at: None,
            session_started_at: None,
            session_ended_at: None,
            session_completed_at: None,
            cancelled_at: None,
            cancellation_reason: None,
            receptionist_notes: None,
            therapist_id: command.therapist_id,
            patient_id: child.parent_id,
            child_id: Some(child.id),
            session_type_id: command.session_type_id,
            duration_minutes,
            case_session_id: command.case_id,
            version: 0,
        };
        let links = self.projector.links_for(&booking).await?;
        self.store.insert(booking.clone()).await?;
        info!(booking_id = %booking.id, clinic_id = %booking.clinic_id, "walk-in booking created");

        Ok(self.projector.row(booking, links))
    }
}
