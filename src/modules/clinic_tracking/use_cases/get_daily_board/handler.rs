use crate::modules::clinic_tracking::adapters::outbound::booking_store::{
    BookingStore, BookingStoreError, BookingWindowQuery,
};
use crate::modules::clinic_tracking::adapters::outbound::directory::ParticipantDirectory;
use crate::modules::clinic_tracking::use_cases::get_daily_board::projection::{
    BoardRow, BoardRowProjector,
};
use crate::modules::clinic_tracking::use_cases::get_daily_board::query::{
    BOARD_VISIBLE_LIFECYCLE, GetDailyBoard,
};
use crate::shared::core::calendar::{CalendarError, day_window};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Store(#[from] BookingStoreError),

    #[error(transparent)]
    Directory(#[from] anyhow::Error),
}

pub struct DailyBoardHandler<TStore, TDirectory>
where
    TStore: BookingStore + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    store: Arc<TStore>,
    projector: Arc<BoardRowProjector<TDirectory>>,
}

impl<TStore, TDirectory> DailyBoardHandler<TStore, TDirectory>
where
    TStore: BookingStore + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    pub fn new(store: Arc<TStore>, projector: Arc<BoardRowProjector<TDirectory>>) -> Self {
        Self { store, projector }
    }

    /// Rows of one clinic day ordered by start time, then id.
    pub async fn handle(&self, query: GetDailyBoard) -> Result<Vec<BoardRow>, BoardError> {
        let today = self.projector.today();
        let date = query.date.unwrap_or(today);
        let window = day_window(date, self.projector.offset())?;

        let mut bookings = self
            .store
            .list_in_window(&BookingWindowQuery {
                clinic_id: query.clinic_id.clone(),
                from: window.start,
                to: window.end,
                statuses: BOARD_VISIBLE_LIFECYCLE.to_vec(),
            })
            .await?;
        bookings.sort_by(|a, b| {
            a.start_date_time
                .cmp(&b.start_date_time)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut rows = Vec::with_capacity(bookings.len());
        for booking in bookings {
            rows.push(self.projector.project_on(booking, today).await?);
        }

        debug!(clinic_id = %query.clinic_id, %date, rows = rows.len(), "daily board served");
        Ok(rows)
    }
}
