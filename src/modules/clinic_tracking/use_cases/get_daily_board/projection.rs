// Board row projection.
//
// Purpose
// - Turn a stored booking plus its linked people into the row the front desk sees.
//
// Responsibilities
// - Resolve the effective status.
// - Compute the child's age against "today" in the clinic's offset.
//
// Used by the daily board and by every write that answers with a row, so a
// row looks the same whichever path produced it.

use crate::modules::clinic_tracking::adapters::outbound::directory::ParticipantDirectory;
use crate::modules::clinic_tracking::core::booking::Booking;
use crate::modules::clinic_tracking::core::participants::BookingLinks;
use crate::modules::clinic_tracking::core::resolve::resolve;
use crate::modules::clinic_tracking::core::status::{
    EffectiveStatus, LifecycleStatus, TrackingStatus,
};
use crate::shared::core::calendar::{age_in_years, local_date};
use crate::shared::core::clock::Clock;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildSummary {
    pub id: String,
    pub first_name: String,
    pub nickname: Option<String>,
    pub age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentSummary {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TherapistSummary {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRow {
    pub id: String,
    pub clinic_id: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub status: EffectiveStatus,
    pub tracking_status: Option<TrackingStatus>,
    pub lifecycle_status: LifecycleStatus,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub session_started_at: Option<DateTime<Utc>>,
    pub session_ended_at: Option<DateTime<Utc>>,
    pub session_completed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub child: Option<ChildSummary>,
    pub parent: Option<ParentSummary>,
    pub therapist: Option<TherapistSummary>,
    pub session_type_name: Option<String>,
    pub duration_minutes: u32,
    pub receptionist_notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub case_id: Option<String>,
    pub version: i64,
}

pub fn board_row(booking: Booking, links: BookingLinks, today: NaiveDate) -> BoardRow {
    let status = resolve(&booking);
    BoardRow {
        status,
        child: links.child.map(|c| ChildSummary {
            age: c.date_of_birth.map(|dob| age_in_years(dob, today)),
            id: c.id,
            first_name: c.first_name,
            nickname: c.nickname,
        }),
        parent: links.parent.map(|p| ParentSummary {
            id: p.id,
            name: p.name,
            phone: p.phone,
        }),
        therapist: links.therapist.map(|t| TherapistSummary {
            id: t.id,
            name: t.name,
            avatar_url: t.avatar_url,
        }),
        session_type_name: links.session_type_name,
        case_id: links.case_id,
        id: booking.id,
        clinic_id: booking.clinic_id,
        start_date_time: booking.start_date_time,
        end_date_time: booking.end_date_time,
        tracking_status: booking.tracking_status,
        lifecycle_status: booking.lifecycle_status,
        checked_in_at: booking.checked_in_at,
        session_started_at: booking.session_started_at,
        session_ended_at: booking.session_ended_at,
        session_completed_at: booking.session_completed_at,
        cancelled_at: booking.cancelled_at,
        duration_minutes: booking.duration_minutes,
        receptionist_notes: booking.receptionist_notes,
        cancellation_reason: booking.cancellation_reason,
        version: booking.version,
    }
}

pub struct BoardRowProjector<TDirectory>
where
    TDirectory: ParticipantDirectory + 'static,
{
    directory: Arc<TDirectory>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl<TDirectory> BoardRowProjector<TDirectory>
where
    TDirectory: ParticipantDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>, clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self {
            directory,
            clock,
            offset,
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Calendar date at the clinic right now.
    pub fn today(&self) -> NaiveDate {
        local_date(self.clock.now(), self.offset)
    }

    pub async fn links_for(&self, booking: &Booking) -> anyhow::Result<BookingLinks> {
        self.directory.links_for(booking).await
    }

    /// Row for links already resolved, aged against today.
    pub fn row(&self, booking: Booking, links: BookingLinks) -> BoardRow {
        board_row(booking, links, self.today())
    }

    pub async fn project_on(&self, booking: Booking, today: NaiveDate) -> anyhow::Result<BoardRow> {
        let links = self.links_for(&booking).await?;
        Ok(board_row(booking, links, today))
    }
}
