// Booking record as seen by clinic tracking, and the field-update set a
// transition writes back in one atomic store call.
//
// Boundaries
// - No input or output here. `apply` is pure, the store decides when it runs.

use crate::modules::clinic_tracking::core::status::{LifecycleStatus, TrackingStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub clinic_id: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub lifecycle_status: LifecycleStatus,
    pub tracking_status: Option<TrackingStatus>,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub session_started_at: Option<DateTime<Utc>>,
    pub session_ended_at: Option<DateTime<Utc>>,
    pub session_completed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub receptionist_notes: Option<String>,
    pub therapist_id: String,
    pub patient_id: String,
    pub child_id: Option<String>,
    pub session_type_id: Option<String>,
    pub duration_minutes: u32,
    pub case_session_id: Option<String>,
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    TrackingStatus(TrackingStatus),
    LifecycleStatus(LifecycleStatus),
    CheckedInAt(Option<DateTime<Utc>>),
    SessionStartedAt(Option<DateTime<Utc>>),
    SessionEndedAt(Option<DateTime<Utc>>),
    SessionCompletedAt(Option<DateTime<Utc>>),
    CancelledAt(Option<DateTime<Utc>>),
    CancellationReason(Option<String>),
    ReceptionistNotes(Option<String>),
    CaseSessionId(Option<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub updates: Vec<FieldUpdate>,
}

impl BookingPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, update: FieldUpdate) -> Self {
        self.updates.push(update);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Apply every update in order. Identity, schedule and version are left alone.
pub fn apply(mut booking: Booking, patch: &BookingPatch) -> Booking {
    for update in &patch.updates {
        match update.clone() {
            FieldUpdate::TrackingStatus(v) => booking.tracking_status = Some(v),
            FieldUpdate::LifecycleStatus(v) => booking.lifecycle_status = v,
            FieldUpdate::CheckedInAt(v) => booking.checked_in_at = v,
            FieldUpdate::SessionStartedAt(v) => booking.session_started_at = v,
            FieldUpdate::SessionEndedAt(v) => booking.session_ended_at = v,
            FieldUpdate::SessionCompletedAt(v) => booking.session_completed_at = v,
            FieldUpdate::CancelledAt(v) => booking.cancelled_at = v,
            FieldUpdate::CancellationReason(v) => booking.cancellation_reason = v,
            FieldUpdate::ReceptionistNotes(v) => booking.receptionist_notes = v,
            FieldUpdate::CaseSessionId(v) => booking.case_session_id = v,
        }
    }
    booking
}
