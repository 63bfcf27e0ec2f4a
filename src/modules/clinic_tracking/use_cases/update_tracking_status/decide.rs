use crate::modules::clinic_tracking::core::booking::{Booking, BookingPatch, FieldUpdate, apply};
use crate::modules::clinic_tracking::core::intents::{TrackingIntent, TrackingStatusChangedV1};
use crate::modules::clinic_tracking::core::invariants::check_invariants;
use crate::modules::clinic_tracking::core::resolve::resolve;
use crate::modules::clinic_tracking::core::status::TrackingStatus;
use crate::modules::clinic_tracking::core::transitions::{is_allowed, project_lifecycle};
use crate::modules::clinic_tracking::use_cases::update_tracking_status::command::UpdateTrackingStatus;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::decision::{
    DecideError, Decision,
};
use chrono::{DateTime, Utc};

pub fn decide_update_tracking_status(
    booking: &Booking,
    command: &UpdateTrackingStatus,
    now: DateTime<Utc>,
) -> Decision {
    let from = resolve(booking);
    let to = command.status;
    if !is_allowed(from, to) {
        return Decision::Rejected {
            reason: DecideError::IllegalTransition { from, to },
        };
    }

    let lifecycle_status = project_lifecycle(to, booking.lifecycle_status);
    let mut patch = BookingPatch::new().set(FieldUpdate::TrackingStatus(to));
    if lifecycle_status != booking.lifecycle_status {
        patch = patch.set(FieldUpdate::LifecycleStatus(lifecycle_status));
    }
    if let Some(notes) = &command.notes {
        patch = patch.set(FieldUpdate::ReceptionistNotes(Some(notes.clone())));
    }
    if let Some(case_id) = &command.case_id {
        patch = patch.set(FieldUpdate::CaseSessionId(Some(case_id.clone())));
    }

    patch = match to {
        TrackingStatus::Waiting => patch.set(FieldUpdate::CheckedInAt(Some(now))),
        TrackingStatus::InSession => patch.set(FieldUpdate::SessionStartedAt(Some(now))),
        TrackingStatus::Completed => patch
            .set(FieldUpdate::SessionEndedAt(Some(now)))
            .set(FieldUpdate::SessionCompletedAt(Some(now))),
        TrackingStatus::Cancelled => {
            let patch = patch.set(FieldUpdate::CancelledAt(Some(now)));
            match &command.notes {
                Some(reason) => patch.set(FieldUpdate::CancellationReason(Some(reason.clone()))),
                None => patch,
            }
        }
        TrackingStatus::NoShow => patch,
        TrackingStatus::Scheduled => patch
            .set(FieldUpdate::CheckedInAt(None))
            .set(FieldUpdate::SessionStartedAt(None))
            .set(FieldUpdate::SessionEndedAt(None)),
    };

    if let Err(name) = check_invariants(&apply(booking.clone(), &patch)) {
        return Decision::Rejected {
            reason: DecideError::InvariantViolation(name),
        };
    }

    let intents = vec![TrackingIntent::PublishTrackingStatusChanged {
        payload: TrackingStatusChangedV1 {
            booking_id: booking.id.clone(),
            clinic_id: booking.clinic_id.clone(),
            from,
            to,
            lifecycle_status,
            notes: command.notes.clone(),
            occurred_at: now,
        },
    }];

    Decision::Accepted { patch, intents }
}
