// Tracking state machine.
//
// The tracking status is the authoritative state. The lifecycle status other
// modules read is projected from it on every transition.

use crate::modules::clinic_tracking::core::resolve::status_from_lifecycle;
use crate::modules::clinic_tracking::core::status::{LifecycleStatus, TrackingStatus};

pub fn allowed_targets(from: TrackingStatus) -> &'static [TrackingStatus] {
    use TrackingStatus::*;
    match from {
        Scheduled => &[Waiting, InSession, Cancelled, NoShow],
        Waiting => &[Scheduled, InSession, Cancelled, NoShow],
        InSession => &[Scheduled, Completed, Cancelled],
        Completed | Cancelled | NoShow => &[],
    }
}

pub fn is_allowed(from: TrackingStatus, to: TrackingStatus) -> bool {
    allowed_targets(from).contains(&to)
}

/// Lifecycle value that agrees with `status`.
///
/// SCHEDULED and WAITING leave any pre-session lifecycle alone (billing states
/// such as PAYMENT_PENDING included) and only pull a started or closed one
/// back to CONFIRMED.
pub fn project_lifecycle(status: TrackingStatus, current: LifecycleStatus) -> LifecycleStatus {
    match status {
        TrackingStatus::Scheduled | TrackingStatus::Waiting => {
            if status_from_lifecycle(current) == TrackingStatus::Scheduled {
                current
            } else {
                LifecycleStatus::Confirmed
            }
        }
        TrackingStatus::InSession => LifecycleStatus::InProgress,
        TrackingStatus::Completed => LifecycleStatus::Completed,
        TrackingStatus::Cancelled => LifecycleStatus::CancelledByTherapist,
        TrackingStatus::NoShow => LifecycleStatus::NoShowPatient,
    }
}
