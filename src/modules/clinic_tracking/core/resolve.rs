use crate::modules::clinic_tracking::core::booking::Booking;
use crate::modules::clinic_tracking::core::status::{
    EffectiveStatus, LifecycleStatus, TrackingStatus,
};

/// Effective status of a booking. An explicit tracking status always wins.
pub fn resolve(booking: &Booking) -> EffectiveStatus {
    booking
        .tracking_status
        .unwrap_or_else(|| status_from_lifecycle(booking.lifecycle_status))
}

pub fn status_from_lifecycle(lifecycle: LifecycleStatus) -> TrackingStatus {
    match lifecycle {
        LifecycleStatus::Confirmed | LifecycleStatus::Accepted => TrackingStatus::Scheduled,
        LifecycleStatus::InProgress => TrackingStatus::InSession,
        LifecycleStatus::Completed => TrackingStatus::Completed,
        LifecycleStatus::CancelledByPatient | LifecycleStatus::CancelledByTherapist => {
            TrackingStatus::Cancelled
        }
        LifecycleStatus::NoShowPatient | LifecycleStatus::NoShowTherapist => TrackingStatus::NoShow,
        LifecycleStatus::Pending
        | LifecycleStatus::PaymentPending
        | LifecycleStatus::Rescheduled
        | LifecycleStatus::Other => TrackingStatus::Scheduled,
    }
}
