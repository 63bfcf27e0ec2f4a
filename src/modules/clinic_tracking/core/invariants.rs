use crate::modules::clinic_tracking::core::booking::Booking;
use crate::modules::clinic_tracking::core::transitions::project_lifecycle;
use chrono::{DateTime, Utc};

/// Checks a booking that a transition is about to write.
///
/// Returns the name of the first violated invariant.
pub fn check_invariants(booking: &Booking) -> Result<(), &'static str> {
    // TimestampsMonotonic
    if !in_order(booking.checked_in_at, booking.session_started_at)
        || !in_order(booking.session_started_at, booking.session_ended_at)
        || !in_order(booking.checked_in_at, booking.session_ended_at)
    {
        return Err("TimestampsMonotonic");
    }

    // LifecycleFollowsTracking
    if let Some(status) = booking.tracking_status {
        if project_lifecycle(status, booking.lifecycle_status) != booking.lifecycle_status {
            return Err("LifecycleFollowsTracking");
        }
    }

    Ok(())
}

fn in_order(earlier: Option<DateTime<Utc>>, later: Option<DateTime<Utc>>) -> bool {
    match (earlier, later) {
        (Some(a), Some(b)) => a <= b,
        _ => true,
    }
}
