use crate::modules::clinic_tracking::core::booking::BookingPatch;
use crate::modules::clinic_tracking::core::intents::TrackingIntent;
use crate::modules::clinic_tracking::core::status::TrackingStatus;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("cannot move from {from} to {to}")]
    IllegalTransition {
        from: TrackingStatus,
        to: TrackingStatus,
    },

    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        patch: BookingPatch,
        intents: Vec<TrackingIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
