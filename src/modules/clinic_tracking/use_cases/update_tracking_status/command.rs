use crate::modules::clinic_tracking::core::status::TrackingStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTrackingStatus {
    pub booking_id: String,
    pub status: TrackingStatus,
    pub notes: Option<String>,
    /// Case session to attach to the booking.
    pub case_id: Option<String>,
    /// Version the caller last saw. Defaults to the version loaded by the handler.
    pub expected_version: Option<i64>,
}
