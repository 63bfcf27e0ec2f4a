use crate::modules::clinic_tracking::core::status::{LifecycleStatus, TrackingStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingStatusChangedV1 {
    pub booking_id: String,
    pub clinic_id: String,
    pub from: TrackingStatus,
    pub to: TrackingStatus,
    pub lifecycle_status: LifecycleStatus,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Produced by the decider alongside the patch; the outbox adapter turns
/// them into outbox messages once the write has landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingIntent {
    PublishTrackingStatusChanged { payload: TrackingStatusChangedV1 },
}
