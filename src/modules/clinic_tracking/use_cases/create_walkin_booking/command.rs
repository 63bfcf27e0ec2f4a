use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WALKIN_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWalkinBooking {
    pub clinic_id: String,
    pub child_id: String,
    pub therapist_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
    pub session_type_id: Option<String>,
    /// Case session the visit belongs to.
    pub case_id: Option<String>,
}
