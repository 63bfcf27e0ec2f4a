use crate::modules::clinic_tracking::core::status::LifecycleStatus;
use chrono::NaiveDate;

/// Lifecycle values that put a booking on the board. Bookings still pending
/// payment or acceptance are not the front desk's business yet.
pub const BOARD_VISIBLE_LIFECYCLE: [LifecycleStatus; 7] = [
    LifecycleStatus::Confirmed,
    LifecycleStatus::InProgress,
    LifecycleStatus::Completed,
    LifecycleStatus::CancelledByPatient,
    LifecycleStatus::CancelledByTherapist,
    LifecycleStatus::NoShowPatient,
    LifecycleStatus::NoShowTherapist,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDailyBoard {
    pub clinic_id: String,
    /// Calendar date at the clinic. `None` means today.
    pub date: Option<NaiveDate>,
}
