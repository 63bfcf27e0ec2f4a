use crate::modules::clinic_tracking::core::booking::{Booking, BookingPatch};
use crate::modules::clinic_tracking::core::status::LifecycleStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingStoreError {
    #[error("booking {0} not found")]
    NotFound(String),

    #[error("booking {0} already exists")]
    AlreadyExists(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Bookings of one clinic starting inside `[from, to]` with a lifecycle in `statuses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWindowQuery {
    pub clinic_id: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub statuses: Vec<LifecycleStatus>,
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn load(&self, booking_id: &str) -> Result<Option<Booking>, BookingStoreError>;

    async fn insert(&self, booking: Booking) -> Result<(), BookingStoreError>;

    /// Applies `patch` in a single write if the stored version still equals
    /// `expected_version`, and returns the stored result with its new version.
    async fn update(
        &self,
        booking_id: &str,
        expected_version: i64,
        patch: &BookingPatch,
    ) -> Result<Booking, BookingStoreError>;

    async fn list_in_window(
        &self,
        query: &BookingWindowQuery,
    ) -> Result<Vec<Booking>, BookingStoreError>;
}
