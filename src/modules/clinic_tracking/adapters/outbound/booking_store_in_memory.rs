// In memory implementation of the BookingStore port.
//
// Purpose
// - Back the binary and the tests without a database.
//
// Responsibilities
// - Keep bookings keyed by id behind one lock so each update is atomic.
// - Enforce compare-and-swap on the booking version.

use crate::modules::clinic_tracking::adapters::outbound::booking_store::{
    BookingStore, BookingStoreError, BookingWindowQuery,
};
use crate::modules::clinic_tracking::core::booking::{Booking, BookingPatch, apply};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookingStore {
    inner: RwLock<HashMap<String, Booking>>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before taking the write lock, widening the window for races in tests.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), BookingStoreError> {
        if self.is_offline {
            return Err(BookingStoreError::Backend("Booking store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn load(&self, booking_id: &str) -> Result<Option<Booking>, BookingStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(booking_id).cloned())
    }

    async fn insert(&self, booking: Booking) -> Result<(), BookingStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.contains_key(&booking.id) {
            return Err(BookingStoreError::AlreadyExists(booking.id));
        }
        guard.insert(booking.id.clone(), booking);
        Ok(())
    }

    async fn update(
        &self,
        booking_id: &str,
        expected_version: i64,
        patch: &BookingPatch,
    ) -> Result<Booking, BookingStoreError> {
        self.ensure_online()?;
        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        let current = guard
            .get(booking_id)
            .ok_or_else(|| BookingStoreError::NotFound(booking_id.to_string()))?;
        if current.version != expected_version {
            return Err(BookingStoreError::VersionMismatch {
                expected: expected_version,
                actual: current.version,
            });
        }

        let mut next = apply(current.clone(), patch);
        next.version = current.version + 1;
        guard.insert(booking_id.to_string(), next.clone());
        Ok(next)
    }

    async fn list_in_window(
        &self,
        query: &BookingWindowQuery,
    ) -> Result<Vec<Booking>, BookingStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .values()
            .filter(|b| b.clinic_id == query.clinic_id)
            .filter(|b| b.start_date_time >= query.from && b.start_date_time <= query.to)
            .filter(|b| query.statuses.contains(&b.lifecycle_status))
            .cloned()
            .collect())
    }
}
