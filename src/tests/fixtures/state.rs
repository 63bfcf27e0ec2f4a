use crate::modules::clinic_tracking::adapters::outbound::booking_store::BookingStore;
use crate::modules::clinic_tracking::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use crate::shared::core::clock::{Clock, FixedClock};
use crate::shared::infrastructure::notification_outbox::in_memory::InMemoryNotificationOutbox;
use crate::shell::state::AppState;
use crate::tests::fixtures::bookings::BookingBuilder;
use crate::tests::fixtures::directory::seeded_directory;
use chrono::{FixedOffset, TimeZone, Utc};
use std::sync::Arc;

pub const TEST_TOPIC: &str = "clinic-tracking.test";

/// Handles on the adapters behind a test `AppState`.
pub struct TestDeps {
    pub store: Arc<InMemoryBookingStore>,
    pub outbox: Arc<InMemoryNotificationOutbox>,
    pub clock: Arc<FixedClock>,
}

impl TestDeps {
    pub fn clock_millis(&self) -> i64 {
        self.clock.now().timestamp_millis()
    }
}

fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
    ))
}

async fn state_over(
    store: Arc<InMemoryBookingStore>,
    offset: FixedOffset,
) -> (AppState, TestDeps) {
    let clock = test_clock();
    let outbox = Arc::new(InMemoryNotificationOutbox::new());
    let state = AppState::new(
        TEST_TOPIC,
        offset,
        clock.clone(),
        store.clone(),
        outbox.clone(),
        Arc::new(seeded_directory().await),
    );
    (
        state,
        TestDeps {
            store,
            outbox,
            clock,
        },
    )
}

/// UTC clinic, clock at 08:30 on 2024-05-01, seeded directory and the fixture booking stored.
pub async fn make_test_state() -> (AppState, TestDeps) {
    make_test_state_at_offset(FixedOffset::east_opt(0).unwrap()).await
}

pub async fn make_test_state_at_offset(offset: FixedOffset) -> (AppState, TestDeps) {
    let store = Arc::new(InMemoryBookingStore::new());
    store.insert(BookingBuilder::new().build()).await.unwrap();
    state_over(store, offset).await
}

pub async fn make_offline_store_state() -> AppState {
    let mut store = InMemoryBookingStore::new();
    store.toggle_offline();
    let (state, _) = state_over(Arc::new(store), FixedOffset::east_opt(0).unwrap()).await;
    state
}
