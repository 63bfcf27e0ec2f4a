// Booking fixture: a confirmed, untracked 09:00 UTC session on 2024-05-01,
// read from json/booking.json and adjusted through the setters.

use crate::modules::clinic_tracking::core::booking::Booking;
use crate::modules::clinic_tracking::core::status::{LifecycleStatus, TrackingStatus};
use chrono::{DateTime, Duration, Utc};
use std::fs;

pub struct BookingBuilder {
    inner: Booking,
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookingBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/booking.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn clinic_id(mut self, v: impl Into<String>) -> Self {
        self.inner.clinic_id = v.into();
        self
    }

    /// Moves the whole slot, keeping its duration.
    pub fn start(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_date_time = v;
        self.inner.end_date_time = v + Duration::minutes(i64::from(self.inner.duration_minutes));
        self
    }

    pub fn lifecycle_status(mut self, v: LifecycleStatus) -> Self {
        self.inner.lifecycle_status = v;
        self
    }

    pub fn tracking_status(mut self, v: Option<TrackingStatus>) -> Self {
        self.inner.tracking_status = v;
        self
    }

    pub fn checked_in_at(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.checked_in_at = v;
        self
    }

    pub fn session_started_at(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.session_started_at = v;
        self
    }

    pub fn session_ended_at(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.session_ended_at = v;
        self
    }

    pub fn child_id(mut self, v: Option<&str>) -> Self {
        self.inner.child_id = v.map(str::to_string);
        self
    }

    pub fn session_type_id(mut self, v: Option<&str>) -> Self {
        self.inner.session_type_id = v.map(str::to_string);
        self
    }

    pub fn case_session_id(mut self, v: Option<&str>) -> Self {
        self.inner.case_session_id = v.map(str::to_string);
        self
    }

    pub fn version(mut self, v: i64) -> Self {
        self.inner.version = v;
        self
    }

    pub fn build(self) -> Booking {
        self.inner
    }
}

#[cfg(test)]
mod booking_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = BookingBuilder::default().build();
        assert_eq!(built.id, "booking-0001");
        assert_eq!(built.clinic_id, "clinic-0001");
        assert_eq!(
            built.start_date_time,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
        );
        assert_eq!(built.lifecycle_status, LifecycleStatus::Confirmed);
        assert_eq!(built.tracking_status, None);
        assert_eq!(built.child_id.as_deref(), Some("child-0001"));
        assert_eq!(built.version, 0);
    }

    #[rstest]
    fn start_moves_the_end_with_it() {
        let start = Utc.with_ymd_and_hms(2024, 5, 2, 14, 0, 0).unwrap();
        let built = BookingBuilder::new().start(start).version(3).build();
        assert_eq!(built.end_date_time, start + Duration::minutes(60));
        assert_eq!(built.version, 3);
    }
}
