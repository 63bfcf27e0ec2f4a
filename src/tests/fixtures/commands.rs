use crate::modules::clinic_tracking::core::status::TrackingStatus;
use crate::modules::clinic_tracking::use_cases::create_walkin_booking::command::CreateWalkinBooking;
use crate::modules::clinic_tracking::use_cases::update_tracking_status::command::UpdateTrackingStatus;
use chrono::{DateTime, TimeZone, Utc};

/// Targets the booking from json/booking.json; moves it to WAITING by default.
pub struct UpdateTrackingStatusBuilder {
    inner: UpdateTrackingStatus,
}

impl Default for UpdateTrackingStatusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UpdateTrackingStatusBuilder {
    pub fn new() -> Self {
        Self {
            inner: UpdateTrackingStatus {
                booking_id: "booking-0001".to_string(),
                status: TrackingStatus::Waiting,
                notes: None,
                case_id: None,
                expected_version: None,
            },
        }
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn status(mut self, v: TrackingStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn notes(mut self, v: Option<&str>) -> Self {
        self.inner.notes = v.map(str::to_string);
        self
    }

    pub fn case_id(mut self, v: Option<&str>) -> Self {
        self.inner.case_id = v.map(str::to_string);
        self
    }

    pub fn expected_version(mut self, v: Option<i64>) -> Self {
        self.inner.expected_version = v;
        self
    }

    pub fn build(self) -> UpdateTrackingStatus {
        self.inner
    }
}

/// Walk-in for the fixture child with the fixture therapist at 10:30 UTC on 2024-05-01.
pub struct CreateWalkinBookingBuilder {
    inner: CreateWalkinBooking,
}

impl Default for CreateWalkinBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateWalkinBookingBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateWalkinBooking {
                clinic_id: "clinic-0001".to_string(),
                child_id: "child-0001".to_string(),
                therapist_id: "therapist-0001".to_string(),
                scheduled_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
                duration_minutes: None,
                session_type_id: None,
                case_id: None,
            },
        }
    }

    pub fn child_id(mut self, v: impl Into<String>) -> Self {
        self.inner.child_id = v.into();
        self
    }

    pub fn therapist_id(mut self, v: impl Into<String>) -> Self {
        self.inner.therapist_id = v.into();
        self
    }

    pub fn scheduled_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.scheduled_at = v;
        self
    }

    pub fn duration_minutes(mut self, v: Option<u32>) -> Self {
        self.inner.duration_minutes = v;
        self
    }

    pub fn session_type_id(mut self, v: Option<&str>) -> Self {
        self.inner.session_type_id = v.map(str::to_string);
        self
    }

    pub fn case_id(mut self, v: Option<&str>) -> Self {
        self.inner.case_id = v.map(str::to_string);
        self
    }

    pub fn build(self) -> CreateWalkinBooking {
        self.inner
    }
}
