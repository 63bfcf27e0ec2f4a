use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical booking status shared with scheduling and billing.
///
/// Only part of the range concerns the clinic board; the rest is carried
/// through untouched. Unknown wire values deserialize to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleStatus {
    Pending,
    PaymentPending,
    Confirmed,
    Accepted,
    InProgress,
    Completed,
    CancelledByPatient,
    CancelledByTherapist,
    NoShowPatient,
    NoShowTherapist,
    Rescheduled,
    #[serde(other)]
    Other,
}

impl LifecycleStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::PaymentPending => "PAYMENT_PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Accepted => "ACCEPTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::CancelledByPatient => "CANCELLED_BY_PATIENT",
            Self::CancelledByTherapist => "CANCELLED_BY_THERAPIST",
            Self::NoShowPatient => "NO_SHOW_PATIENT",
            Self::NoShowTherapist => "NO_SHOW_THERAPIST",
            Self::Rescheduled => "RESCHEDULED",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Front-desk status. Also the effective status shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingStatus {
    Scheduled,
    Waiting,
    InSession,
    Completed,
    Cancelled,
    NoShow,
}

pub type EffectiveStatus = TrackingStatus;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tracking status '{0}'")]
pub struct UnknownTrackingStatus(pub String);

impl TrackingStatus {
    pub const ALL: [TrackingStatus; 6] = [
        Self::Scheduled,
        Self::Waiting,
        Self::InSession,
        Self::Completed,
        Self::Cancelled,
        Self::NoShow,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Waiting => "WAITING",
            Self::InSession => "IN_SESSION",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::NoShow => "NO_SHOW",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::NoShow)
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingStatus {
    type Err = UnknownTrackingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownTrackingStatus(s.to_string()))
    }
}
