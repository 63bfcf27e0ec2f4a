// Read side of the people and catalog records other modules own.
//
// Lookups return `Ok(None)` for unknown ids; `Err` is reserved for the
// backing system failing.

use crate::modules::clinic_tracking::core::booking::Booking;
use crate::modules::clinic_tracking::core::participants::{
    BookingLinks, ChildProfile, ParentProfile, TherapistProfile,
};
use async_trait::async_trait;

/// Clinical case a case session belongs to, and the child the case is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRef {
    pub case_id: String,
    pub child_id: String,
}

#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    async fn child(&self, child_id: &str) -> anyhow::Result<Option<ChildProfile>>;

    async fn parent(&self, parent_id: &str) -> anyhow::Result<Option<ParentProfile>>;

    async fn therapist(&self, therapist_id: &str) -> anyhow::Result<Option<TherapistProfile>>;

    async fn case_for_session(&self, case_session_id: &str) -> anyhow::Result<Option<CaseRef>>;

    async fn session_type_name(&self, session_type_id: &str) -> anyhow::Result<Option<String>>;

    /// Everything a board row shows about the people around `booking`.
    ///
    /// The child comes from the case session's case when there is one, and
    /// from the booking's direct child link otherwise. The parent is the
    /// child's parent, or the booking's patient when no child resolves.
    async fn links_for(&self, booking: &Booking) -> anyhow::Result<BookingLinks> {
        let case = match booking.case_session_id.as_deref() {
            Some(session_id) => self.case_for_session(session_id).await?,
            None => None,
        };

        let child_id = case
            .as_ref()
            .map(|c| c.child_id.as_str())
            .or(booking.child_id.as_deref());
        let child = match child_id {
            Some(id) => self.child(id).await?,
            None => None,
        };

        let parent_id = child
            .as_ref()
            .map(|c| c.parent_id.as_str())
            .unwrap_or(booking.patient_id.as_str());
        let parent = self.parent(parent_id).await?;

        let therapist = self.therapist(&booking.therapist_id).await?;

        let session_type_name = match booking.session_type_id.as_deref() {
            Some(id) => self.session_type_name(id).await?,
            None => None,
        };

        Ok(BookingLinks {
            child,
            parent,
            therapist,
            session_type_name,
            case_id: case.map(|c| c.case_id),
        })
    }
}
