use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::clinic_tracking::core::status::TrackingStatus;
use crate::modules::clinic_tracking::use_cases::get_daily_board::projection::{
    BoardRow, ChildSummary, ParentSummary, TherapistSummary,
};
use crate::modules::clinic_tracking::use_cases::get_daily_board::query::GetDailyBoard;
use crate::shared::core::calendar::parse_iso_date;
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "TrackingStatus")]
pub enum GqlTrackingStatus {
    Scheduled,
    Waiting,
    InSession,
    Completed,
    Cancelled,
    NoShow,
}

impl From<TrackingStatus> for GqlTrackingStatus {
    fn from(s: TrackingStatus) -> Self {
        match s {
            TrackingStatus::Scheduled => Self::Scheduled,
            TrackingStatus::Waiting => Self::Waiting,
            TrackingStatus::InSession => Self::InSession,
            TrackingStatus::Completed => Self::Completed,
            TrackingStatus::Cancelled => Self::Cancelled,
            TrackingStatus::NoShow => Self::NoShow,
        }
    }
}

impl From<GqlTrackingStatus> for TrackingStatus {
    fn from(s: GqlTrackingStatus) -> Self {
        match s {
            GqlTrackingStatus::Scheduled => Self::Scheduled,
            GqlTrackingStatus::Waiting => Self::Waiting,
            GqlTrackingStatus::InSession => Self::InSession,
            GqlTrackingStatus::Completed => Self::Completed,
            GqlTrackingStatus::Cancelled => Self::Cancelled,
            GqlTrackingStatus::NoShow => Self::NoShow,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "ChildSummary")]
pub struct GqlChildSummary {
    pub id: String,
    pub first_name: String,
    pub nickname: Option<String>,
    pub age: Option<u32>,
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "ParentSummary")]
pub struct GqlParentSummary {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "TherapistSummary")]
pub struct GqlTherapistSummary {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Timestamps are epoch milliseconds.
#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "BoardRow")]
pub struct GqlBoardRow {
    pub id: String,
    pub clinic_id: String,
    pub start_date_time: i64,
    pub end_date_time: i64,
    pub status: GqlTrackingStatus,
    pub tracking_status: Option<GqlTrackingStatus>,
    pub lifecycle_status: String,
    pub checked_in_at: Option<i64>,
    pub session_started_at: Option<i64>,
    pub session_ended_at: Option<i64>,
    pub session_completed_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub child: Option<GqlChildSummary>,
    pub parent: Option<GqlParentSummary>,
    pub therapist: Option<GqlTherapistSummary>,
    pub session_type_name: Option<String>,
    pub duration_minutes: u32,
    pub receptionist_notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub case_id: Option<String>,
    pub version: i64,
}

fn millis(at: Option<DateTime<Utc>>) -> Option<i64> {
    at.map(|t| t.timestamp_millis())
}

impl From<ChildSummary> for GqlChildSummary {
    fn from(c: ChildSummary) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            nickname: c.nickname,
            age: c.age,
        }
    }
}

impl From<ParentSummary> for GqlParentSummary {
    fn from(p: ParentSummary) -> Self {
        Self {
            id: p.id,
            name: p.name,
            phone: p.phone,
        }
    }
}

impl From<TherapistSummary> for GqlTherapistSummary {
    fn from(t: TherapistSummary) -> Self {
        Self {
            id: t.id,
            name: t.name,
            avatar_url: t.avatar_url,
        }
    }
}

impl From<BoardRow> for GqlBoardRow {
    fn from(r: BoardRow) -> Self {
        Self {
            id: r.id,
            clinic_id: r.clinic_id,
            start_date_time: r.start_date_time.timestamp_millis(),
            end_date_time: r.end_date_time.timestamp_millis(),
            status: r.status.into(),
            tracking_status: r.tracking_status.map(Into::into),
            lifecycle_status: r.lifecycle_status.to_string(),
            checked_in_at: millis(r.checked_in_at),
            session_started_at: millis(r.session_started_at),
            session_ended_at: millis(r.session_ended_at),
            session_completed_at: millis(r.session_completed_at),
            cancelled_at: millis(r.cancelled_at),
            child: r.child.map(Into::into),
            parent: r.parent.map(Into::into),
            therapist: r.therapist.map(Into::into),
            session_type_name: r.session_type_name,
            duration_minutes: r.duration_minutes,
            receptionist_notes: r.receptionist_notes,
            cancellation_reason: r.cancellation_reason,
            case_id: r.case_id,
            version: r.version,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Front-desk board of one clinic day. `date` is `YYYY-MM-DD`, today when omitted.
    async fn clinic_today(
        &self,
        context: &Context<'_>,
        clinic_id: String,
        date: Option<String>,
    ) -> GqlResult<Vec<GqlBoardRow>> {
        let state = context.data_unchecked::<AppState>();
        let date = date.as_deref().map(parse_iso_date).transpose()?;
        let rows = state
            .board_handler
            .handle(GetDailyBoard { clinic_id, date })
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
