use chrono::{DateTime, Utc};
use common::{FlagReason, ModerationStatus};
use serde::{Deserialize, Serialize};

use crate::entity::submission;
use crate::ledger::FlagSummary;

use super::shared::Pagination;
use super::submission::SubmissionResponse;

/// Query parameters for the moderation queue.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ModerationListQuery {
    /// Filter by status. Defaults to `pending`.
    pub status: Option<ModerationStatus>,
    #[param(example = 1)]
    pub page: Option<u64>,
    #[param(example = 20)]
    pub per_page: Option<u64>,
}

/// Query parameters for the flag list.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct FlagListQuery {
    #[param(example = 1)]
    pub page: Option<u64>,
    #[param(example = 20)]
    pub per_page: Option<u64>,
}

/// A submission as shown to moderators, including who submitted it.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ModerationSubmission {
    #[serde(flatten)]
    pub submission: SubmissionResponse,
    #[schema(example = "amal@example.com")]
    pub user_email: String,
}

impl From<submission::Model> for ModerationSubmission {
    fn from(m: submission::Model) -> Self {
        let user_email = m.user_email.clone();
        Self {
            submission: m.into(),
            user_email,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ModerationListResponse {
    pub data: Vec<ModerationSubmission>,
    pub pagination: Pagination,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FlagListItem {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = 1)]
    pub submission_id: i32,
    #[schema(example = 9)]
    pub user_id: i32,
    pub reason: FlagReason,
    pub created_at: DateTime<Utc>,
    /// Total flags raised against the same submission.
    #[schema(example = 2)]
    pub submission_flag_count: u64,
}

impl From<FlagSummary> for FlagListItem {
    fn from(s: FlagSummary) -> Self {
        Self {
            id: s.flag.id,
            submission_id: s.flag.submission_id,
            user_id: s.flag.user_id,
            reason: s.flag.reason,
            created_at: s.flag.created_at,
            submission_flag_count: s.submission_flag_count,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FlagListResponse {
    pub data: Vec<FlagListItem>,
    pub pagination: Pagination,
}
