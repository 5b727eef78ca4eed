use chrono::{DateTime, Utc};
use common::FlagReason;
use serde::{Deserialize, Serialize};

use crate::entity::flag;

/// Request body for flagging a submission.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateFlagRequest {
    /// One of `broken`, `wrong_category`, `inappropriate`, `other`.
    pub reason: FlagReason,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FlagResponse {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = 1)]
    pub submission_id: i32,
    pub reason: FlagReason,
    pub created_at: DateTime<Utc>,
}

impl From<flag::Model> for FlagResponse {
    fn from(m: flag::Model) -> Self {
        Self {
            id: m.id,
            submission_id: m.submission_id,
            reason: m.reason,
            created_at: m.created_at,
        }
    }
}

/// Whether the caller has already flagged a submission.
#[derive(Serialize, utoipa::ToSchema)]
pub struct HasFlaggedResponse {
    #[schema(example = false)]
    pub flagged: bool,
}
