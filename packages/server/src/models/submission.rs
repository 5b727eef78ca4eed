use chrono::{DateTime, Utc};
use common::{Category, ModerationStatus, ThumbnailQuality, VideoId, countries};
use serde::{Deserialize, Serialize};

use crate::entity::submission;
use crate::ledger::{NewSubmission, SubmissionEdit};

use super::shared::double_option;

/// Request body for creating a submission.
///
/// Status and timestamps are assigned by the server; any such fields in the body are ignored.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSubmissionRequest {
    /// ISO-3166 alpha-3 country code (case-insensitive).
    #[schema(example = "USA")]
    pub country_code: String,
    /// One of `inspiration`, `music`, `comedy`, `cooking`, `street_voices`.
    #[schema(example = "music")]
    pub category: String,
    /// YouTube link in any supported form.
    #[schema(example = "https://youtu.be/abc123")]
    pub source_url: String,
    /// Optional title, at most 256 characters.
    #[schema(example = "Bluegrass on the porch")]
    pub title: Option<String>,
}

impl From<CreateSubmissionRequest> for NewSubmission {
    fn from(req: CreateSubmissionRequest) -> Self {
        Self {
            country_code: req.country_code,
            category: req.category,
            source_url: req.source_url,
            title: req.title,
        }
    }
}

/// Request body for editing a submission. Any edit sends it back to moderation.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateSubmissionRequest {
    /// Absent keeps the title, `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "Bluegrass on the porch (live)")]
    pub title: Option<Option<String>>,
    #[schema(example = "https://www.youtube.com/watch?v=xyz789")]
    pub source_url: Option<String>,
}

impl From<UpdateSubmissionRequest> for SubmissionEdit {
    fn from(req: UpdateSubmissionRequest) -> Self {
        Self {
            title: req.title,
            source_url: req.source_url,
        }
    }
}

/// A submission as shown to viewers and to its owner.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmissionResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 7)]
    pub user_id: i32,
    #[schema(example = "USA")]
    pub country_code: String,
    #[schema(example = "United States")]
    pub country_name: String,
    pub category: Category,
    #[schema(example = "Music")]
    pub category_label: &'static str,
    /// The link exactly as submitted.
    #[schema(example = "https://youtu.be/abc123")]
    pub source_url: String,
    /// Canonical video id extracted from `source_url`.
    #[schema(example = "abc123")]
    pub video_id: String,
    #[schema(example = "https://www.youtube.com/embed/abc123")]
    pub embed_url: Option<String>,
    #[schema(example = "https://www.youtube.com/watch?v=abc123")]
    pub watch_url: Option<String>,
    #[schema(example = "https://img.youtube.com/vi/abc123/hqdefault.jpg")]
    pub thumbnail_url: Option<String>,
    pub title: Option<String>,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<submission::Model> for SubmissionResponse {
    fn from(m: submission::Model) -> Self {
        let video = VideoId::parse(&m.video_id);
        Self {
            id: m.id,
            user_id: m.user_id,
            country_name: countries::name_of(&m.country_code).to_string(),
            country_code: m.country_code,
            category: m.category,
            category_label: m.category.label(),
            source_url: m.source_url,
            embed_url: video.as_ref().map(VideoId::embed_url),
            watch_url: video.as_ref().map(VideoId::watch_url),
            thumbnail_url: video
                .as_ref()
                .map(|v| v.thumbnail_url(ThumbnailQuality::default())),
            video_id: m.video_id,
            title: m.title,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Query parameters for public video listings.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct VideoListQuery {
    /// Maximum rows to return (default 10, capped by configuration).
    #[param(example = 10)]
    pub limit: Option<u64>,
    /// Submission id to leave out, typically the one just watched.
    #[param(example = 12)]
    pub exclude: Option<i32>,
}

/// Query parameters for the random pick.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct RandomVideoQuery {
    /// Submission id to leave out, typically the one just watched.
    #[param(example = 12)]
    pub exclude: Option<i32>,
}

/// Query parameters for the caller's own submissions.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct MySubmissionsQuery {
    /// Restrict to one country.
    #[param(example = "USA")]
    pub country: Option<String>,
}

/// Query parameters for the per-slot lookup.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct SlotQuery {
    #[param(example = "USA")]
    pub country: String,
    #[param(example = "music")]
    pub category: String,
}

/// The caller's submission for one slot, or `null` when the slot is free.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SlotResponse {
    pub submission: Option<SubmissionResponse>,
}
