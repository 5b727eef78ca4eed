use common::{Category, ModerationStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One user's proposed video for one (country, category) slot.
///
/// At most one row per `(user_id, country_code, category)`; enforced by the
/// `uq_submission_slot` index created in `seed::ensure_indexes`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,
    /// Owner's email at creation time. Not updated if the account changes.
    pub user_email: String,

    /// ISO-3166 alpha-3.
    #[sea_orm(indexed)]
    pub country_code: String,
    pub category: Category,

    /// The link exactly as submitted.
    #[sea_orm(column_type = "Text")]
    pub source_url: String,
    /// Canonical id extracted from `source_url`; used for duplicate detection.
    #[sea_orm(indexed)]
    pub video_id: String,
    pub title: Option<String>,

    pub status: ModerationStatus,

    #[sea_orm(has_many)]
    pub flags: HasMany<super::flag::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
