use common::FlagReason;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A viewer's report against a submission. One per `(submission_id, user_id)`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub submission_id: i32,
    #[sea_orm(belongs_to, from = "submission_id", to = "id")]
    pub submission: HasOne<super::submission::Entity>,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub reason: FlagReason,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
