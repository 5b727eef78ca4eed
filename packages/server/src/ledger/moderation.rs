use std::collections::HashMap;

use chrono::Utc;
use common::{Decision, ModerationStatus};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{info, warn};

use super::{Ledger, LedgerError, Page, Principal};
use crate::entity::{flag, submission};

/// A flag together with how many flags its submission has in total.
#[derive(Debug)]
pub struct FlagSummary {
    pub flag: flag::Model,
    pub submission_flag_count: u64,
}

/// Row offset of a 1-based page. Offsets past `i64::MAX` cannot be sent to the database.
fn page_offset(page: u64, per_page: u64) -> Result<u64, LedgerError> {
    page.saturating_sub(1)
        .checked_mul(per_page)
        .filter(|&offset| offset <= i64::MAX as u64)
        .ok_or_else(|| LedgerError::Validation(format!("page {page} is out of range")))
}

impl<'a, C: ConnectionTrait> Ledger<'a, C> {
    /// Moderation queue, oldest first. `status = None` lists every state.
    pub async fn list_by_status(
        &self,
        status: Option<ModerationStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<submission::Model>, LedgerError> {
        let offset = page_offset(page, per_page)?;
        let mut query = submission::Entity::find();
        if let Some(status) = status {
            query = query.filter(submission::Column::Status.eq(status));
        }

        let total = query.clone().paginate(self.conn, per_page).num_items().await?;

        let items = query
            .order_by_asc(submission::Column::CreatedAt)
            .order_by_asc(submission::Column::Id)
            .offset(Some(offset))
            .limit(Some(per_page))
            .all(self.conn)
            .await?;

        Ok(Page { items, total })
    }

    /// Approve or reject a pending submission.
    pub async fn moderate(
        &self,
        submission_id: i32,
        moderator: &Principal,
        decision: Decision,
    ) -> Result<submission::Model, LedgerError> {
        let seen = self.get_submission(submission_id).await?;
        self.decide(seen, moderator, decision).await
    }

    /// Apply `decision` to the row as the moderator saw it. The write only
    /// lands while the row is still pending with the same `updated_at`.
    async fn decide(
        &self,
        seen: submission::Model,
        moderator: &Principal,
        decision: Decision,
    ) -> Result<submission::Model, LedgerError> {
        let previous = seen.status;
        let next = previous.moderate(decision)?;
        let now = Utc::now();

        let result = submission::Entity::update_many()
            .set(submission::ActiveModel {
                status: Set(next),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(submission::Column::Id.eq(seen.id))
            .filter(submission::Column::Status.eq(ModerationStatus::Pending))
            .filter(submission::Column::UpdatedAt.eq(seen.updated_at))
            .exec(self.conn)
            .await?;

        if result.rows_affected == 0 {
            let current = self.get_submission(seen.id).await?;
            current.status.moderate(decision)?;
            warn!(
                submission_id = seen.id,
                moderator_id = moderator.user_id,
                "Submission edited while under review"
            );
            return Err(LedgerError::ChangedDuringReview);
        }

        info!(
            submission_id = seen.id,
            moderator_id = moderator.user_id,
            from = %previous,
            to = %next,
            "Submission moderated"
        );
        Ok(submission::Model {
            status: next,
            updated_at: now,
            ..seen
        })
    }

    /// Open flags, newest first, each with its submission's total flag count.
    pub async fn list_flags(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Page<FlagSummary>, LedgerError> {
        let offset = page_offset(page, per_page)?;
        let total = flag::Entity::find()
            .paginate(self.conn, per_page)
            .num_items()
            .await?;

        let flags = flag::Entity::find()
            .order_by_desc(flag::Column::CreatedAt)
            .order_by_desc(flag::Column::Id)
            .offset(Some(offset))
            .limit(Some(per_page))
            .all(self.conn)
            .await?;

        let mut submission_ids: Vec<i32> = flags.iter().map(|f| f.submission_id).collect();
        submission_ids.sort_unstable();
        submission_ids.dedup();

        let counts: HashMap<i32, u64> = if submission_ids.is_empty() {
            HashMap::new()
        } else {
            flag::Entity::find()
                .select_only()
                .column(flag::Column::SubmissionId)
                .column_as(flag::Column::Id.count(), "count")
                .filter(flag::Column::SubmissionId.is_in(submission_ids))
                .group_by(flag::Column::SubmissionId)
                .into_tuple::<(i32, i64)>()
                .all(self.conn)
                .await?
                .into_iter()
                .map(|(id, n)| (id, n.max(0) as u64))
                .collect()
        };

        let items = flags
            .into_iter()
            .map(|flag| FlagSummary {
                submission_flag_count: counts.get(&flag.submission_id).copied().unwrap_or(0),
                flag,
            })
            .collect();

        Ok(Page { items, total })
    }

    /// Delete a flag after review.
    pub async fn dismiss_flag(&self, flag_id: i32, moderator: &Principal) -> Result<(), LedgerError> {
        let result = flag::Entity::delete_by_id(flag_id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            return Err(LedgerError::NotFound("Flag"));
        }

        info!(flag_id, moderator_id = moderator.user_id, "Flag dismissed");
        Ok(())
    }
}
