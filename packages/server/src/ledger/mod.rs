//! The Submission Ledger: lifecycle of video submissions and the flags raised against them.
//!
//! Every operation takes an explicit, already-resolved [`Principal`] or user id.
//! Status and timestamps are always derived here; callers cannot supply them.

mod error;
mod moderation;

pub use error::LedgerError;
pub use moderation::FlagSummary;

use chrono::Utc;
use common::{Category, LinkResolver, ModerationStatus, VideoId, countries};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr, TransactionSession, TransactionTrait,
};
use tracing::{info, warn};

use crate::config::LedgerConfig;
use crate::entity::{flag, submission};

const MAX_TITLE_CHARS: usize = 256;

/// The acting user, as established by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub email: String,
}

impl Principal {
    pub fn new(user_id: i32, email: impl Into<String>) -> Result<Self, LedgerError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(LedgerError::NotAuthenticated);
        }
        Ok(Self { user_id, email })
    }
}

/// Content of a new submission. `category` and `country_code` are raw so
/// that unknown values surface as their own error kinds.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub country_code: String,
    pub category: String,
    pub source_url: String,
    pub title: Option<String>,
}

/// Owner edit. `title`: `None` keeps, `Some(None)` clears, `Some(Some(_))` replaces.
#[derive(Debug, Clone, Default)]
pub struct SubmissionEdit {
    pub title: Option<Option<String>>,
    pub source_url: Option<String>,
}

/// One page of results plus the total across all pages.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

pub struct Ledger<'a, C: ConnectionTrait> {
    conn: &'a C,
    resolver: &'a dyn LinkResolver,
    limits: &'a LedgerConfig,
}

impl<'a, C: ConnectionTrait> Ledger<'a, C> {
    pub fn new(conn: &'a C, resolver: &'a dyn LinkResolver, limits: &'a LedgerConfig) -> Self {
        Self {
            conn,
            resolver,
            limits,
        }
    }

    /// Record a new submission in `pending` state.
    ///
    /// Checks run in order: country, category, link, title, same video from
    /// another user, then the caller's own slot.
    pub async fn create_submission(
        &self,
        principal: &Principal,
        input: NewSubmission,
    ) -> Result<submission::Model, LedgerError> {
        let country_code = canonical_country(&input.country_code)?;
        let category: Category = input.category.trim().parse()?;
        let video_id = self.resolve(&input.source_url)?;
        let title = normalize_title(input.title)?;

        if self
            .find_duplicate(&video_id, country_code, category, principal.user_id)
            .await?
            .is_some()
        {
            return Err(LedgerError::DuplicateContent);
        }

        if let Some(existing) = self
            .find_slot(principal.user_id, country_code, category)
            .await?
        {
            return Err(LedgerError::SlotOccupied {
                existing_id: existing.id,
            });
        }

        let now = Utc::now();
        let model = submission::ActiveModel {
            user_id: Set(principal.user_id),
            user_email: Set(principal.email.clone()),
            country_code: Set(country_code.to_string()),
            category: Set(category),
            source_url: Set(input.source_url.trim().to_string()),
            video_id: Set(video_id.into_inner()),
            title: Set(title),
            status: Set(ModerationStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        self.insert_submission(principal, model, country_code, category)
            .await
    }

    /// Apply an owner edit. Any successful edit puts the submission back to `pending`.
    pub async fn update_submission(
        &self,
        submission_id: i32,
        principal: &Principal,
        edit: SubmissionEdit,
    ) -> Result<submission::Model, LedgerError> {
        let existing = self.get_submission(submission_id).await?;
        if existing.user_id != principal.user_id {
            return Err(LedgerError::Forbidden);
        }

        let mut resolved = None;
        if let Some(ref url) = edit.source_url {
            let video_id = self.resolve(url)?;
            if video_id.as_str() != existing.video_id
                && self
                    .find_duplicate(
                        &video_id,
                        &existing.country_code,
                        existing.category,
                        principal.user_id,
                    )
                    .await?
                    .is_some()
            {
                return Err(LedgerError::DuplicateContent);
            }
            resolved = Some((url.trim().to_string(), video_id));
        }

        let title = match edit.title {
            Some(title) => Some(normalize_title(title)?),
            None => None,
        };

        let previous = existing.status;
        let next = previous.after_edit();
        let mut active: submission::ActiveModel = existing.into();
        if let Some((url, video_id)) = resolved {
            active.source_url = Set(url);
            active.video_id = Set(video_id.into_inner());
        }
        if let Some(title) = title {
            active.title = Set(title);
        }
        active.status = Set(next);
        active.updated_at = Set(Utc::now());

        let updated = active.update(self.conn).await?;
        info!(
            submission_id,
            user_id = principal.user_id,
            from = %previous,
            "Submission edited, back to pending"
        );
        Ok(updated)
    }

    pub async fn get_submission(&self, submission_id: i32) -> Result<submission::Model, LedgerError> {
        submission::Entity::find_by_id(submission_id)
            .one(self.conn)
            .await?
            .ok_or(LedgerError::NotFound("Submission"))
    }

    /// The caller's own submission for one (country, category) slot, if any.
    pub async fn find_slot(
        &self,
        user_id: i32,
        country_code: &str,
        category: Category,
    ) -> Result<Option<submission::Model>, LedgerError> {
        let found = submission::Entity::find()
            .filter(submission::Column::UserId.eq(user_id))
            .filter(submission::Column::CountryCode.eq(country_code))
            .filter(submission::Column::Category.eq(category))
            .one(self.conn)
            .await?;
        Ok(found)
    }

    /// All of a user's submissions, newest first, optionally for one country.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        country_code: Option<&str>,
    ) -> Result<Vec<submission::Model>, LedgerError> {
        let mut query = submission::Entity::find().filter(submission::Column::UserId.eq(user_id));
        if let Some(code) = country_code {
            query = query.filter(submission::Column::CountryCode.eq(canonical_country(code)?));
        }

        let rows = query
            .order_by_desc(submission::Column::CreatedAt)
            .order_by_desc(submission::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows)
    }

    /// Approved rows for one (country, category), newest first, at most `limit`.
    ///
    /// `limit` is capped at `max_list_limit`; `None` uses the default and zero lists nothing.
    pub async fn list_approved(
        &self,
        country_code: &str,
        category: Category,
        exclude: Option<i32>,
        limit: Option<u64>,
    ) -> Result<Vec<submission::Model>, LedgerError> {
        let country_code = canonical_country(country_code)?;
        let limit = self.limits.clamp_limit(limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut query = submission::Entity::find()
            .filter(submission::Column::CountryCode.eq(country_code))
            .filter(submission::Column::Category.eq(category))
            .filter(submission::Column::Status.eq(ModerationStatus::Approved));
        if let Some(id) = exclude {
            query = query.filter(submission::Column::Id.ne(id));
        }

        let rows = query
            .order_by_desc(submission::Column::CreatedAt)
            .order_by_desc(submission::Column::Id)
            .limit(limit)
            .all(self.conn)
            .await?;
        Ok(rows)
    }

    /// Approved row count for every category, in display order. Missing categories are zero.
    pub async fn count_approved_by_category(
        &self,
        country_code: &str,
    ) -> Result<Vec<(Category, u64)>, LedgerError> {
        let country_code = canonical_country(country_code)?;

        let rows: Vec<(String, i64)> = submission::Entity::find()
            .select_only()
            .column(submission::Column::Category)
            .column_as(submission::Column::Id.count(), "count")
            .filter(submission::Column::CountryCode.eq(country_code))
            .filter(submission::Column::Status.eq(ModerationStatus::Approved))
            .group_by(submission::Column::Category)
            .into_tuple()
            .all(self.conn)
            .await?;

        let counts = Category::ALL
            .iter()
            .map(|&category| {
                let count = rows
                    .iter()
                    .find(|(name, _)| name == category.as_str())
                    .map(|&(_, n)| n.max(0) as u64)
                    .unwrap_or(0);
                (category, count)
            })
            .collect();
        Ok(counts)
    }

    /// Report a submission. A second report by the same user fails with `AlreadyFlagged`.
    pub async fn create_flag(
        &self,
        submission_id: i32,
        principal: &Principal,
        reason: common::FlagReason,
    ) -> Result<flag::Model, LedgerError> {
        self.get_submission(submission_id).await?;

        if self.has_flagged(submission_id, principal.user_id).await? {
            return Err(LedgerError::AlreadyFlagged);
        }

        self.insert_flag(submission_id, principal, reason).await
    }

    pub async fn has_flagged(&self, submission_id: i32, user_id: i32) -> Result<bool, LedgerError> {
        let exists = flag::Entity::find()
            .filter(flag::Column::SubmissionId.eq(submission_id))
            .filter(flag::Column::UserId.eq(user_id))
            .one(self.conn)
            .await?
            .is_some();
        Ok(exists)
    }

    /// Insert a new row for `principal`'s (country, category) slot. A unique
    /// violation from a concurrent create surfaces as `SlotOccupied` when the
    /// slot is now taken, and as `Storage` otherwise.
    async fn insert_submission(
        &self,
        principal: &Principal,
        model: submission::ActiveModel,
        country_code: &str,
        category: Category,
    ) -> Result<submission::Model, LedgerError> {
        match model.insert(self.conn).await {
            Ok(created) => {
                info!(
                    submission_id = created.id,
                    user_id = principal.user_id,
                    country = country_code,
                    category = %category,
                    "Submission created"
                );
                Ok(created)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                warn!(
                    user_id = principal.user_id,
                    country = country_code,
                    category = %category,
                    "Concurrent submission for the same slot caught by unique index"
                );
                match self
                    .find_slot(principal.user_id, country_code, category)
                    .await?
                {
                    Some(existing) => Err(LedgerError::SlotOccupied {
                        existing_id: existing.id,
                    }),
                    None => Err(LedgerError::Storage(e)),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn insert_flag(
        &self,
        submission_id: i32,
        principal: &Principal,
        reason: common::FlagReason,
    ) -> Result<flag::Model, LedgerError> {
        let model = flag::ActiveModel {
            submission_id: Set(submission_id),
            user_id: Set(principal.user_id),
            reason: Set(reason),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match model.insert(self.conn).await {
            Ok(created) => {
                info!(
                    flag_id = created.id,
                    submission_id,
                    user_id = principal.user_id,
                    reason = %reason,
                    "Submission flagged"
                );
                Ok(created)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                warn!(
                    submission_id,
                    user_id = principal.user_id,
                    "Concurrent flag caught by unique index"
                );
                Err(LedgerError::AlreadyFlagged)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn resolve(&self, url: &str) -> Result<VideoId, LedgerError> {
        self.resolver.resolve(url).ok_or(LedgerError::InvalidUrl)
    }

    /// Same video in the same (country, category), owned by someone other than `user_id`.
    async fn find_duplicate(
        &self,
        video_id: &VideoId,
        country_code: &str,
        category: Category,
        user_id: i32,
    ) -> Result<Option<submission::Model>, LedgerError> {
        let found = submission::Entity::find()
            .filter(submission::Column::VideoId.eq(video_id.as_str()))
            .filter(submission::Column::CountryCode.eq(country_code))
            .filter(submission::Column::Category.eq(category))
            .filter(submission::Column::UserId.ne(user_id))
            .one(self.conn)
            .await?;
        Ok(found)
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> Ledger<'a, C> {
    /// Remove a submission and every flag raised against it.
    pub async fn delete_submission(
        &self,
        submission_id: i32,
        principal: &Principal,
    ) -> Result<(), LedgerError> {
        let txn = self.conn.begin().await?;

        let existing = submission::Entity::find_by_id(submission_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::NotFound("Submission"))?;
        if existing.user_id != principal.user_id {
            return Err(LedgerError::Forbidden);
        }

        let flags = flag::Entity::delete_many()
            .filter(flag::Column::SubmissionId.eq(submission_id))
            .exec(&txn)
            .await?;
        submission::Entity::delete_by_id(submission_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(
            submission_id,
            user_id = principal.user_id,
            flags_removed = flags.rows_affected,
            "Submission deleted"
        );
        Ok(())
    }
}

/// Canonical upper-case alpha-3 code for a known country.
pub fn canonical_country(code: &str) -> Result<&'static str, LedgerError> {
    countries::canonical_code(code).ok_or_else(|| LedgerError::UnknownCountry(code.trim().to_string()))
}

/// Trim a title; blank becomes `None`, over-long is a validation error.
fn normalize_title(title: Option<String>) -> Result<Option<String>, LedgerError> {
    let Some(title) = title else {
        return Ok(None);
    };
    let title = title.trim();
    if title.is_empty() {
        return Ok(None);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(LedgerError::Validation(format!(
            "Title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(Some(title.to_string()))
}
