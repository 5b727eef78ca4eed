use common::{InvalidTransition, ModerationStatus, UnknownCategory};
use sea_orm::DbErr;

/// Every distinguishable way a ledger operation can fail.
///
/// Callers match on these to pick a user-facing message; nothing here is
/// collapsed into a generic failure except `Storage`.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("no authenticated user")]
    NotAuthenticated,
    #[error("only the owner may change this submission")]
    Forbidden,
    #[error("link is not a supported video URL")]
    InvalidUrl,
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown country: {0}")]
    UnknownCountry(String),
    #[error("this video was already submitted for this country and category")]
    DuplicateContent,
    #[error("you already have a submission for this country and category")]
    SlotOccupied { existing_id: i32 },
    #[error("you already flagged this video")]
    AlreadyFlagged,
    #[error("cannot move a submission from {from} to {to}")]
    InvalidTransition {
        from: ModerationStatus,
        to: ModerationStatus,
    },
    #[error("the submission changed while it was being reviewed")]
    ChangedDuringReview,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(#[from] DbErr),
}

impl From<UnknownCategory> for LedgerError {
    fn from(err: UnknownCategory) -> Self {
        LedgerError::UnknownCategory(err.0)
    }
}

impl From<InvalidTransition> for LedgerError {
    fn from(err: InvalidTransition) -> Self {
        LedgerError::InvalidTransition {
            from: err.from,
            to: err.to,
        }
    }
}
