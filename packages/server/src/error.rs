use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::ledger::LedgerError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `TOKEN_MISSING`,
    /// `TOKEN_INVALID`, `INVALID_CREDENTIALS`, `PERMISSION_DENIED`, `FORBIDDEN`,
    /// `NOT_FOUND`, `INVALID_URL`, `UNKNOWN_CATEGORY`, `UNKNOWN_COUNTRY`,
    /// `DUPLICATE_CONTENT`, `SUBMISSION_EXISTS`, `ALREADY_FLAGGED`,
    /// `INVALID_TRANSITION`, `SUBMISSION_CHANGED`, `EMAIL_TAKEN`, `STORAGE_UNAVAILABLE`.
    #[schema(example = "ALREADY_FLAGGED")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "You already flagged this video")]
    pub message: String,
    /// Set with `SUBMISSION_EXISTS`: the caller's submission occupying the slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 17)]
    pub existing_id: Option<i32>,
}

impl ErrorBody {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            existing_id: None,
        }
    }
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    TokenMissing,
    TokenInvalid,
    InvalidCredentials,
    PermissionDenied,
    Forbidden,
    NotFound(String),
    InvalidUrl,
    UnknownCategory(String),
    UnknownCountry(String),
    DuplicateContent,
    SubmissionExists { existing_id: i32 },
    AlreadyFlagged,
    InvalidTransition(String),
    SubmissionChanged,
    EmailTaken,
    /// Storage failure. Details are logged, never returned.
    StorageUnavailable(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("VALIDATION_ERROR", msg),
            ),
            AppError::TokenMissing => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("TOKEN_MISSING", "Authentication required"),
            ),
            AppError::TokenInvalid => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("TOKEN_INVALID", "Invalid or expired token"),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("INVALID_CREDENTIALS", "Invalid email or password"),
            ),
            AppError::PermissionDenied => (
                StatusCode::FORBIDDEN,
                ErrorBody::new("PERMISSION_DENIED", "Insufficient permissions"),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                ErrorBody::new("FORBIDDEN", "Only the owner may change this submission"),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new("NOT_FOUND", msg)),
            AppError::InvalidUrl => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("INVALID_URL", "Please enter a valid YouTube URL"),
            ),
            AppError::UnknownCategory(category) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("UNKNOWN_CATEGORY", format!("Unknown category '{category}'")),
            ),
            AppError::UnknownCountry(code) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("UNKNOWN_COUNTRY", format!("Unknown country '{code}'")),
            ),
            AppError::DuplicateContent => (
                StatusCode::CONFLICT,
                ErrorBody::new(
                    "DUPLICATE_CONTENT",
                    "This video has already been submitted for this country and category",
                ),
            ),
            AppError::SubmissionExists { existing_id } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    existing_id: Some(existing_id),
                    ..ErrorBody::new(
                        "SUBMISSION_EXISTS",
                        "You already have a submission for this country and category; edit it instead",
                    )
                },
            ),
            AppError::AlreadyFlagged => (
                StatusCode::CONFLICT,
                ErrorBody::new("ALREADY_FLAGGED", "You already flagged this video"),
            ),
            AppError::InvalidTransition(msg) => (
                StatusCode::CONFLICT,
                ErrorBody::new("INVALID_TRANSITION", msg),
            ),
            AppError::SubmissionChanged => (
                StatusCode::CONFLICT,
                ErrorBody::new(
                    "SUBMISSION_CHANGED",
                    "The submission was edited while under review; reload and decide again",
                ),
            ),
            AppError::EmailTaken => (
                StatusCode::CONFLICT,
                ErrorBody::new("EMAIL_TAKEN", "Email is already registered"),
            ),
            AppError::StorageUnavailable(detail) => {
                tracing::error!("Storage error: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorBody::new("STORAGE_UNAVAILABLE", "Storage is unavailable, try again"),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("INTERNAL_ERROR", "An unexpected error occurred"),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::StorageUnavailable(err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotAuthenticated => AppError::TokenMissing,
            LedgerError::Forbidden => AppError::Forbidden,
            LedgerError::InvalidUrl => AppError::InvalidUrl,
            LedgerError::UnknownCategory(c) => AppError::UnknownCategory(c),
            LedgerError::UnknownCountry(c) => AppError::UnknownCountry(c),
            LedgerError::DuplicateContent => AppError::DuplicateContent,
            LedgerError::SlotOccupied { existing_id } => AppError::SubmissionExists { existing_id },
            LedgerError::AlreadyFlagged => AppError::AlreadyFlagged,
            e @ LedgerError::InvalidTransition { .. } => AppError::InvalidTransition(e.to_string()),
            LedgerError::ChangedDuringReview => AppError::SubmissionChanged,
            LedgerError::NotFound(what) => AppError::NotFound(format!("{what} not found")),
            LedgerError::Validation(msg) => AppError::Validation(msg),
            LedgerError::Storage(e) => AppError::from(e),
        }
    }
}
