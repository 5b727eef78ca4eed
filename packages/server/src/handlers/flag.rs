use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::rejection::{AppJson, AppPath};
use crate::models::flag::{CreateFlagRequest, FlagResponse, HasFlaggedResponse};
use crate::state::AppState;

use super::submission::visible_submission;

#[utoipa::path(
    post,
    path = "/{id}/flags",
    tag = "Flags",
    operation_id = "flagSubmission",
    summary = "Flag a submission",
    description = "Reports a submission for moderator review. Requires `flag:create` permission. Each user can flag a submission once. Submissions the caller cannot see are reported as not found.",
    params(("id" = i32, Path, description = "Submission ID")),
    request_body = CreateFlagRequest,
    responses(
        (status = 201, description = "Flag recorded", body = FlagResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Submission not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Already flagged by this user (ALREADY_FLAGGED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn create_flag(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<CreateFlagRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require_permission("flag:create")?;
    let principal = auth_user.principal()?;
    visible_submission(&state, &auth_user, id).await?;

    let flag = state
        .ledger()
        .create_flag(id, &principal, payload.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(FlagResponse::from(flag))))
}

#[utoipa::path(
    get,
    path = "/{id}/flags/mine",
    tag = "Flags",
    operation_id = "hasFlagged",
    summary = "Whether the caller already flagged a submission",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Flag state", body = HasFlaggedResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn has_flagged(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<HasFlaggedResponse>, AppError> {
    let flagged = state.ledger().has_flagged(id, auth_user.user_id).await?;
    Ok(Json(HasFlaggedResponse { flagged }))
}
