use axum::{Json, extract::State, http::StatusCode};
use common::{Decision, ModerationStatus};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::rejection::{AppPath, AppQuery};
use crate::models::moderation::{
    FlagListItem, FlagListQuery, FlagListResponse, ModerationListQuery, ModerationListResponse,
    ModerationSubmission,
};
use crate::models::shared::{Pagination, page_params};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/submissions",
    tag = "Moderation",
    operation_id = "listModerationQueue",
    summary = "List submissions by status",
    description = "Oldest first, so the queue is worked in arrival order. Requires `moderation:review` permission.",
    params(ModerationListQuery),
    responses(
        (status = 200, description = "Submissions", body = ModerationListResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = auth_user.user_id))]
pub async fn list_submissions(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ModerationListQuery>,
) -> Result<Json<ModerationListResponse>, AppError> {
    auth_user.require_permission("moderation:review")?;

    let (page, per_page) = page_params(query.page, query.per_page);
    let status = query.status.unwrap_or(ModerationStatus::Pending);

    let result = state
        .ledger()
        .list_by_status(Some(status), page, per_page)
        .await?;

    Ok(Json(ModerationListResponse {
        data: result
            .items
            .into_iter()
            .map(ModerationSubmission::from)
            .collect(),
        pagination: Pagination::new(page, per_page, result.total),
    }))
}

#[utoipa::path(
    post,
    path = "/submissions/{id}/approve",
    tag = "Moderation",
    operation_id = "approveSubmission",
    summary = "Approve a pending submission",
    description = "Requires `moderation:review` permission. Only pending submissions can be approved.",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Approved", body = ModerationSubmission),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Not pending, or edited during review (INVALID_TRANSITION, SUBMISSION_CHANGED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn approve_submission(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ModerationSubmission>, AppError> {
    decide(auth_user, state, id, Decision::Approve).await
}

#[utoipa::path(
    post,
    path = "/submissions/{id}/reject",
    tag = "Moderation",
    operation_id = "rejectSubmission",
    summary = "Reject a pending submission",
    description = "Requires `moderation:review` permission. Only pending submissions can be rejected.",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Rejected", body = ModerationSubmission),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Not pending, or edited during review (INVALID_TRANSITION, SUBMISSION_CHANGED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn reject_submission(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ModerationSubmission>, AppError> {
    decide(auth_user, state, id, Decision::Reject).await
}

async fn decide(
    auth_user: AuthUser,
    state: AppState,
    id: i32,
    decision: Decision,
) -> Result<Json<ModerationSubmission>, AppError> {
    auth_user.require_permission("moderation:review")?;
    let moderator = auth_user.principal()?;

    let updated = state.ledger().moderate(id, &moderator, decision).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    get,
    path = "/flags",
    tag = "Moderation",
    operation_id = "listFlags",
    summary = "List flags",
    description = "Newest first, each with the total number of flags on its submission. Requires `moderation:flags` permission.",
    params(FlagListQuery),
    responses(
        (status = 200, description = "Flags", body = FlagListResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = auth_user.user_id))]
pub async fn list_flags(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FlagListQuery>,
) -> Result<Json<FlagListResponse>, AppError> {
    auth_user.require_permission("moderation:flags")?;

    let (page, per_page) = page_params(query.page, query.per_page);
    let result = state.ledger().list_flags(page, per_page).await?;

    Ok(Json(FlagListResponse {
        data: result.items.into_iter().map(FlagListItem::from).collect(),
        pagination: Pagination::new(page, per_page, result.total),
    }))
}

#[utoipa::path(
    delete,
    path = "/flags/{id}",
    tag = "Moderation",
    operation_id = "dismissFlag",
    summary = "Dismiss a flag",
    description = "Requires `moderation:flags` permission.",
    params(("id" = i32, Path, description = "Flag ID")),
    responses(
        (status = 204, description = "Dismissed"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn dismiss_flag(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    auth_user.require_permission("moderation:flags")?;
    let moderator = auth_user.principal()?;

    state.ledger().dismiss_flag(id, &moderator).await?;
    Ok(StatusCode::NO_CONTENT)
}
