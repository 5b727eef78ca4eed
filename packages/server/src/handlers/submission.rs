use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::entity::submission;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::rejection::{AppJson, AppPath, AppQuery};
use crate::ledger::canonical_country;
use crate::models::submission::{
    CreateSubmissionRequest, MySubmissionsQuery, SlotQuery, SlotResponse, SubmissionResponse,
    UpdateSubmissionRequest,
};
use crate::state::AppState;

use super::catalog::parse_category;

#[utoipa::path(
    post,
    path = "/",
    tag = "Submissions",
    operation_id = "createSubmission",
    summary = "Submit a video",
    description = "Creates a pending submission for one (country, category) slot. Requires `submission:create` permission. A user holds at most one submission per slot; a second one fails with `SUBMISSION_EXISTS` carrying the existing id, which should be edited instead.",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission created", body = SubmissionResponse),
        (status = 400, description = "Invalid input (VALIDATION_ERROR, INVALID_URL, UNKNOWN_CATEGORY, UNKNOWN_COUNTRY)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 409, description = "Conflict (DUPLICATE_CONTENT, SUBMISSION_EXISTS)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn create_submission(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require_permission("submission:create")?;
    let principal = auth_user.principal()?;

    let created = state
        .ledger()
        .create_submission(&principal, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(SubmissionResponse::from(created))))
}

#[utoipa::path(
    get,
    path = "/mine",
    tag = "Submissions",
    operation_id = "listMySubmissions",
    summary = "List the caller's submissions",
    description = "All of the caller's submissions in every state, newest first.",
    params(MySubmissionsQuery),
    responses(
        (status = 200, description = "Submissions", body = Vec<SubmissionResponse>),
        (status = 400, description = "Unknown country (UNKNOWN_COUNTRY)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = auth_user.user_id))]
pub async fn list_mine(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MySubmissionsQuery>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let rows = state
        .ledger()
        .list_for_user(auth_user.user_id, query.country.as_deref())
        .await?;
    Ok(Json(rows.into_iter().map(SubmissionResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/slot",
    tag = "Submissions",
    operation_id = "getMySlot",
    summary = "The caller's submission for one country and category",
    description = "Lets a form decide between creating a new submission and editing the existing one.",
    params(SlotQuery),
    responses(
        (status = 200, description = "Slot state", body = SlotResponse),
        (status = 400, description = "Unknown country or category (UNKNOWN_COUNTRY, UNKNOWN_CATEGORY)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = auth_user.user_id))]
pub async fn get_slot(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SlotQuery>,
) -> Result<Json<SlotResponse>, AppError> {
    let country = canonical_country(&query.country)?;
    let category = parse_category(&query.category)?;

    let submission = state
        .ledger()
        .find_slot(auth_user.user_id, country, category)
        .await?;

    Ok(Json(SlotResponse {
        submission: submission.map(SubmissionResponse::from),
    }))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Submissions",
    operation_id = "getSubmission",
    summary = "Get a submission by ID",
    description = "Approved submissions are visible to every user. Pending and rejected ones only to their owner and to users with `moderation:review`; others get 404.",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission", body = SubmissionResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn get_submission(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let submission = visible_submission(&state, &auth_user, id).await?;
    Ok(Json(submission.into()))
}

/// Loads a submission the caller may see. Hidden rows are reported as missing.
pub(crate) async fn visible_submission(
    state: &AppState,
    auth_user: &AuthUser,
    id: i32,
) -> Result<submission::Model, AppError> {
    let submission = state.ledger().get_submission(id).await?;

    let visible = submission.status.is_visible()
        || submission.user_id == auth_user.user_id
        || auth_user.has_permission("moderation:review");
    if !visible {
        return Err(AppError::NotFound("Submission not found".into()));
    }
    Ok(submission)
}

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Submissions",
    operation_id = "updateSubmission",
    summary = "Edit a submission",
    description = "Owner only. Any successful edit returns the submission to `pending`.",
    params(("id" = i32, Path, description = "Submission ID")),
    request_body = UpdateSubmissionRequest,
    responses(
        (status = 200, description = "Updated submission", body = SubmissionResponse),
        (status = 400, description = "Invalid input (VALIDATION_ERROR, INVALID_URL)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the owner (FORBIDDEN)", body = ErrorBody),
        (status = 404, description = "Not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Same video already submitted by someone else (DUPLICATE_CONTENT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn update_submission(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateSubmissionRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let principal = auth_user.principal()?;

    let updated = state
        .ledger()
        .update_submission(id, &principal, payload.into())
        .await?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Submissions",
    operation_id = "deleteSubmission",
    summary = "Delete a submission",
    description = "Owner only. Flags raised against the submission are deleted with it.",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the owner (FORBIDDEN)", body = ErrorBody),
        (status = 404, description = "Not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn delete_submission(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    let principal = auth_user.principal()?;
    state.ledger().delete_submission(id, &principal).await?;
    Ok(StatusCode::NO_CONTENT)
}
