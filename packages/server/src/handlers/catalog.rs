use axum::{Json, extract::State};
use common::{Category, Country, countries};
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::rejection::{AppPath, AppQuery};
use crate::ledger::canonical_country;
use crate::models::catalog::{CategoryResponse, CountryCountsResponse, CountryDetailResponse};
use crate::models::submission::{RandomVideoQuery, SubmissionResponse, VideoListQuery};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Catalog",
    operation_id = "listCategories",
    summary = "List content categories",
    description = "The fixed category set in display order, with labels, icons and taglines.",
    responses((status = 200, description = "Categories", body = Vec<CategoryResponse>)),
)]
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(Category::ALL.iter().copied().map(CategoryResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/countries",
    tag = "Catalog",
    operation_id = "listCountries",
    summary = "List countries",
    description = "ISO-3166 countries sorted by display name, each with its flag glyph.",
    responses((status = 200, description = "Countries", body = Vec<Country>)),
)]
pub async fn list_countries() -> Json<&'static [Country]> {
    Json(countries::all())
}

#[utoipa::path(
    get,
    path = "/countries/{code}",
    tag = "Catalog",
    operation_id = "getCountry",
    summary = "Get a country with its approved video counts",
    params(("code" = String, Path, description = "ISO-3166 alpha-3 code")),
    responses(
        (status = 200, description = "Country details", body = CountryDetailResponse),
        (status = 404, description = "Unknown country (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_country(
    State(state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<Json<CountryDetailResponse>, AppError> {
    let country = countries::find(code.trim())
        .ok_or_else(|| AppError::NotFound("Country not found".into()))?;

    let counts = state.ledger().count_approved_by_category(country.code).await?;
    let summary = CountryCountsResponse::new(country.code, counts);

    Ok(Json(CountryDetailResponse {
        country: country.clone(),
        counts: summary.counts,
        total: summary.total,
    }))
}

#[utoipa::path(
    get,
    path = "/{code}/counts",
    tag = "Videos",
    operation_id = "countApprovedByCategory",
    summary = "Approved video counts per category",
    description = "One entry per category, zero when a category has no approved videos.",
    params(("code" = String, Path, description = "ISO-3166 alpha-3 code")),
    responses(
        (status = 200, description = "Counts", body = CountryCountsResponse),
        (status = 400, description = "Unknown country (UNKNOWN_COUNTRY)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn country_counts(
    State(state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<Json<CountryCountsResponse>, AppError> {
    let code = canonical_country(&code)?;
    let counts = state.ledger().count_approved_by_category(code).await?;
    Ok(Json(CountryCountsResponse::new(code, counts)))
}

#[utoipa::path(
    get,
    path = "/{code}/videos/{category}",
    tag = "Videos",
    operation_id = "listApprovedVideos",
    summary = "List approved videos for a country and category",
    description = "Newest first, at most `limit` rows. Only approved submissions are listed.",
    params(
        ("code" = String, Path, description = "ISO-3166 alpha-3 code"),
        ("category" = String, Path, description = "Category value, e.g. `music`"),
        VideoListQuery,
    ),
    responses(
        (status = 200, description = "Approved videos", body = Vec<SubmissionResponse>),
        (status = 400, description = "Unknown country or category (UNKNOWN_COUNTRY, UNKNOWN_CATEGORY)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_videos(
    State(state): State<AppState>,
    AppPath((code, category)): AppPath<(String, String)>,
    AppQuery(query): AppQuery<VideoListQuery>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let category = parse_category(&category)?;
    let rows = state
        .ledger()
        .list_approved(&code, category, query.exclude, query.limit)
        .await?;
    Ok(Json(rows.into_iter().map(SubmissionResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{code}/videos/{category}/random",
    tag = "Videos",
    operation_id = "randomApprovedVideo",
    summary = "Pick a random recent approved video",
    description = "Chooses uniformly among the most recent approved videos (the default listing size), optionally excluding the one just watched.",
    params(
        ("code" = String, Path, description = "ISO-3166 alpha-3 code"),
        ("category" = String, Path, description = "Category value, e.g. `music`"),
        RandomVideoQuery,
    ),
    responses(
        (status = 200, description = "A video", body = SubmissionResponse),
        (status = 400, description = "Unknown country or category (UNKNOWN_COUNTRY, UNKNOWN_CATEGORY)", body = ErrorBody),
        (status = 404, description = "No approved videos (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn random_video(
    State(state): State<AppState>,
    AppPath((code, category)): AppPath<(String, String)>,
    AppQuery(query): AppQuery<RandomVideoQuery>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let category = parse_category(&category)?;
    let rows = state
        .ledger()
        .list_approved(&code, category, query.exclude, None)
        .await?;

    let picked = rows
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| AppError::NotFound("No approved videos yet".into()))?;
    debug!(submission_id = picked.id, pool = rows.len(), "Picked random video");

    Ok(Json(picked.into()))
}

pub(crate) fn parse_category(raw: &str) -> Result<Category, AppError> {
    raw.trim()
        .parse::<Category>()
        .map_err(|e| AppError::UnknownCategory(e.0))
}
