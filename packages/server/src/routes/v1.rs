use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/catalog", catalog_routes())
        .nest("/countries", video_routes())
        .nest("/submissions", submission_routes())
        .nest("/moderation", moderation_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::register))
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::me))
}

fn catalog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::catalog::list_categories))
        .routes(routes!(handlers::catalog::list_countries))
        .routes(routes!(handlers::catalog::get_country))
}

fn video_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::catalog::country_counts))
        .routes(routes!(handlers::catalog::list_videos))
        .routes(routes!(handlers::catalog::random_video))
}

fn submission_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::submission::create_submission))
        .routes(routes!(handlers::submission::list_mine))
        .routes(routes!(handlers::submission::get_slot))
        .routes(routes!(
            handlers::submission::get_submission,
            handlers::submission::update_submission,
            handlers::submission::delete_submission
        ))
        .routes(routes!(handlers::flag::create_flag))
        .routes(routes!(handlers::flag::has_flagged))
}

fn moderation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::moderation::list_submissions))
        .routes(routes!(handlers::moderation::approve_submission))
        .routes(routes!(handlers::moderation::reject_submission))
        .routes(routes!(handlers::moderation::list_flags))
        .routes(routes!(handlers::moderation::dismiss_flag))
}
