use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod admin;
pub mod chirps;
pub mod users;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static front end, chirp/user API,
/// and the admin metrics/reset routes.
pub fn build_router(state: ServerState, cors: CorsLayer, assets_dir: &str) -> Router {
    let static_dir =
        ServeDir::new(assets_dir).fallback(ServeFile::new(format!("{assets_dir}/index.html")));

    // Front end under /app; every request through here bumps the hit counter
    let app = Router::new()
        .nest_service("/app", static_dir)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin::track_fileserver_hit,
        ));

    let api = Router::new()
        .route("/api/healthz", get(health))
        .route("/api/chirps", get(chirps::list_chirps).post(chirps::create_chirp))
        .route("/api/chirps/:id", get(chirps::get_chirp))
        .route("/api/users", post(users::create_user));

    let admin_routes = Router::new()
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset));

    app.merge(api)
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
