//! Route definitions for the DriveBox HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Multipart framing headroom on top of the file-size cap, so the
/// service-level limit is what clients actually hit.
const BODY_LIMIT_SLACK_BYTES: usize = 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.storage.max_upload_size_bytes as usize + BODY_LIMIT_SLACK_BYTES;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Folder hierarchy endpoints
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_root))
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
}

/// File upload and lifecycle endpoints
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/files", post(handlers::file::upload_file))
        .route("/files/{id}", delete(handlers::file::delete_file))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
