pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

pub use handlers::{AppState, AppStateConfig};

pub fn router(state: Arc<AppState>) -> Router {
    // Routing contract:
    // - /assets/* -> {web_dir}/assets/*
    // - / and the fallback -> index() (reads {web_dir}/index.html)
    let web_assets_dir = state.web_assets_dir();

    Router::new()
        // -------------------------
        // V1 (stable, typed API)
        // -------------------------
        .route("/api/v1/health", get(handlers::health_v1))
        .route("/api/v1/jobs", get(handlers::list_jobs_v1))
        .route("/api/v1/jobs/:slug", get(handlers::job_detail_v1))
        // OpenAPI
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .route("/docs", get(openapi::docs_page))
        // Ping alias (for tooling)
        .route("/api/ping", get(handlers::health_v1))
        // Static assets
        .nest_service("/assets", ServeDir::new(web_assets_dir))
        // Index + SPA fallback
        .route("/", get(handlers::index))
        .fallback(get(handlers::index))
        .with_state(state)
}
