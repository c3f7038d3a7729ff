//! Route modules for NeuroTask Server

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod extract;
pub mod health;
pub mod tasks;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config().extraction.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/extract", extract::router())
        .nest("/api/v1/tasks", tasks::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
