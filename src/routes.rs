//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`            - Create a short URL
//! - `GET  /{shortcode}`        - Redirect (302)
//! - `GET  /{shortcode}/stats`  - Usage statistics
//! - anything else              - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::fallback_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing and the JSON fallback, without path normalization.
pub fn router(state: AppState) -> Router {
    api::routes::public_routes()
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}
