//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public shortener routes.
///
/// # Endpoints
///
/// - `POST /shorten`             - Create a short URL
/// - `GET  /{shortcode}`         - Redirect to the target URL
/// - `GET  /{shortcode}/stats`   - Usage statistics
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{shortcode}", get(redirect_handler))
        .route("/{shortcode}/stats", get(stats_handler))
}
