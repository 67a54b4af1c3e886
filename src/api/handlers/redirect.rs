//! Handler for short URL redirects.

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::response::{ResponseEnvelope, redirect};
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its target URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<ResponseEnvelope, AppError> {
    let record = state.short_url_service.resolve(&shortcode).await?;

    debug!(code = %record.code, views = record.view_count, "Redirecting");

    Ok(redirect(&record.target_url))
}
