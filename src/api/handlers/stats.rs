//! Handler for short URL statistics.

use axum::extract::{Path, State};

use crate::api::dto::stats::stats_for;
use crate::api::response::{ResponseEnvelope, success};
use crate::error::AppError;
use crate::state::AppState;

/// Returns usage statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /{shortcode}/stats`
///
/// # Response
///
/// ```json
/// {
///   "startDate": "2024-01-01T12:00:00Z",
///   "redirectCount": 3,
///   "lastSeenDate": "2024-01-05T08:30:00Z"
/// }
/// ```
///
/// `lastSeenDate` is present only once the shortcode has been visited.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<ResponseEnvelope, AppError> {
    let record = state.short_url_service.stats(&shortcode).await?;

    Ok(success(&stats_for(&record)))
}
