//! Handler for the shortening endpoint.

use axum::extract::State;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::request_gate::JsonRequest;
use crate::api::response::{ResponseEnvelope, created};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "shortcode": "example" }
/// ```
///
/// `shortcode` is optional; a 6 character code is generated when omitted.
///
/// # Response
///
/// `201 Created` with `{ "shortcode": "example" }`.
///
/// # Errors
///
/// - 400 if `url` is missing
/// - 409 if the shortcode is already in use
/// - 422 if the content type is not JSON or the shortcode has a bad format
/// - 500 if the body is not valid JSON
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonRequest(body): JsonRequest,
) -> Result<ResponseEnvelope, AppError> {
    let request = ShortenRequest::from_json(&body);

    let record = state
        .short_url_service
        .shorten(request.url, request.shortcode)
        .await?;

    Ok(created(&ShortenResponse {
        shortcode: record.code,
    }))
}
