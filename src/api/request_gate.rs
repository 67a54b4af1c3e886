//! Content-type check and JSON parsing for request bodies.
//!
//! Write endpoints take a [`JsonRequest`] extractor. A request whose
//! `Content-Type` does not mention `application/json` is rejected with 422
//! before the handler runs. A body that claims to be JSON but fails to parse
//! becomes [`AppError::MalformedBody`], which is answered with 500. A body that
//! cannot be read at all (for example one over the size limit) keeps the status
//! axum assigns to it.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde_json::Value;

use crate::error::AppError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Returns true if the `Content-Type` header contains `application/json`.
///
/// Matching is a case-sensitive substring search, so parameters such as
/// `; charset=utf-8` are accepted but `Application/JSON` is not. A missing or
/// non-UTF-8 header is not JSON.
pub fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains(JSON_MEDIA_TYPE))
}

/// Checks the content type, then parses `body` as JSON.
///
/// # Errors
///
/// - [`AppError::WrongContentType`] if the request is not declared as JSON
/// - [`AppError::MalformedBody`] if the body is not valid JSON
pub fn parse_request(headers: &HeaderMap, body: &[u8]) -> Result<Value, AppError> {
    if !is_json_request(headers) {
        return Err(AppError::WrongContentType);
    }

    parse_body(body)
}

fn parse_body(body: &[u8]) -> Result<Value, AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// Request body parsed through [`parse_request`].
#[derive(Debug, Clone)]
pub struct JsonRequest(pub Value);

impl<S> FromRequest<S> for JsonRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_request(req.headers()) {
            return Err(AppError::WrongContentType);
        }

        let bytes = Bytes::from_request(req, state).await?;

        parse_body(&bytes).map(JsonRequest)
    }
}
