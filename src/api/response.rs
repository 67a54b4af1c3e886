//! Response composition.
//!
//! Every handler outcome becomes a [`ResponseEnvelope`]: a status, an optional
//! JSON body and the headers to send. Handlers return the envelope (or an
//! [`AppError`](crate::error::AppError) that converts into one) and stop; axum
//! writes it out through [`IntoResponse`].
//!
//! All constructors except [`redirect`] go through [`emit`], which is the only
//! place that serializes a body and sets `Content-Type`.
//!
//! # Status Codes
//!
//! | Constructor      | Status | Body                                  |
//! |------------------|--------|---------------------------------------|
//! | [`success`]      | 200    | caller supplied                       |
//! | [`created`]      | 201    | caller supplied                       |
//! | [`redirect`]     | 302    | none, `Location` header               |
//! | [`not_found`]    | 404    | [`ErrorBody`]                         |
//! | [`unprocessable`]| 422    | [`UnprocessableBody`]                 |
//! | [`server_error`] | 500    | [`ErrorBody`]                         |

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

use crate::api::dto::error::{ErrorBody, UnprocessableBody};

/// `Content-Type` sent with every JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub const SERVER_ERROR_MESSAGE: &str = "Internal Server Error";
pub const SERVER_ERROR_DESCRIPTION: &str = "Internal Error";
pub const NOT_FOUND_DESCRIPTION: &str = "The shortcode cannot be found in the system";
pub const UNPROCESSABLE_DESCRIPTION: &str = "The submitted entity is unprocessable";

/// A complete response for a single request.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    status: StatusCode,
    body: Option<Value>,
    headers: HeaderMap,
}

impl ResponseEnvelope {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns a header value if present and valid UTF-8.
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let body = match self.body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };

        let mut response = Response::new(body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Serializes `body` as the JSON payload of a response with `status`.
///
/// If the body cannot be represented as JSON the result is a 500 with the
/// default server error body instead.
pub fn emit<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> ResponseEnvelope {
    match serde_json::to_value(body) {
        Ok(value) => json_envelope(status, value),
        Err(e) => {
            tracing::error!(status = status.as_u16(), "Failed to serialize response body: {}", e);
            json_envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "message": SERVER_ERROR_MESSAGE,
                    "description": SERVER_ERROR_DESCRIPTION,
                }),
            )
        }
    }
}

fn json_envelope(status: StatusCode, body: Value) -> ResponseEnvelope {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );

    ResponseEnvelope {
        status,
        body: Some(body),
        headers,
    }
}

/// 201 with the created resource.
pub fn created<T: Serialize + ?Sized>(resource: &T) -> ResponseEnvelope {
    emit(StatusCode::CREATED, resource)
}

/// 200 with `body`.
pub fn success<T: Serialize + ?Sized>(body: &T) -> ResponseEnvelope {
    emit(StatusCode::OK, body)
}

/// 500 with the default message and description.
pub fn server_error() -> ResponseEnvelope {
    server_error_with(SERVER_ERROR_MESSAGE, SERVER_ERROR_DESCRIPTION)
}

/// 500 with a caller-chosen message and description.
pub fn server_error_with(
    message: impl Into<String>,
    description: impl Into<String>,
) -> ResponseEnvelope {
    emit(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorBody::new(message, description),
    )
}

pub fn not_found() -> ResponseEnvelope {
    emit(
        StatusCode::NOT_FOUND,
        &ErrorBody::new("Not Found", NOT_FOUND_DESCRIPTION),
    )
}

/// 422 with `description` and an empty `errors` object.
pub fn unprocessable(description: impl Into<String>) -> ResponseEnvelope {
    emit(
        StatusCode::UNPROCESSABLE_ENTITY,
        &UnprocessableBody::new(description),
    )
}

/// 302 to `location`, without a body.
///
/// A location that cannot be sent as a header value yields a 500.
pub fn redirect(location: &str) -> ResponseEnvelope {
    let value = match HeaderValue::from_str(location) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(location, "Invalid redirect location: {}", e);
            return server_error();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, value);

    ResponseEnvelope {
        status: StatusCode::FOUND,
        body: None,
        headers,
    }
}
