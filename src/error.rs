use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};

use crate::api::error_translator::translate_error;
use crate::api::dto::error::ErrorBody;
use crate::api::response::{self, ResponseEnvelope};
use crate::domain::repositories::RepositoryError;
use crate::domain::validation::ValidationError;

/// Error type returned by services and handlers.
///
/// Each variant converts into exactly one [`ResponseEnvelope`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body was not declared as JSON.
    #[error("wrong request content type")]
    WrongContentType,

    /// The request body was declared as JSON but could not be parsed.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The request body could not be read.
    #[error("unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("shortcode `{code}` not found")]
    NotFound { code: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Builds the response for this error.
    pub fn to_envelope(&self) -> ResponseEnvelope {
        match self {
            AppError::WrongContentType => response::unprocessable("Wrong Request Content Type"),
            AppError::Validation(error) => translate_error(*error),
            AppError::NotFound { .. } => response::not_found(),
            AppError::UnreadableBody(rejection) => {
                let status = rejection.status();
                response::emit(
                    status,
                    &ErrorBody::new(
                        status.canonical_reason().unwrap_or("Bad Request"),
                        rejection.body_text(),
                    ),
                )
            }
            AppError::MalformedBody(_) | AppError::Repository(_) | AppError::Internal(_) => {
                response::server_error()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope = self.to_envelope();

        if envelope.status().is_server_error() {
            tracing::error!(status = envelope.status().as_u16(), "{}", self);
        } else {
            tracing::debug!(status = envelope.status().as_u16(), "{}", self);
        }

        envelope.into_response()
    }
}
