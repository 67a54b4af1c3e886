//! Fixed-shape error bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ "message": ..., "description": ... }` body used by 400, 404, 409 and 500 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub description: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
        }
    }
}

/// 422 body. `errors` is always serialized, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnprocessableBody {
    pub message: String,
    pub description: String,
    pub errors: Map<String, Value>,
}

impl UnprocessableBody {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            message: "Unprocessable Entity".to_string(),
            description: description.into(),
            errors: Map::new(),
        }
    }
}
