use crate::api::response::{ResponseEnvelope, not_found};

/// Answers unmatched routes with the JSON not-found body.
pub async fn fallback_handler() -> ResponseEnvelope {
    not_found()
}
