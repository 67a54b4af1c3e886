//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::RequestedShortcode;

/// Fields read from a `POST /shorten` body.
///
/// The body is parsed as a generic JSON value first, so a missing field, a
/// `null` and a non-object body all arrive here as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenRequest {
    /// The URL to shorten. Empty strings and non-string values count as absent.
    pub url: Option<String>,
    pub shortcode: Option<RequestedShortcode>,
}

impl ShortenRequest {
    pub fn from_json(body: &Value) -> Self {
        let url = body
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let shortcode = match body.get("shortcode") {
            None | Some(Value::Null) => None,
            Some(Value::String(code)) => Some(RequestedShortcode::Text(code.clone())),
            Some(_) => Some(RequestedShortcode::NotText),
        };

        Self { url, shortcode }
    }
}

/// Body of a successful `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub shortcode: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_fields() {
        let request = ShortenRequest::from_json(&json!({
            "url": "https://example.com",
            "shortcode": "ab12"
        }));

        assert_eq!(request.url.as_deref(), Some("https://example.com"));
        assert_eq!(
            request.shortcode,
            Some(RequestedShortcode::Text("ab12".to_string()))
        );
    }

    #[test]
    fn test_from_json_missing_or_empty_url() {
        assert!(ShortenRequest::from_json(&json!({})).url.is_none());
        assert!(ShortenRequest::from_json(&json!({ "url": "" })).url.is_none());
        assert!(ShortenRequest::from_json(&json!({ "url": null })).url.is_none());
        assert!(ShortenRequest::from_json(&json!({ "url": 42 })).url.is_none());
    }

    #[test]
    fn test_from_json_non_object_body() {
        assert_eq!(
            ShortenRequest::from_json(&json!(["https://example.com"])),
            ShortenRequest::default()
        );
        assert_eq!(
            ShortenRequest::from_json(&json!("https://example.com")),
            ShortenRequest::default()
        );
    }

    #[test]
    fn test_from_json_shortcode_variants() {
        assert!(
            ShortenRequest::from_json(&json!({ "shortcode": null }))
                .shortcode
                .is_none()
        );
        assert_eq!(
            ShortenRequest::from_json(&json!({ "shortcode": 1234 })).shortcode,
            Some(RequestedShortcode::NotText)
        );
    }
}
