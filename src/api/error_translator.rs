//! Maps validation failures to HTTP responses.

use axum::http::StatusCode;

use crate::api::dto::error::ErrorBody;
use crate::api::response::{ResponseEnvelope, UNPROCESSABLE_DESCRIPTION, emit, unprocessable};
use crate::domain::validation::ValidationError;
use crate::utils::shortcode::SHORTCODE_PATTERN;

/// Converts a validation failure into its response.
///
/// - [`ValidationError::UrlMissing`] → 400 Bad Request
/// - [`ValidationError::ShortcodeNotUnique`] → 409 Conflict
/// - [`ValidationError::ShortcodeBadFormat`] → 422 naming the shortcode pattern
/// - [`ValidationError::Other`] → 422 with the generic description
///
/// 422 bodies always carry an empty `errors` object.
pub fn translate_error(error: ValidationError) -> ResponseEnvelope {
    match error {
        ValidationError::UrlMissing => emit(
            StatusCode::BAD_REQUEST,
            &ErrorBody::new("Bad Request", "URL is not present"),
        ),
        ValidationError::ShortcodeNotUnique => emit(
            StatusCode::CONFLICT,
            &ErrorBody::new(
                "Conflict",
                "The desired shortcode is already in use. Shortcodes are case-sensitive.",
            ),
        ),
        ValidationError::ShortcodeBadFormat => unprocessable(format!(
            "The shortcode fails to meet the following regexp: {SHORTCODE_PATTERN}"
        )),
        ValidationError::Other => unprocessable(UNPROCESSABLE_DESCRIPTION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{Field, Reason, ValidationErrors};
    use serde_json::json;

    #[test]
    fn test_url_missing_is_bad_request() {
        let envelope = translate_error(ValidationError::UrlMissing);

        assert_eq!(envelope.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            envelope.body(),
            Some(&json!({ "message": "Bad Request", "description": "URL is not present" }))
        );
    }

    #[test]
    fn test_not_unique_is_conflict() {
        let envelope = translate_error(ValidationError::ShortcodeNotUnique);

        assert_eq!(envelope.status(), StatusCode::CONFLICT);
        assert_eq!(
            envelope.body(),
            Some(&json!({
                "message": "Conflict",
                "description": "The desired shortcode is already in use. Shortcodes are case-sensitive."
            }))
        );
    }

    #[test]
    fn test_bad_format_names_the_pattern() {
        let envelope = translate_error(ValidationError::ShortcodeBadFormat);

        assert_eq!(envelope.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            envelope.body(),
            Some(&json!({
                "message": "Unprocessable Entity",
                "description": "The shortcode fails to meet the following regexp: ^[0-9a-zA-Z_]{4,}$",
                "errors": {}
            }))
        );
    }

    #[test]
    fn test_other_is_generic_unprocessable() {
        let envelope = translate_error(ValidationError::Other);

        assert_eq!(envelope.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            envelope.body(),
            Some(&json!({
                "message": "Unprocessable Entity",
                "description": "The submitted entity is unprocessable",
                "errors": {}
            }))
        );
    }

    #[test]
    fn test_url_missing_ignores_other_fields() {
        let errors = ValidationErrors::new()
            .with(Field::Url, Reason::NotPresent)
            .with(Field::Shortcode, Reason::NotUnique);

        assert_eq!(translate_error(errors.classify()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_before_format() {
        let errors = ValidationErrors::new().with(Field::Shortcode, Reason::NotUnique);
        assert_eq!(translate_error(errors.classify()).status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_empty_and_unrelated_errors_are_generic() {
        for errors in [
            ValidationErrors::new(),
            ValidationErrors::new().with(Field::Url, Reason::Format),
            ValidationErrors::new().with(Field::Url, Reason::NotUnique),
            ValidationErrors::new()
                .with(Field::Shortcode, Reason::Format)
                .with(Field::Shortcode, Reason::NotUnique),
        ] {
            let envelope = translate_error(errors.classify());

            assert_eq!(envelope.status(), StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(
                envelope.body().unwrap()["description"],
                "The submitted entity is unprocessable"
            );
            assert_eq!(envelope.body().unwrap()["errors"], json!({}));
        }
    }
}
