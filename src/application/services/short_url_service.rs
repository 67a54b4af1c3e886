//! Short URL creation, resolution and lookup.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, RequestedShortcode, ShortUrlRecord};
use crate::domain::repositories::{RepositoryError, ShortUrlRepository};
use crate::domain::validation::{Field, Reason, ValidationErrors};
use crate::error::AppError;
use crate::utils::shortcode::{generate_shortcode, is_valid_shortcode};

/// Attempts at finding a free generated shortcode before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and reading short URLs.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ShortUrlService {
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Validates the input and stores a new short URL.
    ///
    /// Without a requested shortcode a random one is generated, retrying on
    /// collision up to 10 times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with:
    /// - `UrlMissing` if the URL is absent or empty
    /// - `ShortcodeBadFormat` if the requested shortcode fails the pattern
    /// - `ShortcodeNotUnique` if the requested shortcode is taken
    ///
    /// Returns [`AppError::Internal`] if no free shortcode could be generated.
    pub async fn shorten(
        &self,
        url: Option<String>,
        shortcode: Option<RequestedShortcode>,
    ) -> Result<ShortUrlRecord, AppError> {
        let mut errors = ValidationErrors::new();

        if url.as_deref().is_none_or(str::is_empty) {
            errors.add(Field::Url, Reason::NotPresent);
        }

        let requested_code = match shortcode {
            Some(RequestedShortcode::Text(code)) if is_valid_shortcode(&code) => Some(code),
            Some(_) => {
                errors.add(Field::Shortcode, Reason::Format);
                None
            }
            None => None,
        };

        let target_url = match url {
            Some(url) if errors.is_empty() => url,
            _ => return Err(AppError::Validation(errors.classify())),
        };

        match requested_code {
            Some(code) => self.create_with_code(code, target_url).await,
            None => self.create_with_generated_code(target_url).await,
        }
    }

    async fn create_with_code(
        &self,
        code: String,
        target_url: String,
    ) -> Result<ShortUrlRecord, AppError> {
        let new_short_url = NewShortUrl { code, target_url };

        match self.repository.create(new_short_url).await {
            Ok(record) => {
                tracing::info!(code = %record.code, "Short URL created");
                Ok(record)
            }
            Err(RepositoryError::Conflict { code }) => {
                tracing::debug!(%code, "Requested shortcode already in use");
                let errors = ValidationErrors::new().with(Field::Shortcode, Reason::NotUnique);
                Err(AppError::Validation(errors.classify()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_with_generated_code(
        &self,
        target_url: String,
    ) -> Result<ShortUrlRecord, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_short_url = NewShortUrl {
                code: generate_shortcode(),
                target_url: target_url.clone(),
            };

            match self.repository.create(new_short_url).await {
                Ok(record) => {
                    tracing::info!(code = %record.code, "Short URL created");
                    return Ok(record);
                }
                Err(RepositoryError::Conflict { code }) => {
                    tracing::warn!(%code, attempt, "Generated shortcode collided");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "failed to generate a unique shortcode: too many collisions",
        ))
    }

    /// Records a redirect visit and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    pub async fn resolve(&self, code: &str) -> Result<ShortUrlRecord, AppError> {
        self.repository
            .record_view(code, Utc::now())
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Looks up a record without touching its counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    pub async fn stats(&self, code: &str) -> Result<ShortUrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }
}
