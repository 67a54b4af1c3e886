//! Repository trait for short URL storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{NewShortUrl, ShortUrlRecord};

/// Failures reported by a [`ShortUrlRepository`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The shortcode is already taken. Shortcodes are compared case-sensitively.
    #[error("shortcode `{code}` already exists")]
    Conflict { code: String },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage interface for short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Stores a new short URL.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the code already exists.
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrlRecord, RepositoryError>;

    /// Finds a short URL by its exact code.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, RepositoryError>;

    /// Atomically increments the view counter and sets the last-seen time.
    ///
    /// Returns the updated record, or `Ok(None)` if the code is unknown.
    async fn record_view(
        &self,
        code: &str,
        seen_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrlRecord>, RepositoryError>;
}
