//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortUrl, ShortUrlRecord};
use crate::domain::repositories::{RepositoryError, ShortUrlRepository};

/// Process-local repository keyed by shortcode.
///
/// Writes take the map's write lock, so view increments for the same code are
/// serialized and never lost.
#[derive(Default)]
pub struct InMemoryShortUrlRepository {
    records: RwLock<HashMap<String, ShortUrlRecord>>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrlRecord, RepositoryError> {
        let mut records = self.records.write().await;

        match records.entry(new_short_url.code) {
            Entry::Occupied(entry) => Err(RepositoryError::Conflict {
                code: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let record =
                    ShortUrlRecord::new(entry.key().clone(), new_short_url.target_url, Utc::now());
                entry.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, RepositoryError> {
        Ok(self.records.read().await.get(code).cloned())
    }

    async fn record_view(
        &self,
        code: &str,
        seen_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrlRecord>, RepositoryError> {
        let mut records = self.records.write().await;

        Ok(records.get_mut(code).map(|record| {
            record.record_view(seen_at);
            record.clone()
        }))
    }
}
