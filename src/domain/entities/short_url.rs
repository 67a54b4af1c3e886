//! Short URL entity representing a shortcode to target URL mapping.

use chrono::{DateTime, Utc};

/// A stored short URL with its usage counters.
///
/// `last_seen_at` stays `None` until the first redirect; after that it holds
/// the time of the most recent visit and `view_count` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlRecord {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub view_count: u64,
}

impl ShortUrlRecord {
    /// Creates a record that has never been visited.
    pub fn new(code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            created_at,
            last_seen_at: None,
            view_count: 0,
        }
    }

    /// Counts one redirect visit at `seen_at`.
    pub fn record_view(&mut self, seen_at: DateTime<Utc>) {
        self.view_count += 1;
        self.last_seen_at = Some(seen_at);
    }

    /// Returns true once the record has been visited at least once.
    pub fn is_visited(&self) -> bool {
        self.view_count > 0
    }
}

/// Shortcode requested by a client, kept even when it is not a JSON string
/// so that validation can report it as a format failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedShortcode {
    Text(String),
    NotText,
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub code: String,
    pub target_url: String,
}
