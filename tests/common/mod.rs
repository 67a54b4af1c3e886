#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shorty::domain::entities::{NewShortUrl, ShortUrlRecord};
use shorty::domain::repositories::ShortUrlRepository;
use shorty::infrastructure::persistence::InMemoryShortUrlRepository;
use shorty::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryShortUrlRepository>) {
    let repository = Arc::new(InMemoryShortUrlRepository::new());
    let state = AppState::new(repository.clone());

    (state, repository)
}

pub async fn create_test_short_url(
    repository: &InMemoryShortUrlRepository,
    code: &str,
    url: &str,
) -> ShortUrlRecord {
    repository
        .create(NewShortUrl {
            code: code.to_string(),
            target_url: url.to_string(),
        })
        .await
        .unwrap()
}

pub async fn record_test_view(
    repository: &InMemoryShortUrlRepository,
    code: &str,
    seen_at: DateTime<Utc>,
) -> ShortUrlRecord {
    repository.record_view(code, seen_at).await.unwrap().unwrap()
}
