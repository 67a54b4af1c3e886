use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::domain::repositories::ShortUrlRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self {
            short_url_service: Arc::new(ShortUrlService::new(repository)),
        }
    }
}
