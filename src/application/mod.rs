//! Application layer services implementing business logic.
//!
//! Services validate input, consume repository traits and hand handlers
//! either a domain record or an [`AppError`](crate::error::AppError).
//!
//! - [`services::short_url_service::ShortUrlService`] - Short URL creation, redirects and stats

pub mod services;
