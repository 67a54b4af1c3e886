//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` for unit tests.

pub mod short_url_repository;

pub use short_url_repository::{RepositoryError, ShortUrlRepository};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
