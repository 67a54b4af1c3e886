//! Repository implementations.

pub mod memory_short_url_repository;

pub use memory_short_url_repository::InMemoryShortUrlRepository;
