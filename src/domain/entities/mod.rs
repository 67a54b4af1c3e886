//! Core domain entities.
//!
//! - [`ShortUrlRecord`] - A stored shortcode mapping with usage counters
//! - [`NewShortUrl`] - Input for creating a record
//! - [`RequestedShortcode`] - Client-supplied shortcode before validation

pub mod short_url;

pub use short_url::{NewShortUrl, RequestedShortcode, ShortUrlRecord};
