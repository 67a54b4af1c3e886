//! Helper functions used across the application.
//!
//! - [`shortcode`] - Shortcode generation and format validation
//! - [`time`] - Timestamp formatting for JSON responses

pub mod shortcode;
pub mod time;
