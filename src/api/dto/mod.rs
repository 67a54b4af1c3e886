//! Data Transfer Objects for API requests and responses.

pub mod error;
pub mod shorten;
pub mod stats;
