//! HTTP request handlers.
//!
//! Handlers return `Result<ResponseEnvelope, AppError>`; both sides convert
//! into the final response.

pub mod fallback;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use fallback::fallback_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
