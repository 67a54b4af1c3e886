//! HTTP layer: turns requests into service calls and outcomes into responses.
//!
//! Per request the flow is strictly sequential:
//!
//! 1. [`request_gate`] checks the content type and parses JSON bodies
//! 2. the handler calls the [`ShortUrlService`](crate::application::services::ShortUrlService)
//! 3. failures go through [`error_translator`] (validation) or
//!    [`AppError`](crate::error::AppError) (everything else)
//! 4. [`response`] builds the single [`ResponseEnvelope`](response::ResponseEnvelope)
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`error_translator`] - Validation failure to response mapping
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`request_gate`] - Content negotiation and body parsing
//! - [`response`] - Response envelopes and their constructors
//! - [`routes`] - Route configuration

pub mod dto;
pub mod error_translator;
pub mod handlers;
pub mod middleware;
pub mod request_gate;
pub mod response;
pub mod routes;
