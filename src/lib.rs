//! # Shorty
//!
//! A small URL shortening service built with Axum.
//!
//! Clients `POST /shorten` a long URL and receive a shortcode; `GET /{shortcode}`
//! redirects to the original URL and counts the visit; `GET /{shortcode}/stats`
//! reports when the code was created, how often it was used and when it was
//! last seen.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, validation failures and the repository trait
//! - **Application Layer** ([`application`]) - Validation, shortcode generation and storage calls
//! - **Infrastructure Layer** ([`infrastructure`]) - Repository implementations
//! - **API Layer** ([`api`]) - Content negotiation, error translation and response composition
//!
//! ## Response Contract
//!
//! Every JSON response carries `Content-Type: application/json; charset=UTF-8`.
//! Errors use a `{ "message", "description" }` body, plus an empty `errors`
//! object on 422. Redirects are `302` with a `Location` header and no body.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

