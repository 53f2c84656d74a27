//! # OMDb Proxy
//!
//! A caching movie-search proxy for the OMDb API built with Axum.
//!
//! ## Architecture
//!
//! Layered in the Clean Architecture style, dependencies pointing inward:
//!
//! - **Domain Layer** ([`domain`]) - Movie entities, upstream payload decoding, fetch trait
//! - **Application Layer** ([`application`]) - Lookup orchestration and caching policy
//! - **Infrastructure Layer** ([`infrastructure`]) - OMDb HTTP client and cache implementations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Title search and detail lookups backed by one upstream API key
//! - Process-lifetime in-memory caching, keyed by exact input
//! - Absorbing error handling: lookups answer empty instead of failing
//! - Permissive CORS for browser clients
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export OMDB_API_URL="https://www.omdbapi.com/"
//! export OMDB_API_KEY="your-key"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! All settings come from environment variables, read once at startup into
//! [`config::Config`]; the [`config`] module documents every variable.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// One import for the handful of types integration tests and embedding
/// code reach for most.
pub mod prelude {
    pub use crate::application::services::{Lookup, MovieService};
    pub use crate::domain::entities::{MovieDetail, MovieSummary};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
