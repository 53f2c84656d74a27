//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating upstream calls,
//! response decoding, and caching. Services consume domain traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::movie_service::MovieService`] - Movie search and detail lookups

pub mod services;
