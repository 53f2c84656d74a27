//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the upstream HTTP client and caching.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (in-memory and no-op implementations)
//! - [`omdb`] - OMDb HTTP client implementing [`crate::domain::upstream::UpstreamClient`]

pub mod cache;
pub mod omdb;
