//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod movies;

pub use health::health_handler;
pub use movies::{movie_details_handler, search_movies_handler};
