//! REST API layer for HTTP request/response handling.
//!
//! Maps the movie lookup operations onto HTTP endpoints and shapes their
//! results into the public JSON contract.
//!
//! # Modules
//!
//! - [`dto`] - Request parameters and response wire shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
