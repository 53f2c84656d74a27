//! Core domain entities representing the business data model.
//!
//! Entities are immutable value objects projected from upstream responses.
//! They carry no identity beyond field equality and are never mutated
//! after construction.
//!
//! # Entity Types
//!
//! - [`MovieSummary`] - Abbreviated record from a title search
//! - [`MovieDetail`] - Full record from an id lookup

pub mod movie;

pub use movie::{MovieDetail, MovieSummary};
