//! OMDb API adapter.

mod client;

pub use client::OmdbClient;
