//! Service configuration sourced from environment variables.
//!
//! Everything is read once at startup and validated before the server
//! binds; a bad value fails fast instead of surfacing mid-request.
//!
//! ## Required Variables
//!
//! ```bash
//! export OMDB_API_URL="https://www.omdbapi.com/"
//! export OMDB_API_KEY="your-key"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Per-request upstream timeout (default: 10)
//! - `CACHE_ENABLED` - Toggle in-memory result caching (default: `true`)

use anyhow::{Context, Result};
use std::env;

/// Runtime settings for the proxy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OMDb API, query parameters are appended to it.
    pub api_url: String,
    /// OMDb API key. Never logged in full.
    pub api_key: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout for a single upstream request in seconds.
    pub upstream_timeout_seconds: u64,
    /// When false, every lookup goes to upstream.
    pub cache_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `OMDB_API_URL` or `OMDB_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("OMDB_API_URL").context("OMDB_API_URL must be set")?;
        let api_key = env::var("OMDB_API_KEY").context("OMDB_API_KEY must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        Ok(Self {
            api_url,
            api_key,
            listen_addr,
            log_level,
            log_format,
            upstream_timeout_seconds,
            cache_enabled,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_url` is not an HTTP(S) URL
    /// - `api_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `upstream_timeout_seconds` is out of range
    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!(
                "OMDB_API_URL must start with 'http://' or 'https://', got '{}'",
                self.api_url
            );
        }

        if self.api_key.is_empty() {
            anyhow::bail!("OMDB_API_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.upstream_timeout_seconds == 0 || self.upstream_timeout_seconds > 120 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.upstream_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  OMDb API URL: {}", self.api_url);
        tracing::info!("  OMDb API key: {}", mask_api_key(&self.api_key));
        tracing::info!(
            "  Caching: {}",
            if self.cache_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks an API key for logging, keeping a short recognizable prefix.
///
/// Short keys are masked entirely so the prefix never spans the whole key.
fn mask_api_key(key: &str) -> String {
    if key.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = key.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration in one step.
///
/// Expects the environment to be populated already; `main.rs` calls
/// `dotenvy::dotenv()` first so a local `.env` file is honored.
///
/// # Errors
///
/// Returns an error if a required variable is missing or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
