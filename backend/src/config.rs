//! Process configuration, read once at startup.
//!
//! `main` loads `.env` (if any), builds an [`AppConfig`] from the environment and
//! exits immediately when that fails. Nothing else in the backend reads the
//! environment; the config is handed to the upstream client at construction.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Sampling temperature sent with every generation request.
pub const TEMPERATURE: f64 = 0.7;
/// Output token budget; Hindi text needs a fairly generous one.
pub const MAX_OUTPUT_TOKENS: u32 = 800;
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing GEMINI_API_KEY in environment or .env file")]
    MissingApiKey,
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// Immutable settings shared by the server and the upstream client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API from a browser. `None` allows any.
    pub allowed_origin: Option<String>,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. `GEMINI_API_KEY` is the only
    /// required variable; everything else falls back to the defaults above.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: get("GEMINI_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            allowed_origin: get("ALLOWED_ORIGIN").map(|o| o.trim_end_matches('/').to_string()),
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            upstream_timeout: UPSTREAM_TIMEOUT,
        })
    }
}
