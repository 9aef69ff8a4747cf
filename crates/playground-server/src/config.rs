//! Server configuration
//!
//! Read from the process environment (optionally seeded from `.env`).

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_REFERER: &str = "https://prompt-playground.replit.app";
pub const DEFAULT_TITLE: &str = "Prompt Engineering Playground";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENROUTER_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Upstream completion API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
    /// Sent as `HTTP-Referer` for OpenRouter attribution
    pub referer: String,
    /// Sent as `X-Title`
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("OPENROUTER_API_KEY")
            .or_else(|| non_empty("OPENROUTER_API_KEY_ENV_VAR"))
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = non_empty("OPENROUTER_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };
        let addr = format!("{host}:{port}")
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value: host,
            })?;

        Ok(Self {
            addr,
            upstream: UpstreamConfig {
                api_key,
                base_url,
                referer: non_empty("OPENROUTER_REFERER")
                    .unwrap_or_else(|| DEFAULT_REFERER.to_string()),
                title: non_empty("OPENROUTER_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            },
        })
    }
}
