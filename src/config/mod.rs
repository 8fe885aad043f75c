//! Configuration module for the watchlist backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

/// Default Overseerr API root, matching a stock local install.
pub const DEFAULT_OVERSEERR_URL: &str = "http://localhost:5055/api/v1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Origin allowed by the CORS layer
    pub cors_origin: HeaderValue,
    /// Base URL of the Overseerr API, without a trailing slash
    pub overseerr_url: String,
    /// Overseerr API key, sent as `X-Api-Key` when set
    pub overseerr_api_key: Option<String>,
}

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
    InvalidCorsOrigin(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(v) => write!(f, "invalid WATCHLIST_BIND_ADDR: {}", v),
            ConfigError::InvalidCorsOrigin(v) => {
                write!(f, "invalid WATCHLIST_CORS_ORIGIN: {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("WATCHLIST_DB_PATH")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "./data/watchlist.sqlite".to_string())
            .into();

        let bind_addr_raw =
            env::var("WATCHLIST_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3004".to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr_raw.clone()))?;

        let log_level = env::var("WATCHLIST_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("WATCHLIST_LOG_JSON")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let cors_raw = env::var("WATCHLIST_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let cors_origin = HeaderValue::from_str(&cors_raw)
            .map_err(|_| ConfigError::InvalidCorsOrigin(cors_raw.clone()))?;

        let overseerr_url = env::var("OVERSEERR_API_URL")
            .unwrap_or_else(|_| DEFAULT_OVERSEERR_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let overseerr_api_key = env::var("OVERSEERR_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_json,
            cors_origin,
            overseerr_url,
            overseerr_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("WATCHLIST_DB_PATH");
        env::remove_var("DATABASE_URL");
        env::remove_var("WATCHLIST_BIND_ADDR");
        env::remove_var("WATCHLIST_LOG_LEVEL");
        env::remove_var("WATCHLIST_LOG_JSON");
        env::remove_var("WATCHLIST_CORS_ORIGIN");
        env::remove_var("OVERSEERR_API_URL");
        env::remove_var("OVERSEERR_API_KEY");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/watchlist.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3004");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.overseerr_url, DEFAULT_OVERSEERR_URL);
        assert!(config.overseerr_api_key.is_none());
    }
}
