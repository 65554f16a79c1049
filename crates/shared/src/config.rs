//! Configuration management for the Jikan client.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public Jikan v4 address
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Default cache TTL: 24 hours
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 60 * 60 * 24;

/// Default cap on logged response bodies
pub const DEFAULT_MAX_RESPONSE_DATA_LENGTH: usize = 1000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Response cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Jikan API base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live of a cached response in seconds
    pub ttl_seconds: u64,

    /// HTTP methods whose responses are cached
    pub methods: Vec<String>,

    /// Ask intermediaries not to cache (sends no-cache headers upstream)
    pub cache_takeover: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log every request and response passing through the client
    pub enable_http_logging: bool,

    /// Include response bodies in debug logs
    pub log_response_data: bool,

    /// Maximum characters of a logged response body
    pub max_response_data_length: usize,

    /// Include request/response headers in debug logs
    pub include_headers: bool,

    /// Include query parameters in debug logs
    pub log_request_params: bool,

    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            user_agent: concat!("jikan-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            methods: vec!["GET".to_string()],
            cache_takeover: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_http_logging: false,
            log_response_data: false,
            max_response_data_length: DEFAULT_MAX_RESPONSE_DATA_LENGTH,
            include_headers: false,
            log_request_params: false,
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load configuration from a TOML file or fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration saved successfully"
        );

        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_seconds)
    }

    /// Cache TTL as a `Duration`
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_seconds)
    }

    /// Get the path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.logging.log_dir)
    }
}
