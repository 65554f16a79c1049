//! Logging infrastructure for the Jikan client.
//!
//! Structured logging through `tracing`, with an optional daily-rolling file
//! layer and per-crate log levels.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory path
    pub log_dir: String,
    /// Component name (used for log file naming)
    pub component: String,
    /// Default log level
    pub default_level: Level,
    /// Enable console output
    pub console: bool,
    /// Enable file output
    pub file: bool,
    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            component: "jikan".to_string(),
            default_level: Level::INFO,
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl LogConfig {
    /// Build a logging setup from the `[logging]` section of the config file
    pub fn from_config(component: &str, config: &LoggingConfig) -> Result<Self> {
        let default_level = config
            .default_level
            .parse::<Level>()
            .map_err(|e| anyhow!("Invalid log level '{}': {}", config.default_level, e))?;

        Ok(Self {
            log_dir: config.log_dir.clone(),
            component: component.to_string(),
            default_level,
            console: config.console,
            file: config.file,
            json_format: config.json_format,
        })
    }

    fn env_filter(&self) -> EnvFilter {
        // RUST_LOG wins over the configured level
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},jikan={},shared={},hyper=warn,reqwest=warn,h2=warn",
                self.component, self.default_level, self.default_level, self.default_level
            ))
        })
    }
}

/// Initialize logging with the given configuration
///
/// Sets up tracing with:
/// - Console output (human-readable)
/// - Optional daily-rolling file output, plain or JSON
/// - Crate-specific log levels, overridable via `RUST_LOG`
pub fn init(config: LogConfig) -> Result<()> {
    let mut layers = Vec::new();

    if config.console {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stdout)
            .boxed();
        layers.push(console_layer);
    }

    if config.file {
        let log_dir = Path::new(&config.log_dir);
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", config.log_dir))?;

        let file_appender = tracing_appender::rolling::daily(log_dir, &config.component);

        let file_layer = if config.json_format {
            fmt::layer()
                .json()
                .with_target(true)
                .with_level(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(file_appender)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(file_appender)
                .boxed()
        };

        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        component = %config.component,
        file = config.file,
        log_dir = %config.log_dir,
        "Logging initialized"
    );

    Ok(())
}

/// Initialize console-only logging with default configuration
pub fn init_default() -> Result<()> {
    init(LogConfig::default())
}
