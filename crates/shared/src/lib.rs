//! Shared support crate for the Jikan client workspace.
//!
//! This crate provides the ambient pieces the client builds on:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{CacheConfig, ClientConfig, Config, LoggingConfig};
pub use logging::LogConfig;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
