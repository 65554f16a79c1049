//! Typed client for the Jikan v4 REST API (an unofficial MyAnimeList API).
//!
//! `JikanClient` bundles one facade per resource family (anime, manga,
//! characters, ...) over a single cache-aware transport, so every facade
//! shares one response cache.
//!
//! ```no_run
//! # async fn run() -> jikan::Result<()> {
//! use jikan::{ClientOptions, JikanClient};
//!
//! let client = JikanClient::new(ClientOptions::default())?;
//! let anime = client.anime.get_anime_by_id(1).await?;
//! println!("{}", anime.data.title);
//!
//! client.clear_cache_entry("/anime/1").await;
//! # Ok(())
//! # }
//! ```
//!
//! Applications usually start from a TOML file with `[client]`, `[cache]`
//! and `[logging]` sections, which also drives `tracing` setup:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jikan::{logging, Config, JikanClient, LogConfig};
//!
//! let config = Config::load_or_default("jikan.toml");
//! logging::init(LogConfig::from_config("my_app", &config.logging)?)?;
//!
//! let client = JikanClient::from_config(&config)?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```
//!
//! `logging::init_default()` installs console-only logging instead.

pub mod api;
pub mod cache;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod resources;

pub use api::{
    ClientOptions, JikanClient, JikanPaginatedResponse, JikanResponse, Pagination, PathParams,
    QueryParams, ResourceClient,
};
pub use cache::{
    CacheOptions, CacheOptionsOverride, CacheStats, CacheStorage, CachedTransport, MemoryStorage,
    TransportConfig,
};
pub use error::JikanError;
pub use interceptor::{Interceptor, LoggingInterceptor, LoggingOptions};
pub use shared::{config, logging, Config, LogConfig};

/// Result type for the Jikan client
pub type Result<T> = std::result::Result<T, JikanError>;
