//! Client options and the aggregate Jikan client.

use super::transport::{HttpTransport, Method, Transport};
use crate::cache::{CacheOptionsOverride, CacheStats, CachedTransport, TransportConfig};
use crate::error::JikanError;
use crate::interceptor::{LoggingInterceptor, LoggingOptions};
use crate::resources::{
    AnimeClient, CharactersClient, ClubsClient, GenresClient, MagazinesClient, MangaClient,
    PeopleClient, ProducersClient, RandomClient, RecommendationsClient, ReviewsClient,
    SchedulesClient, SeasonsClient, TopClient, UsersClient, WatchClient,
};
use crate::Result;
use shared::config::{Config, DEFAULT_BASE_URL};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("jikan-rs/", env!("CARGO_PKG_VERSION"));

/// Options for building a client or a standalone facade
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Transport to use; `None` builds an `HttpTransport` from the fields above
    pub transport: Option<TransportConfig>,
    /// Ignored when `transport` is already cache-aware
    pub cache: CacheOptionsOverride,
    /// Attach a `LoggingInterceptor` to the transport
    pub enable_logging: bool,
    pub logging: LoggingOptions,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport: None,
            cache: CacheOptionsOverride::default(),
            enable_logging: false,
            logging: LoggingOptions::default(),
        }
    }
}

impl ClientOptions {
    /// Build options from a loaded configuration file
    pub fn from_config(config: &Config) -> Result<Self> {
        let methods = config
            .cache
            .methods
            .iter()
            .map(|name| {
                Method::from_bytes(name.trim().to_ascii_uppercase().as_bytes())
                    .map_err(|_| JikanError::Config(format!("invalid cache method '{name}'")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            base_url: config.client.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.client.user_agent.clone(),
            transport: None,
            cache: CacheOptionsOverride::new()
                .ttl(config.cache_ttl())
                .methods(methods)
                .cache_takeover(config.cache.cache_takeover),
            enable_logging: config.logging.enable_http_logging,
            logging: LoggingOptions::from(&config.logging),
        })
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_cache(mut self, cache: CacheOptionsOverride) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_logging(mut self, logging: LoggingOptions) -> Self {
        self.enable_logging = true;
        self.logging = logging;
        self
    }

    /// Build the cache-aware transport these options describe
    ///
    /// An adopted cache-aware transport is returned untouched: neither the
    /// cache overrides nor the logging interceptor are applied to it.
    pub fn build_transport(self) -> Result<CachedTransport> {
        let upstream: Arc<dyn Transport> = match self.transport {
            Some(TransportConfig::CacheAware(existing)) => {
                if self.enable_logging {
                    debug!("Transport is already cache-aware, not attaching HTTP logging");
                }
                return Ok(CachedTransport::create_or_adopt(
                    TransportConfig::CacheAware(existing),
                    self.cache,
                ));
            }
            Some(TransportConfig::Plain(upstream)) => upstream,
            None => Arc::new(HttpTransport::new(
                self.base_url,
                self.timeout,
                &self.user_agent,
            )?),
        };

        let cached = CachedTransport::create_or_adopt(TransportConfig::Plain(upstream), self.cache);
        if self.enable_logging {
            cached.attach(Arc::new(LoggingInterceptor::new(self.logging)));
            debug!("HTTP logging enabled");
        }
        Ok(cached)
    }
}

/// Entry point bundling every resource facade over one shared cache
///
/// A response fetched through any facade is served from the cache to every
/// other facade of the same client.
#[derive(Debug, Clone)]
pub struct JikanClient {
    pub anime: AnimeClient,
    pub manga: MangaClient,
    pub characters: CharactersClient,
    pub clubs: ClubsClient,
    pub genres: GenresClient,
    pub magazines: MagazinesClient,
    pub people: PeopleClient,
    pub producers: ProducersClient,
    pub random: RandomClient,
    pub recommendations: RecommendationsClient,
    pub reviews: ReviewsClient,
    pub schedules: SchedulesClient,
    pub seasons: SeasonsClient,
    pub top: TopClient,
    pub users: UsersClient,
    pub watch: WatchClient,
    transport: CachedTransport,
}

impl JikanClient {
    /// Create a client and its shared cache
    pub fn new(options: ClientOptions) -> Result<Self> {
        let transport = options.build_transport()?;
        info!(ttl_secs = transport.options().ttl.as_secs(), "Jikan client initialized");

        Ok(Self {
            anime: AnimeClient::with_transport(transport.clone()),
            manga: MangaClient::with_transport(transport.clone()),
            characters: CharactersClient::with_transport(transport.clone()),
            clubs: ClubsClient::with_transport(transport.clone()),
            genres: GenresClient::with_transport(transport.clone()),
            magazines: MagazinesClient::with_transport(transport.clone()),
            people: PeopleClient::with_transport(transport.clone()),
            producers: ProducersClient::with_transport(transport.clone()),
            random: RandomClient::with_transport(transport.clone()),
            recommendations: RecommendationsClient::with_transport(transport.clone()),
            reviews: ReviewsClient::with_transport(transport.clone()),
            schedules: SchedulesClient::with_transport(transport.clone()),
            seasons: SeasonsClient::with_transport(transport.clone()),
            top: TopClient::with_transport(transport.clone()),
            users: UsersClient::with_transport(transport.clone()),
            watch: WatchClient::with_transport(transport.clone()),
            transport,
        })
    }

    /// Create a client from a loaded configuration file
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(ClientOptions::from_config(config)?)
    }

    /// The shared cache-aware transport, for attaching interceptors
    pub fn transport(&self) -> &CachedTransport {
        &self.transport
    }

    /// Drop every cached response
    pub async fn clear_cache(&self) {
        self.transport.clear_all().await;
    }

    /// Drop one cached response, e.g. `GET /anime/1` or `/anime/1`
    pub async fn clear_cache_entry(&self, key: &str) {
        self.transport.clear_one(key).await;
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.transport.stats()
    }
}
