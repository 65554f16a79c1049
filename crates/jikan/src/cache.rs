//! Shared response cache for API calls.
//!
//! `CachedTransport` wraps any `Transport` and keeps successful responses in
//! a `CacheStorage` for a fixed TTL. All facades built by one `JikanClient`
//! hold clones of the same `CachedTransport`, so a response fetched through
//! one facade is served from memory to every other facade asking for the
//! same method, path and query.
//!
//! Entry lifecycle: absent -> fresh (stored after a 2xx response) -> stale
//! (TTL elapsed, treated as absent) -> absent (evicted or cleared). Error
//! responses are never stored.
//!
//! Concurrent identical requests are coalesced: while one caller fetches a
//! key, later callers for that key wait and are then served the stored
//! entry. If the fetch fails or its caller goes away, the next waiter
//! fetches on its own.

use crate::api::transport::{Method, RawResponse, Request, Transport};
use crate::error::JikanError;
use crate::interceptor::{Interceptor, InterceptorId};
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tokio::time::Instant;
use tracing::{debug, info};

/// Default cache TTL: 24 hours
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Derives the cache key of a request
pub type KeyGenerator = Arc<dyn Fn(&Request) -> String + Send + Sync>;

/// One stored response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Wall-clock time the entry was stored
    pub stored_at: DateTime<Utc>,
    /// `None` when the TTL is too large to represent
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    fn from_response(response: &RawResponse, ttl: Duration) -> Self {
        Self {
            status: response.status,
            headers: response.headers.clone(),
            body: response.body.clone(),
            stored_at: Utc::now(),
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    pub fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |deadline| now < deadline)
    }

    fn to_response(&self) -> RawResponse {
        RawResponse {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
            cached: true,
        }
    }
}

/// Backing store for cache entries
///
/// `remove`, `clear` and `keys` are optional capabilities; the defaults do
/// nothing.
pub trait CacheStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Insert or replace the entry for `key`
    fn insert(&self, key: String, entry: CacheEntry);

    fn remove(&self, _key: &str) {}

    fn clear(&self) {}

    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}

/// In-memory storage, one mutex around the whole map
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.lock().get(key).cloned()
    }

    fn insert(&self, key: String, entry: CacheEntry) {
        self.entries.lock().insert(key, entry);
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }

    fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }
}

/// Default key: `METHOD path[?sorted query]`
pub fn default_cache_key(request: &Request) -> String {
    format!("{} {}", request.method, request.url())
}

/// Effective cache settings of a `CachedTransport`
#[derive(Clone)]
pub struct CacheOptions {
    pub ttl: Duration,
    /// Methods whose responses are cached
    pub methods: Vec<Method>,
    /// Send no-cache headers so intermediaries don't cache on our behalf
    pub cache_takeover: bool,
    pub storage: Arc<dyn CacheStorage>,
    /// `None` uses `default_cache_key`
    pub key_generator: Option<KeyGenerator>,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
            methods: vec![Method::GET],
            cache_takeover: false,
            storage: Arc::new(MemoryStorage::new()),
            key_generator: None,
        }
    }
}

impl fmt::Debug for CacheOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheOptions")
            .field("ttl", &self.ttl)
            .field("methods", &self.methods)
            .field("cache_takeover", &self.cache_takeover)
            .field("custom_key_generator", &self.key_generator.is_some())
            .finish_non_exhaustive()
    }
}

/// Caller overrides, merged over the library defaults
#[derive(Clone, Default)]
pub struct CacheOptionsOverride {
    pub ttl: Option<Duration>,
    pub methods: Option<Vec<Method>>,
    pub cache_takeover: Option<bool>,
    pub storage: Option<Arc<dyn CacheStorage>>,
    pub key_generator: Option<KeyGenerator>,
}

impl CacheOptionsOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = Some(methods);
        self
    }

    pub fn cache_takeover(mut self, enabled: bool) -> Self {
        self.cache_takeover = Some(enabled);
        self
    }

    pub fn storage(mut self, storage: Arc<dyn CacheStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn key_generator(
        mut self,
        generator: impl Fn(&Request) -> String + Send + Sync + 'static,
    ) -> Self {
        self.key_generator = Some(Arc::new(generator));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ttl.is_none()
            && self.methods.is_none()
            && self.cache_takeover.is_none()
            && self.storage.is_none()
            && self.key_generator.is_none()
    }

    /// Apply these overrides on top of `base`
    pub fn merge_onto(self, base: CacheOptions) -> CacheOptions {
        CacheOptions {
            ttl: self.ttl.unwrap_or(base.ttl),
            methods: self.methods.unwrap_or(base.methods),
            cache_takeover: self.cache_takeover.unwrap_or(base.cache_takeover),
            storage: self.storage.unwrap_or(base.storage),
            key_generator: self.key_generator.or(base.key_generator),
        }
    }
}

impl fmt::Debug for CacheOptionsOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheOptionsOverride")
            .field("ttl", &self.ttl)
            .field("methods", &self.methods)
            .field("cache_takeover", &self.cache_takeover)
            .field("storage", &self.storage.is_some())
            .field("key_generator", &self.key_generator.is_some())
            .finish()
    }
}

/// Transport handed to `CachedTransport::create_or_adopt`
#[derive(Clone)]
pub enum TransportConfig {
    /// A transport with no caching; it gets wrapped
    Plain(Arc<dyn Transport>),
    /// An existing cache-aware transport; used as-is
    CacheAware(CachedTransport),
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportConfig::Plain(_) => f.write_str("TransportConfig::Plain"),
            TransportConfig::CacheAware(t) => f
                .debug_tuple("TransportConfig::CacheAware")
                .field(t)
                .finish(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh: usize,
    pub stale: usize,
}

type Gate = Arc<AsyncMutex<()>>;

struct Inner {
    upstream: Arc<dyn Transport>,
    options: CacheOptions,
    in_flight: Mutex<HashMap<String, Gate>>,
    interceptors: RwLock<Vec<(InterceptorId, Arc<dyn Interceptor>)>>,
    next_interceptor_id: AtomicU64,
}

/// Cache-aware transport; clones share one cache
#[derive(Clone)]
pub struct CachedTransport {
    inner: Arc<Inner>,
}

impl CachedTransport {
    /// Wrap `upstream` with the given cache settings
    pub fn new(upstream: Arc<dyn Transport>, options: CacheOptions) -> Self {
        debug!(
            ttl_secs = options.ttl.as_secs(),
            methods = ?options.methods,
            cache_takeover = options.cache_takeover,
            "Response cache initialized"
        );

        Self {
            inner: Arc::new(Inner {
                upstream,
                options,
                in_flight: Mutex::new(HashMap::new()),
                interceptors: RwLock::new(Vec::new()),
                next_interceptor_id: AtomicU64::new(0),
            }),
        }
    }

    /// Return a cache-aware transport for `transport`
    ///
    /// A `CacheAware` transport comes back unchanged and `overrides` are
    /// ignored; a `Plain` one is wrapped with `overrides` merged over the
    /// defaults.
    pub fn create_or_adopt(transport: TransportConfig, overrides: CacheOptionsOverride) -> Self {
        match transport {
            TransportConfig::CacheAware(existing) => {
                if !overrides.is_empty() {
                    debug!("Transport is already cache-aware, ignoring cache options");
                }
                existing
            }
            TransportConfig::Plain(upstream) => {
                Self::new(upstream, overrides.merge_onto(CacheOptions::default()))
            }
        }
    }

    pub fn options(&self) -> &CacheOptions {
        &self.inner.options
    }

    /// The wrapped transport
    pub fn upstream(&self) -> &Arc<dyn Transport> {
        &self.inner.upstream
    }

    /// Whether both handles share one cache
    pub fn ptr_eq(&self, other: &CachedTransport) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Cache key this transport uses for `request`
    pub fn cache_key(&self, request: &Request) -> String {
        match &self.inner.options.key_generator {
            Some(generator) => generator(request),
            None => default_cache_key(request),
        }
    }

    /// Drop every cached response
    pub async fn clear_all(&self) {
        self.inner.options.storage.clear();
        info!("Cache cleared");
    }

    /// Drop the cached response stored under `key`
    ///
    /// With the default key format a bare path such as `/anime/1` is taken
    /// to mean `GET /anime/1`.
    pub async fn clear_one(&self, key: &str) {
        let key = self.normalize_key(key);
        self.inner.options.storage.remove(&key);
        debug!(key = %key, "Cache entry removed");
    }

    /// Whether a fresh entry exists for `key`
    pub fn contains(&self, key: &str) -> bool {
        let key = self.normalize_key(key);
        self.inner
            .options
            .storage
            .get(&key)
            .is_some_and(|entry| entry.is_fresh(Instant::now()))
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let storage = &self.inner.options.storage;
        let now = Instant::now();

        storage
            .keys()
            .iter()
            .filter_map(|key| storage.get(key))
            .fold(CacheStats::default(), |mut stats, entry| {
                stats.entries += 1;
                if entry.is_fresh(now) {
                    stats.fresh += 1;
                } else {
                    stats.stale += 1;
                }
                stats
            })
    }

    /// Attach an interceptor; it runs after the ones already attached
    pub fn attach(&self, interceptor: Arc<dyn Interceptor>) -> InterceptorId {
        let id = InterceptorId(self.inner.next_interceptor_id.fetch_add(1, Ordering::Relaxed));
        self.inner.interceptors.write().push((id, interceptor));
        id
    }

    /// Detach an interceptor; returns whether it was attached
    pub fn detach(&self, id: InterceptorId) -> bool {
        let mut interceptors = self.inner.interceptors.write();
        let before = interceptors.len();
        interceptors.retain(|(existing, _)| *existing != id);
        interceptors.len() != before
    }

    pub fn interceptor_count(&self) -> usize {
        self.inner.interceptors.read().len()
    }

    fn normalize_key(&self, key: &str) -> String {
        if self.inner.options.key_generator.is_none() && key.starts_with('/') {
            format!("{} {}", Method::GET, key)
        } else {
            key.to_string()
        }
    }

    fn is_cacheable(&self, method: &Method) -> bool {
        self.inner.options.methods.contains(method)
    }

    /// Fresh entry for `key`, if any; stale entries read as absent
    fn lookup(&self, key: &str) -> Option<RawResponse> {
        let entry = self.inner.options.storage.get(key)?;

        if entry.is_fresh(Instant::now()) {
            debug!(key = %key, "Cache hit");
            Some(entry.to_response())
        } else {
            debug!(key = %key, stored_at = %entry.stored_at, "Cache entry stale");
            None
        }
    }

    /// Drop a stale entry for `key`
    ///
    /// Entries are only stored while the key's gate is held, so taking the
    /// gate here keeps a concurrent fetch's fresh entry from being removed.
    fn evict_stale(&self, key: &str, _gate: &InFlight<'_>) {
        let storage = &self.inner.options.storage;
        let stale = storage
            .get(key)
            .is_some_and(|entry| !entry.is_fresh(Instant::now()));
        if stale {
            storage.remove(key);
            debug!(key = %key, "Stale cache entry evicted");
        }
    }

    fn store(&self, key: String, response: &RawResponse) {
        let entry = CacheEntry::from_response(response, self.inner.options.ttl);
        debug!(key = %key, "Cache stored");
        self.inner.options.storage.insert(key, entry);
    }

    async fn network(&self, request: &Request) -> Result<RawResponse> {
        if self.inner.options.cache_takeover {
            let request = request
                .clone()
                .with_header("Cache-Control", "no-cache")
                .with_header("Pragma", "no-cache")
                .with_header("Expires", "0");
            self.inner.upstream.send(&request).await
        } else {
            self.inner.upstream.send(request).await
        }
    }

    async fn fetch(&self, request: &Request) -> Result<RawResponse> {
        if !self.is_cacheable(&request.method) {
            return self.network(request).await;
        }

        let key = self.cache_key(request);
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }

        let in_flight = self.acquire(&key).await;

        // Filled by the caller we waited on
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }
        self.evict_stale(&key, &in_flight);

        debug!(key = %key, "Cache miss");
        let response = self.network(request).await?;
        if response.is_success() {
            self.store(key, &response);
        }
        Ok(response)
    }

    async fn acquire(&self, key: &str) -> InFlight<'_> {
        let gate = self
            .inner
            .in_flight
            .lock()
            .entry(key.to_string())
            .or_default()
            .clone();
        let permit = gate.clone().lock_owned().await;

        InFlight {
            key: key.to_string(),
            gates: &self.inner.in_flight,
            gate,
            permit: Some(permit),
        }
    }

    fn interceptors(&self) -> Vec<Arc<dyn Interceptor>> {
        self.inner
            .interceptors
            .read()
            .iter()
            .map(|(_, interceptor)| interceptor.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for CachedTransport {
    /// Serve from cache or network; non-2xx responses become `UpstreamHttp`
    async fn send(&self, request: &Request) -> Result<RawResponse> {
        let interceptors = self.interceptors();
        let mut request = request.clone();
        for interceptor in &interceptors {
            interceptor.on_request(&mut request);
        }

        let result = self.fetch(&request).await.and_then(|response| {
            if response.is_success() {
                Ok(response)
            } else {
                Err(JikanError::upstream(response.status, response.body))
            }
        });

        for interceptor in &interceptors {
            match &result {
                Ok(response) => interceptor.on_response(&request, response),
                Err(e) => interceptor.on_error(&request, e),
            }
        }
        result
    }
}

impl fmt::Debug for CachedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedTransport")
            .field("options", &self.inner.options)
            .field("interceptors", &self.interceptor_count())
            .finish_non_exhaustive()
    }
}

/// Per-key fetch permit; the gate is dropped from the map once unused
struct InFlight<'a> {
    key: String,
    gates: &'a Mutex<HashMap<String, Gate>>,
    gate: Gate,
    permit: Option<OwnedMutexGuard<()>>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.permit.take();
        let mut gates = self.gates.lock();
        // Only the map and this handle remain: nobody is waiting
        if Arc::strong_count(&self.gate) == 2 {
            gates.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::QueryParams;
    use std::sync::atomic::AtomicUsize;

    /// Answers every request from a fixed table and counts network calls
    struct StubTransport {
        calls: AtomicUsize,
        delay: Duration,
        seen: Mutex<Vec<Request>>,
    }

    impl StubTransport {
        fn new() -> Arc<Self> {
            Self::with_delay(Duration::ZERO)
        }

        fn with_delay(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                delay,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: &Request) -> Result<RawResponse> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            self.seen.lock().push(request.clone());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            if request.path == "/anime/999999999" {
                return Ok(RawResponse::new(
                    404,
                    r#"{"status":404,"type":"BadResponseException","message":"Resource does not exist","error":"404"}"#,
                ));
            }
            Ok(RawResponse::new(
                200,
                format!(r#"{{"data":{{"path":"{}","call":{}}}}}"#, request.path, n),
            ))
        }
    }

    fn cached(stub: &Arc<StubTransport>, overrides: CacheOptionsOverride) -> CachedTransport {
        CachedTransport::create_or_adopt(TransportConfig::Plain(stub.clone()), overrides)
    }

    fn get(path: &str) -> Request {
        Request::get(path, QueryParams::new())
    }

    #[test]
    fn test_default_options() {
        let options = CacheOptions::default();
        assert_eq!(options.ttl, Duration::from_secs(86_400));
        assert_eq!(options.methods, vec![Method::GET]);
        assert!(!options.cache_takeover);
        assert!(options.key_generator.is_none());
    }

    #[test]
    fn test_overrides_merge_over_defaults() {
        let options = CacheOptionsOverride::new()
            .ttl(Duration::from_secs(60))
            .merge_onto(CacheOptions::default());
        assert_eq!(options.ttl, Duration::from_secs(60));
        assert_eq!(options.methods, vec![Method::GET]);
        assert!(!options.cache_takeover);
    }

    #[test]
    fn test_default_cache_key() {
        let request = Request::get("/anime", QueryParams::new().set("q", "bebop").set("limit", 3));
        assert_eq!(default_cache_key(&request), "GET /anime?limit=3&q=bebop");
    }

    #[tokio::test]
    async fn test_second_call_is_cache_hit() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new());

        let first = transport.send(&get("/anime/1")).await.unwrap();
        let second = transport.send(&get("/anime/1")).await.unwrap();

        assert_eq!(stub.calls(), 1);
        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(first.body, second.body);
        assert_eq!(transport.stats().entries, 1);
    }

    #[tokio::test]
    async fn test_query_is_part_of_the_key() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new());

        transport
            .send(&Request::get("/anime/1/episodes", QueryParams::new().set("page", 1)))
            .await
            .unwrap();
        transport
            .send(&Request::get("/anime/1/episodes", QueryParams::new().set("page", 2)))
            .await
            .unwrap();

        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new());

        let err = transport.send(&get("/anime/999999999")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(!transport.contains("/anime/999999999"));

        let err = transport.send(&get("/anime/999999999")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(stub.calls(), 2);
        assert_eq!(transport.stats().entries, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_is_refetched() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new().ttl(Duration::from_secs(60)));

        transport.send(&get("/anime/1")).await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;
        transport.send(&get("/anime/1")).await.unwrap();
        assert_eq!(stub.calls(), 1);

        tokio::time::advance(Duration::from_secs(31)).await;
        assert_eq!(transport.stats().stale, 1);
        let refreshed = transport.send(&get("/anime/1")).await.unwrap();
        assert!(!refreshed.cached);
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_read_keeps_entry_stored_by_concurrent_fetch() {
        /// Stores `pending` right after handing out a stale entry, the way
        /// another caller's fetch can complete between a read and the gate
        struct RacingStorage {
            inner: MemoryStorage,
            pending: Mutex<Option<CacheEntry>>,
        }

        impl CacheStorage for RacingStorage {
            fn get(&self, key: &str) -> Option<CacheEntry> {
                let found = self.inner.get(key);
                if found.as_ref().is_some_and(|e| !e.is_fresh(Instant::now())) {
                    if let Some(fresh) = self.pending.lock().take() {
                        self.inner.insert(key.to_string(), fresh);
                    }
                }
                found
            }
            fn insert(&self, key: String, entry: CacheEntry) {
                self.inner.insert(key, entry);
            }
            fn remove(&self, key: &str) {
                self.inner.remove(key);
            }
            fn clear(&self) {
                self.inner.clear();
            }
            fn keys(&self) -> Vec<String> {
                self.inner.keys()
            }
        }

        let ttl = Duration::from_secs(60);
        let storage = Arc::new(RacingStorage {
            inner: MemoryStorage::new(),
            pending: Mutex::new(None),
        });
        let stub = StubTransport::new();
        let transport = cached(
            &stub,
            CacheOptionsOverride::new().ttl(ttl).storage(storage.clone()),
        );

        transport.send(&get("/anime/1")).await.unwrap();
        tokio::time::advance(ttl + Duration::from_secs(1)).await;

        let fresh =
            CacheEntry::from_response(&RawResponse::new(200, r#"{"data":"refreshed"}"#), ttl);
        *storage.pending.lock() = Some(fresh.clone());

        let response = transport.send(&get("/anime/1")).await.unwrap();
        assert!(response.cached);
        assert_eq!(response.body, r#"{"data":"refreshed"}"#);
        assert_eq!(stub.calls(), 1);
        assert_eq!(storage.get("GET /anime/1"), Some(fresh));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_evicted_when_refetch_fails() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new().ttl(Duration::from_secs(60)));
        let key = transport.cache_key(&get("/anime/999999999"));
        transport.inner.options.storage.insert(
            key.clone(),
            CacheEntry::from_response(&RawResponse::new(200, "{}"), Duration::from_secs(1)),
        );
        tokio::time::advance(Duration::from_secs(2)).await;

        transport.send(&get("/anime/999999999")).await.unwrap_err();
        assert!(transport.inner.options.storage.get(&key).is_none());
    }

    #[tokio::test]
    async fn test_clear_one_forces_refetch() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new());

        transport.send(&get("/anime/1")).await.unwrap();
        transport.send(&get("/manga/1")).await.unwrap();
        assert!(transport.contains("/anime/1"));

        transport.clear_one("/anime/1").await;
        assert!(!transport.contains("GET /anime/1"));
        assert!(transport.contains("GET /manga/1"));

        transport.send(&get("/anime/1")).await.unwrap();
        transport.send(&get("/manga/1")).await.unwrap();
        assert_eq!(stub.calls(), 3);
    }

    #[tokio::test]
    async fn test_clear_one_absent_key_is_noop() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new());
        transport.clear_one("/never/fetched").await;
        transport.clear_all().await;
        assert_eq!(transport.stats(), CacheStats::default());
    }

    #[tokio::test]
    async fn test_clear_all_forces_refetch() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new());

        transport.send(&get("/anime/1")).await.unwrap();
        transport.clear_all().await;
        let response = transport.send(&get("/anime/1")).await.unwrap();

        assert!(!response.cached);
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test]
    async fn test_storage_without_clear_capability() {
        /// Storage that supports only get/insert
        #[derive(Default)]
        struct AppendOnly(Mutex<HashMap<String, CacheEntry>>);

        impl CacheStorage for AppendOnly {
            fn get(&self, key: &str) -> Option<CacheEntry> {
                self.0.lock().get(key).cloned()
            }
            fn insert(&self, key: String, entry: CacheEntry) {
                self.0.lock().insert(key, entry);
            }
        }

        let stub = StubTransport::new();
        let transport = cached(
            &stub,
            CacheOptionsOverride::new().storage(Arc::new(AppendOnly::default())),
        );

        transport.send(&get("/anime/1")).await.unwrap();
        transport.clear_all().await;
        transport.clear_one("/anime/1").await;

        // Nothing was removed, so this is still a hit
        assert!(transport.send(&get("/anime/1")).await.unwrap().cached);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_uncacheable_method_passes_through() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new().methods(vec![Method::HEAD]));

        transport.send(&get("/anime/1")).await.unwrap();
        transport.send(&get("/anime/1")).await.unwrap();
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test]
    async fn test_custom_key_generator() {
        let stub = StubTransport::new();
        let transport = cached(
            &stub,
            CacheOptionsOverride::new().key_generator(|request: &Request| request.path.clone()),
        );

        transport
            .send(&Request::get("/top/anime", QueryParams::new().set("page", 1)))
            .await
            .unwrap();
        // Query is ignored by this generator
        let response = transport
            .send(&Request::get("/top/anime", QueryParams::new().set("page", 2)))
            .await
            .unwrap();

        assert!(response.cached);
        assert!(transport.contains("/top/anime"));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_cache_takeover_headers() {
        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new().cache_takeover(true));
        transport.send(&get("/anime/1")).await.unwrap();

        let seen = stub.seen.lock();
        let headers = &seen[0].headers;
        assert!(headers.contains(&("Cache-Control".to_string(), "no-cache".to_string())));
        assert!(headers.contains(&("Pragma".to_string(), "no-cache".to_string())));
        assert!(headers.contains(&("Expires".to_string(), "0".to_string())));
    }

    #[tokio::test]
    async fn test_adopt_returns_same_instance_and_ignores_options() {
        let stub = StubTransport::new();
        let existing = cached(&stub, CacheOptionsOverride::new().ttl(Duration::from_secs(5)));

        let adopted = CachedTransport::create_or_adopt(
            TransportConfig::CacheAware(existing.clone()),
            CacheOptionsOverride::new().ttl(Duration::from_secs(999)),
        );

        assert!(adopted.ptr_eq(&existing));
        assert_eq!(adopted.options().ttl, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_concurrent_identical_requests_are_coalesced() {
        let stub = StubTransport::with_delay(Duration::from_millis(50));
        let transport = cached(&stub, CacheOptionsOverride::new());

        let request = get("/anime/1");
        let results =
            futures::future::join_all((0..5).map(|_| transport.send(&request))).await;

        assert_eq!(stub.calls(), 1);
        let bodies: Vec<String> = results.into_iter().map(|r| r.unwrap().body).collect();
        assert!(bodies.iter().all(|body| body == &bodies[0]));
        assert!(transport.inner.in_flight.lock().is_empty());
    }

    #[tokio::test]
    async fn test_waiter_refetches_after_failed_leader() {
        let stub = StubTransport::with_delay(Duration::from_millis(20));
        let transport = cached(&stub, CacheOptionsOverride::new());

        let request = get("/anime/999999999");
        let (a, b) = tokio::join!(transport.send(&request), transport.send(&request));

        assert!(a.is_err());
        assert!(b.is_err());
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_fetch_leaves_cache_empty() {
        let stub = StubTransport::with_delay(Duration::from_millis(200));
        let transport = cached(&stub, CacheOptionsOverride::new());

        let request = get("/anime/1");
        let aborted =
            tokio::time::timeout(Duration::from_millis(10), transport.send(&request)).await;
        assert!(aborted.is_err());
        assert!(!transport.contains("/anime/1"));
        assert!(transport.inner.in_flight.lock().is_empty());

        transport.send(&request).await.unwrap();
        assert!(transport.contains("/anime/1"));
    }

    #[tokio::test]
    async fn test_interceptors_see_cached_responses() {
        #[derive(Default)]
        struct Recorder {
            responses: Mutex<Vec<bool>>,
            errors: AtomicUsize,
        }

        impl Interceptor for Recorder {
            fn on_request(&self, request: &mut Request) {
                request.headers.push(("X-Trace".to_string(), "1".to_string()));
            }
            fn on_response(&self, _request: &Request, response: &RawResponse) {
                self.responses.lock().push(response.cached);
            }
            fn on_error(&self, _request: &Request, _error: &JikanError) {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
        }

        let stub = StubTransport::new();
        let transport = cached(&stub, CacheOptionsOverride::new());
        let recorder = Arc::new(Recorder::default());
        let id = transport.attach(recorder.clone());

        transport.send(&get("/anime/1")).await.unwrap();
        transport.send(&get("/anime/1")).await.unwrap();
        let _ = transport.send(&get("/anime/999999999")).await;

        assert_eq!(*recorder.responses.lock(), vec![false, true]);
        assert_eq!(recorder.errors.load(Ordering::SeqCst), 1);
        assert!(stub.seen.lock()[0]
            .headers
            .contains(&("X-Trace".to_string(), "1".to_string())));

        assert!(transport.detach(id));
        assert!(!transport.detach(id));
        transport.send(&get("/anime/1")).await.unwrap();
        assert_eq!(recorder.responses.lock().len(), 2);
    }
}
