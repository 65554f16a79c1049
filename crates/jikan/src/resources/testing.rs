//! Canned-response transport for facade tests.

use crate::api::transport::{RawResponse, Request, Transport};
use crate::cache::{default_cache_key, CacheOptionsOverride, CachedTransport, TransportConfig};
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Answers `METHOD url` keys from a fixed table, 404 for anything else
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, key: &str, body: &str) -> Self {
        self.routes.insert(key.to_string(), body.to_string());
        self
    }

    /// Wrap in a fresh cache-aware transport
    pub fn cached(self) -> CachedTransport {
        self.into_shared().1
    }

    /// Wrap, keeping a handle for counting calls
    pub fn into_shared(self) -> (Arc<MockTransport>, CachedTransport) {
        let mock = Arc::new(self);
        let cached = CachedTransport::create_or_adopt(
            TransportConfig::Plain(mock.clone()),
            CacheOptionsOverride::new(),
        );
        (mock, cached)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &Request) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.routes.get(&default_cache_key(request)) {
            Some(body) => Ok(RawResponse::new(200, body.clone())),
            None => Ok(RawResponse::new(
                404,
                r#"{"status":404,"type":"BadResponseException","message":"Resource does not exist","error":"404"}"#,
            )),
        }
    }
}

/// Wrap `data` in a single-page pagination envelope
pub fn paginated(data: &str) -> String {
    format!(r#"{{"data":{data},"pagination":{{"last_visible_page":1,"has_next_page":false}}}}"#)
}
