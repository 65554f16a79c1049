//! HTTP transport seam.
//!
//! A `Transport` turns a `Request` into a `RawResponse` for any status code.
//! `HttpTransport` is the network implementation; the cache layer wraps any
//! transport behind the same trait.

use super::query::QueryParams;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub use reqwest::Method;

/// A request for a resolved path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Resolved path relative to the base address
    pub path: String,
    pub query: QueryParams,
    /// Extra headers for this request only
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn get(path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Path plus encoded query string
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }
}

/// A settled response, successful or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Served from the response cache rather than the network
    pub cached: bool,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
            cached: false,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Something that can carry a request to the API
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &Request) -> Result<RawResponse>;
}

/// Network transport backed by `reqwest`
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with JSON content type, timeout and user agent
    pub fn new(base_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wrap a pre-built `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, url = %url, "Making API request");

        let mut builder = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            let pairs: Vec<(&str, &str)> = request.query.iter().collect();
            builder = builder.query(&pairs);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().await?;

        debug!(url = %url, status = status, "Request settled");
        Ok(RawResponse {
            status,
            headers,
            body,
            cached: false,
        })
    }
}
