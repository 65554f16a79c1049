//! Request/response interceptors attached to a cache-aware transport.
//!
//! Interceptors see every call made through the transport, including calls
//! answered from the cache.

use crate::api::transport::{RawResponse, Request};
use crate::error::JikanError;
use shared::config::{LoggingConfig, DEFAULT_MAX_RESPONSE_DATA_LENGTH};
use tracing::{debug, error, info};

/// Hooks run around every request
pub trait Interceptor: Send + Sync {
    /// Runs before the cache lookup; may modify the request
    fn on_request(&self, _request: &mut Request) {}

    /// Runs after a successful response, cached or not
    fn on_response(&self, _request: &Request, _response: &RawResponse) {}

    /// Runs after a failed request
    fn on_error(&self, _request: &Request, _error: &JikanError) {}
}

/// Handle returned by `CachedTransport::attach`, used to detach again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptorId(pub(crate) u64);

/// What the logging interceptor writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Log response bodies at debug level
    pub log_response_data: bool,
    /// Maximum characters of a logged body
    pub max_response_data_length: usize,
    /// Log request and response headers at debug level
    pub include_headers: bool,
    /// Log query parameters at debug level
    pub log_request_params: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            log_response_data: false,
            max_response_data_length: DEFAULT_MAX_RESPONSE_DATA_LENGTH,
            include_headers: false,
            log_request_params: false,
        }
    }
}

impl From<&LoggingConfig> for LoggingOptions {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            log_response_data: config.log_response_data,
            max_response_data_length: config.max_response_data_length,
            include_headers: config.include_headers,
            log_request_params: config.log_request_params,
        }
    }
}

/// Logs requests, responses and failures through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingInterceptor {
    options: LoggingOptions,
}

impl LoggingInterceptor {
    pub fn new(options: LoggingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoggingOptions {
        &self.options
    }
}

impl Interceptor for LoggingInterceptor {
    fn on_request(&self, request: &mut Request) {
        info!("Request: {} | {}", request.method, request.path);

        if self.options.log_request_params && !request.query.is_empty() {
            debug!(
                path = %request.path,
                params = %truncate_for_log(&request.query.to_query_string(), self.options.max_response_data_length),
                "Jikan request params"
            );
        }
        if self.options.include_headers {
            debug!(path = %request.path, headers = ?request.headers, "Jikan request headers");
        }
    }

    fn on_response(&self, request: &Request, response: &RawResponse) {
        let source = if response.cached { " (cached)" } else { "" };
        info!("Response: {} | {}{}", response.status, request.path, source);

        if self.options.log_response_data {
            debug!(
                path = %request.path,
                body = %truncate_for_log(&response.body, self.options.max_response_data_length),
                "Jikan response body"
            );
        }
        if self.options.include_headers {
            debug!(path = %request.path, headers = ?response.headers, "Jikan response headers");
        }
    }

    fn on_error(&self, request: &Request, err: &JikanError) {
        match err.status() {
            Some(status) => error!("Error: {} | {} | {}", status, request.path, err),
            None => error!("Error: {} | {}", request.path, err),
        }
    }
}

/// Cut `text` to `max_len` characters, noting how much was dropped
pub fn truncate_for_log(text: &str, max_len: usize) -> String {
    let total = text.chars().count();
    if total <= max_len {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_len).collect();
    format!("{}... (truncated {} chars)", kept, total - max_len)
}
