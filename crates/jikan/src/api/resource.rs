//! Request executor and response unwrapper shared by every facade.

use super::client::ClientOptions;
use super::path::{resolve, PathParams};
use super::query::QueryParams;
use super::transport::{RawResponse, Request, Transport};
use super::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::error::JikanError;
use crate::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Executes endpoint calls through a cache-aware transport
#[derive(Debug, Clone)]
pub struct ResourceClient {
    transport: CachedTransport,
}

impl ResourceClient {
    /// Create a client with its own private cache
    pub fn new(options: ClientOptions) -> Result<Self> {
        Ok(Self::with_transport(options.build_transport()?))
    }

    /// Create a client on an existing, possibly shared, transport
    pub fn with_transport(transport: CachedTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &CachedTransport {
        &self.transport
    }

    /// Resolve `template` and issue a GET for it
    ///
    /// Non-2xx responses come back as `JikanError::UpstreamHttp`.
    pub async fn execute(
        &self,
        template: &str,
        params: &PathParams,
        query: QueryParams,
    ) -> Result<RawResponse> {
        let path = resolve(template, params)?;
        let request = Request::get(path, query);
        debug!(template = template, url = %request.url(), "Executing request");

        self.transport.send(&request).await
    }

    /// Execute and unwrap a `{data}` envelope
    pub async fn get_resource<T: DeserializeOwned>(
        &self,
        template: &str,
        params: &PathParams,
        query: QueryParams,
    ) -> Result<JikanResponse<T>> {
        let response = self.execute(template, params, query).await?;
        unwrap(&response)
    }

    /// Execute and unwrap a `{data, pagination}` envelope
    pub async fn get_resource_with_pagination<T: DeserializeOwned>(
        &self,
        template: &str,
        params: &PathParams,
        query: QueryParams,
    ) -> Result<JikanPaginatedResponse<T>> {
        let response = self.execute(template, params, query).await?;
        unwrap_paginated(&response)
    }
}

/// Decode a `{data}` envelope
pub fn unwrap<T: DeserializeOwned>(response: &RawResponse) -> Result<JikanResponse<T>> {
    decode(&response.body)
}

/// Decode a `{data, pagination}` envelope; pagination is passed through as sent
pub fn unwrap_paginated<T: DeserializeOwned>(
    response: &RawResponse,
) -> Result<JikanPaginatedResponse<T>> {
    decode(&response.body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| JikanError::Decode {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
