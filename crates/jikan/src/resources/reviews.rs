//! Recent reviews facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::reviews;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanPaginatedResponse;
use crate::cache::CachedTransport;
use crate::models::params::ReviewParams;
use crate::Result;
use serde_json::Value;

/// `/reviews` endpoints
#[derive(Debug, Clone)]
pub struct ReviewsClient {
    client: ResourceClient,
}

impl ReviewsClient {
    /// Standalone facade with a private cache
    pub fn new(options: ClientOptions) -> Result<Self> {
        Ok(Self {
            client: ResourceClient::new(options)?,
        })
    }

    pub fn with_transport(transport: CachedTransport) -> Self {
        Self {
            client: ResourceClient::with_transport(transport),
        }
    }

    pub fn transport(&self) -> &CachedTransport {
        self.client.transport()
    }

    pub async fn get_recent_anime_reviews(
        &self,
        params: &ReviewParams,
    ) -> Result<JikanPaginatedResponse<Vec<Value>>> {
        self.list(reviews::ANIME, params).await
    }

    pub async fn get_recent_manga_reviews(
        &self,
        params: &ReviewParams,
    ) -> Result<JikanPaginatedResponse<Vec<Value>>> {
        self.list(reviews::MANGA, params).await
    }

    async fn list(
        &self,
        template: &str,
        params: &ReviewParams,
    ) -> Result<JikanPaginatedResponse<Vec<Value>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(template, &PathParams::new(), query)
            .await
    }
}
