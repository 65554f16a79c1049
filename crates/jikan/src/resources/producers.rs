//! Producers resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::producers;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::params::ProducerSearchParams;
use crate::models::{NamedResource, Producer, ProducerFull};
use crate::Result;

/// `/producers` endpoints
#[derive(Debug, Clone)]
pub struct ProducersClient {
    client: ResourceClient,
}

impl ProducersClient {
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

    pub async fn get_producer_by_id(&self, id: u32) -> Result<JikanResponse<Producer>> {
        self.client
            .get_resource(producers::BY_ID, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_producer_full_by_id(&self, id: u32) -> Result<JikanResponse<ProducerFull>> {
        self.client
            .get_resource(producers::FULL_BY_ID, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_producer_external(
        &self,
        id: u32,
    ) -> Result<JikanResponse<Vec<NamedResource>>> {
        self.client
            .get_resource(producers::EXTERNAL, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn search_producers(
        &self,
        params: &ProducerSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<Producer>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(producers::SEARCH, &PathParams::new(), query)
            .await
    }
}

fn by_id(id: u32) -> PathParams {
    PathParams::new().with("id", id)
}
