//! Magazines resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::magazines;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanPaginatedResponse;
use crate::cache::CachedTransport;
use crate::models::params::MagazineSearchParams;
use crate::models::Magazine;
use crate::Result;

/// `/magazines` endpoint
#[derive(Debug, Clone)]
pub struct MagazinesClient {
    client: ResourceClient,
}

impl MagazinesClient {
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

    pub async fn get_magazines(
        &self,
        params: &MagazineSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<Magazine>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(magazines::LIST, &PathParams::new(), query)
            .await
    }
}
