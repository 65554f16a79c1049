//! Broadcast schedules facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::schedules;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanPaginatedResponse;
use crate::cache::CachedTransport;
use crate::models::params::ScheduleParams;
use crate::models::Anime;
use crate::Result;

/// `/schedules` endpoint
#[derive(Debug, Clone)]
pub struct SchedulesClient {
    client: ResourceClient,
}

impl SchedulesClient {
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

    pub async fn get_schedules(
        &self,
        params: &ScheduleParams,
    ) -> Result<JikanPaginatedResponse<Vec<Anime>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(schedules::LIST, &PathParams::new(), query)
            .await
    }
}
