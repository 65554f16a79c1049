//! Watch feeds facade: recently released episodes and promotional videos.

use crate::api::client::ClientOptions;
use crate::api::endpoints::watch;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanResponse;
use crate::cache::CachedTransport;
use crate::models::{WatchEpisode, WatchPromo};
use crate::Result;

/// `/watch` endpoints
#[derive(Debug, Clone)]
pub struct WatchClient {
    client: ResourceClient,
}

impl WatchClient {
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

    pub async fn get_recent_episodes(&self) -> Result<JikanResponse<Vec<WatchEpisode>>> {
        self.client
            .get_resource(watch::RECENT_EPISODES, &PathParams::new(), QueryParams::new())
            .await
    }

    pub async fn get_popular_episodes(&self) -> Result<JikanResponse<Vec<WatchEpisode>>> {
        self.client
            .get_resource(watch::POPULAR_EPISODES, &PathParams::new(), QueryParams::new())
            .await
    }

    pub async fn get_recent_promos(
        &self,
        page: Option<u32>,
    ) -> Result<JikanResponse<Vec<WatchPromo>>> {
        self.client
            .get_resource(
                watch::RECENT_PROMOS,
                &PathParams::new(),
                QueryParams::new().set_opt("page", page),
            )
            .await
    }

    pub async fn get_popular_promos(&self) -> Result<JikanResponse<Vec<WatchPromo>>> {
        self.client
            .get_resource(watch::POPULAR_PROMOS, &PathParams::new(), QueryParams::new())
            .await
    }
}
