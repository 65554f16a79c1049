//! Seasonal anime facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::seasons;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::params::SeasonParams;
use crate::models::{Anime, AnimeSeason, SeasonsList};
use crate::Result;

/// `/seasons` endpoints
#[derive(Debug, Clone)]
pub struct SeasonsClient {
    client: ResourceClient,
}

impl SeasonsClient {
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

    pub async fn get_season(
        &self,
        year: u32,
        season: AnimeSeason,
        params: &SeasonParams,
    ) -> Result<JikanPaginatedResponse<Vec<Anime>>> {
        let path = PathParams::new().with("year", year).with("season", season);
        self.client
            .get_resource_with_pagination(
                seasons::BY_YEAR_AND_SEASON,
                &path,
                QueryParams::from_serialize(params)?,
            )
            .await
    }

    pub async fn get_season_now(
        &self,
        params: &SeasonParams,
    ) -> Result<JikanPaginatedResponse<Vec<Anime>>> {
        self.client
            .get_resource_with_pagination(
                seasons::NOW,
                &PathParams::new(),
                QueryParams::from_serialize(params)?,
            )
            .await
    }

    /// Every year and season available in the archive
    pub async fn get_season_list(&self) -> Result<JikanResponse<Vec<SeasonsList>>> {
        self.client
            .get_resource(seasons::LIST, &PathParams::new(), QueryParams::new())
            .await
    }

    pub async fn get_season_upcoming(
        &self,
        params: &SeasonParams,
    ) -> Result<JikanPaginatedResponse<Vec<Anime>>> {
        self.client
            .get_resource_with_pagination(
                seasons::UPCOMING,
                &PathParams::new(),
                QueryParams::from_serialize(params)?,
            )
            .await
    }
}
