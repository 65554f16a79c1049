//! Genres resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::genres;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanResponse;
use crate::cache::CachedTransport;
use crate::models::{Genre, GenreFilter};
use crate::Result;

/// `/genres` endpoints
#[derive(Debug, Clone)]
pub struct GenresClient {
    client: ResourceClient,
}

impl GenresClient {
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

    pub async fn get_anime_genres(
        &self,
        filter: Option<GenreFilter>,
    ) -> Result<JikanResponse<Vec<Genre>>> {
        self.client
            .get_resource(genres::ANIME, &PathParams::new(), filter_query(filter))
            .await
    }

    pub async fn get_manga_genres(
        &self,
        filter: Option<GenreFilter>,
    ) -> Result<JikanResponse<Vec<Genre>>> {
        self.client
            .get_resource(genres::MANGA, &PathParams::new(), filter_query(filter))
            .await
    }
}

fn filter_query(filter: Option<GenreFilter>) -> QueryParams {
    QueryParams::new().set_opt("filter", filter.map(|f| f.as_str()))
}
