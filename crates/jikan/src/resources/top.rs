//! Top lists facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::top;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanPaginatedResponse;
use crate::cache::CachedTransport;
use crate::models::params::{PageParams, TopAnimeParams, TopMangaParams, TopReviewsParams};
use crate::models::{Anime, Character, Manga, Person};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// `/top` endpoints
#[derive(Debug, Clone)]
pub struct TopClient {
    client: ResourceClient,
}

impl TopClient {
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

    pub async fn get_top_anime(
        &self,
        params: &TopAnimeParams,
    ) -> Result<JikanPaginatedResponse<Vec<Anime>>> {
        self.list(top::ANIME, params).await
    }

    pub async fn get_top_manga(
        &self,
        params: &TopMangaParams,
    ) -> Result<JikanPaginatedResponse<Vec<Manga>>> {
        self.list(top::MANGA, params).await
    }

    pub async fn get_top_characters(
        &self,
        params: &PageParams,
    ) -> Result<JikanPaginatedResponse<Vec<Character>>> {
        self.list(top::CHARACTERS, params).await
    }

    pub async fn get_top_people(
        &self,
        params: &PageParams,
    ) -> Result<JikanPaginatedResponse<Vec<Person>>> {
        self.list(top::PEOPLE, params).await
    }

    pub async fn get_top_reviews(
        &self,
        params: &TopReviewsParams,
    ) -> Result<JikanPaginatedResponse<Vec<Value>>> {
        self.list(top::REVIEWS, params).await
    }

    async fn list<T: DeserializeOwned, P: Serialize>(
        &self,
        template: &str,
        params: &P,
    ) -> Result<JikanPaginatedResponse<T>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(template, &PathParams::new(), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::params::TopAnimeFilter;
    use crate::resources::testing::{paginated, MockTransport};

    #[tokio::test]
    async fn test_top_anime_by_popularity() {
        let mock = MockTransport::new().with_json(
            "GET /top/anime?filter=bypopularity&page=1",
            &paginated(r#"[{"mal_id":16498,"title":"Shingeki no Kyojin","popularity":1}]"#),
        );
        let client = TopClient::with_transport(mock.cached());

        let params = TopAnimeParams {
            page: Some(1),
            filter: Some(TopAnimeFilter::Bypopularity),
            ..Default::default()
        };
        let top = client.get_top_anime(&params).await.unwrap();
        assert_eq!(top.data[0].popularity, Some(1));
    }

    #[tokio::test]
    async fn test_top_characters_default_params() {
        let mock = MockTransport::new().with_json("GET /top/characters", &paginated("[]"));
        let client = TopClient::with_transport(mock.cached());
        let top = client.get_top_characters(&PageParams::default()).await.unwrap();
        assert!(top.data.is_empty());
    }
}
