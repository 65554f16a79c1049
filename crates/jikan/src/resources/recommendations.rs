//! Recent recommendations facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::recommendations;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanPaginatedResponse;
use crate::cache::CachedTransport;
use crate::models::UserRecommendation;
use crate::Result;

/// `/recommendations` endpoints
#[derive(Debug, Clone)]
pub struct RecommendationsClient {
    client: ResourceClient,
}

impl RecommendationsClient {
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

    pub async fn get_recent_anime_recommendations(
        &self,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<UserRecommendation>>> {
        self.list(recommendations::ANIME, page).await
    }

    pub async fn get_recent_manga_recommendations(
        &self,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<UserRecommendation>>> {
        self.list(recommendations::MANGA, page).await
    }

    async fn list(
        &self,
        template: &str,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<UserRecommendation>>> {
        self.client
            .get_resource_with_pagination(
                template,
                &PathParams::new(),
                QueryParams::new().set_opt("page", page),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::{paginated, MockTransport};

    #[tokio::test]
    async fn test_recent_anime_recommendations() {
        let mock = MockTransport::new().with_json(
            "GET /recommendations/anime?page=3",
            &paginated(
                r#"[{"mal_id":"1-205","entry":[{"mal_id":1,"title":"Cowboy Bebop"},{"mal_id":205,"title":"Samurai Champloo"}],
                    "content":"Same director.","user":{"url":"","username":"someone"}}]"#,
            ),
        );
        let client = RecommendationsClient::with_transport(mock.cached());

        let recs = client.get_recent_anime_recommendations(Some(3)).await.unwrap();
        let first = &recs.data[0];
        assert_eq!(first.mal_id, "1-205");
        assert_eq!(first.entry.len(), 2);
        assert_eq!(first.user.username, "someone");
    }
}
