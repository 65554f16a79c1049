//! Manga resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::manga;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::params::{MangaSearchParams, ReviewParams};
use crate::models::{Forum, ForumFilter, Manga, MangaFull, MoreInfo, News, Recommendation};
use crate::Result;
use serde_json::Value;

/// `/manga` endpoints
#[derive(Debug, Clone)]
pub struct MangaClient {
    client: ResourceClient,
}

impl MangaClient {
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

    pub async fn get_manga_by_id(&self, id: u32) -> Result<JikanResponse<Manga>> {
        self.get(manga::BY_ID, id).await
    }

    pub async fn get_manga_full_by_id(&self, id: u32) -> Result<JikanResponse<MangaFull>> {
        self.get(manga::FULL_BY_ID, id).await
    }

    pub async fn get_manga_characters(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.get(manga::CHARACTERS, id).await
    }

    pub async fn get_manga_news(
        &self,
        id: u32,
        page: u32,
    ) -> Result<JikanPaginatedResponse<Vec<News>>> {
        self.client
            .get_resource_with_pagination(
                manga::NEWS,
                &by_id(id),
                QueryParams::new().set("page", page),
            )
            .await
    }

    /// Forum topics about a manga
    pub async fn get_manga_topics(
        &self,
        id: u32,
        filter: Option<ForumFilter>,
    ) -> Result<JikanResponse<Vec<Forum>>> {
        let query = QueryParams::new().set_opt("filter", filter.map(|f| f.as_str()));
        self.client.get_resource(manga::TOPICS, &by_id(id), query).await
    }

    pub async fn get_manga_pictures(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.get(manga::PICTURES, id).await
    }

    pub async fn get_manga_statistics(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.get(manga::STATISTICS, id).await
    }

    pub async fn get_manga_more_info(&self, id: u32) -> Result<JikanResponse<MoreInfo>> {
        self.get(manga::MORE_INFO, id).await
    }

    pub async fn get_manga_recommendations(
        &self,
        id: u32,
    ) -> Result<JikanResponse<Vec<Recommendation>>> {
        self.get(manga::RECOMMENDATIONS, id).await
    }

    pub async fn get_manga_user_updates(
        &self,
        id: u32,
        page: u32,
    ) -> Result<JikanPaginatedResponse<Value>> {
        self.client
            .get_resource_with_pagination(
                manga::USER_UPDATES,
                &by_id(id),
                QueryParams::new().set("page", page),
            )
            .await
    }

    pub async fn get_manga_reviews(
        &self,
        id: u32,
        params: &ReviewParams,
    ) -> Result<JikanPaginatedResponse<Value>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(manga::REVIEWS, &by_id(id), query)
            .await
    }

    pub async fn get_manga_relations(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.get(manga::RELATIONS, id).await
    }

    pub async fn get_manga_external(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.get(manga::EXTERNAL, id).await
    }

    pub async fn search_manga(
        &self,
        params: &MangaSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<Manga>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(manga::SEARCH, &PathParams::new(), query)
            .await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        template: &str,
        id: u32,
    ) -> Result<JikanResponse<T>> {
        self.client
            .get_resource(template, &by_id(id), QueryParams::new())
            .await
    }
}

fn by_id(id: u32) -> PathParams {
    PathParams::new().with("id", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::params::MangaSearchStatus;
    use crate::resources::testing::{paginated, MockTransport};

    #[tokio::test]
    async fn test_get_manga_full_by_id() {
        let mock = MockTransport::new().with_json(
            "GET /manga/2/full",
            r#"{"data":{"mal_id":2,"title":"Berserk","relations":[],"external":[]}}"#,
        );
        let client = MangaClient::with_transport(mock.cached());

        let manga = client.get_manga_full_by_id(2).await.unwrap();
        assert_eq!(manga.data.manga.title, "Berserk");
    }

    #[tokio::test]
    async fn test_topics_use_forum_path() {
        let mock = MockTransport::new().with_json("GET /manga/2/forum?filter=all", r#"{"data":[]}"#);
        let client = MangaClient::with_transport(mock.cached());

        let topics = client.get_manga_topics(2, Some(ForumFilter::All)).await.unwrap();
        assert!(topics.data.is_empty());
    }

    #[tokio::test]
    async fn test_search_manga() {
        let mock = MockTransport::new().with_json(
            "GET /manga?q=berserk&status=publishing",
            &paginated(r#"[{"mal_id":2,"title":"Berserk"}]"#),
        );
        let client = MangaClient::with_transport(mock.cached());

        let params = MangaSearchParams {
            q: Some("berserk".to_string()),
            status: Some(MangaSearchStatus::Publishing),
            ..Default::default()
        };
        let results = client.search_manga(&params).await.unwrap();
        assert_eq!(results.data[0].mal_id, 2);
    }

    #[tokio::test]
    async fn test_unknown_manga_is_not_found() {
        let client = MangaClient::with_transport(MockTransport::new().cached());
        let err = client.get_manga_by_id(999_999_999).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
