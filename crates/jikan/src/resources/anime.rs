//! Anime resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::anime;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::params::{AnimeSearchParams, ReviewParams};
use crate::models::{Anime, AnimeEpisode, AnimeFull, Forum, ForumFilter, MoreInfo, News, Recommendation};
use crate::Result;
use serde_json::Value;

/// `/anime` endpoints
#[derive(Debug, Clone)]
pub struct AnimeClient {
    client: ResourceClient,
}

impl AnimeClient {
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

    pub async fn get_anime_by_id(&self, id: u32) -> Result<JikanResponse<Anime>> {
        self.client
            .get_resource(anime::BY_ID, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_full_by_id(&self, id: u32) -> Result<JikanResponse<AnimeFull>> {
        self.client
            .get_resource(anime::FULL_BY_ID, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_characters(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::CHARACTERS, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_staff(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::STAFF, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_episodes(
        &self,
        id: u32,
        page: u32,
    ) -> Result<JikanPaginatedResponse<Vec<AnimeEpisode>>> {
        self.client
            .get_resource_with_pagination(anime::EPISODES, &by_id(id), page_query(page))
            .await
    }

    pub async fn get_anime_episode_by_id(
        &self,
        id: u32,
        episode: u32,
    ) -> Result<JikanResponse<Value>> {
        let params = PathParams::new().with("id", id).with("episode", episode);
        self.client
            .get_resource(anime::EPISODE_BY_ID, &params, QueryParams::new())
            .await
    }

    pub async fn get_anime_news(
        &self,
        id: u32,
        page: u32,
    ) -> Result<JikanPaginatedResponse<Vec<News>>> {
        self.client
            .get_resource_with_pagination(anime::NEWS, &by_id(id), page_query(page))
            .await
    }

    pub async fn get_anime_forum(
        &self,
        id: u32,
        filter: Option<ForumFilter>,
    ) -> Result<JikanResponse<Vec<Forum>>> {
        let query = QueryParams::new().set_opt("filter", filter.map(|f| f.as_str()));
        self.client.get_resource(anime::FORUM, &by_id(id), query).await
    }

    pub async fn get_anime_videos(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::VIDEOS, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_video_episodes(
        &self,
        id: u32,
        page: u32,
    ) -> Result<JikanPaginatedResponse<Value>> {
        self.client
            .get_resource_with_pagination(anime::VIDEO_EPISODES, &by_id(id), page_query(page))
            .await
    }

    pub async fn get_anime_pictures(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::PICTURES, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_statistics(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::STATISTICS, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_more_info(&self, id: u32) -> Result<JikanResponse<MoreInfo>> {
        self.client
            .get_resource(anime::MORE_INFO, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_recommendations(
        &self,
        id: u32,
    ) -> Result<JikanResponse<Vec<Recommendation>>> {
        self.client
            .get_resource(anime::RECOMMENDATIONS, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_user_updates(
        &self,
        id: u32,
        page: u32,
    ) -> Result<JikanPaginatedResponse<Value>> {
        self.client
            .get_resource_with_pagination(anime::USER_UPDATES, &by_id(id), page_query(page))
            .await
    }

    pub async fn get_anime_reviews(
        &self,
        id: u32,
        params: &ReviewParams,
    ) -> Result<JikanPaginatedResponse<Value>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(anime::REVIEWS, &by_id(id), query)
            .await
    }

    pub async fn get_anime_relations(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::RELATIONS, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_themes(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::THEMES, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_external(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::EXTERNAL, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_anime_streaming(&self, id: u32) -> Result<JikanResponse<Value>> {
        self.client
            .get_resource(anime::STREAMING, &by_id(id), QueryParams::new())
            .await
    }

    /// Search anime; unset parameters are left out of the query
    pub async fn search_anime(
        &self,
        params: &AnimeSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<Anime>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(anime::SEARCH, &PathParams::new(), query)
            .await
    }
}

fn by_id(id: u32) -> PathParams {
    PathParams::new().with("id", id)
}

fn page_query(page: u32) -> QueryParams {
    QueryParams::new().set("page", page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::{paginated, MockTransport};

    #[tokio::test]
    async fn test_get_anime_by_id() {
        let mock = MockTransport::new().with_json(
            "GET /anime/1",
            r#"{"data":{"mal_id":1,"title":"Cowboy Bebop","episodes":26}}"#,
        );
        let client = AnimeClient::with_transport(mock.cached());

        let anime = client.get_anime_by_id(1).await.unwrap();
        assert_eq!(anime.data.mal_id, 1);
        assert_eq!(anime.data.episodes, Some(26));
    }

    #[tokio::test]
    async fn test_episode_by_id_resolves_both_params() {
        let mock = MockTransport::new().with_json(
            "GET /anime/21/episodes/1",
            r#"{"data":{"mal_id":1,"title":"I'm Luffy!"}}"#,
        );
        let client = AnimeClient::with_transport(mock.cached());

        let episode = client.get_anime_episode_by_id(21, 1).await.unwrap();
        assert_eq!(episode.data["title"], "I'm Luffy!");
    }

    #[tokio::test]
    async fn test_episodes_send_page() {
        let mock = MockTransport::new().with_json(
            "GET /anime/1/episodes?page=2",
            &paginated(r#"[{"mal_id":26,"title":"The Real Folk Blues (Part 2)"}]"#),
        );
        let client = AnimeClient::with_transport(mock.cached());

        let episodes = client.get_anime_episodes(1, 2).await.unwrap();
        assert_eq!(episodes.data[0].mal_id, 26);
        assert!(!episodes.pagination.has_next_page);
    }

    #[tokio::test]
    async fn test_forum_filter_is_optional() {
        let mock = MockTransport::new()
            .with_json("GET /anime/1/forum", r#"{"data":[]}"#)
            .with_json(
                "GET /anime/1/forum?filter=episode",
                r#"{"data":[{"mal_id":7,"title":"Episode 1 Discussion"}]}"#,
            );
        let client = AnimeClient::with_transport(mock.cached());

        assert!(client.get_anime_forum(1, None).await.unwrap().data.is_empty());
        let topics = client
            .get_anime_forum(1, Some(ForumFilter::Episode))
            .await
            .unwrap();
        assert_eq!(topics.data[0].title, "Episode 1 Discussion");
    }

    #[tokio::test]
    async fn test_reviews_pass_only_set_params() {
        let mock = MockTransport::new()
            .with_json("GET /anime/1/reviews?page=1&spoilers=false", &paginated("[]"));
        let client = AnimeClient::with_transport(mock.cached());

        let params = ReviewParams {
            page: Some(1),
            spoilers: Some(false),
            ..Default::default()
        };
        assert!(client.get_anime_reviews(1, &params).await.is_ok());
    }

    #[tokio::test]
    async fn test_search_with_limit() {
        let mock = MockTransport::new().with_json(
            "GET /anime?limit=3&q=naruto",
            r#"{"data":[{"mal_id":20},{"mal_id":1735},{"mal_id":34566}],
                "pagination":{"last_visible_page":10,"has_next_page":true,
                "items":{"count":3,"total":30,"per_page":3}}}"#,
        );
        let client = AnimeClient::with_transport(mock.cached());

        let params = AnimeSearchParams {
            q: Some("naruto".to_string()),
            limit: Some(3),
            ..Default::default()
        };
        let results = client.search_anime(&params).await.unwrap();

        assert!(results.data.len() <= 3);
        assert!(results.pagination.has_next_page);
        assert_eq!(results.pagination.current_page, None);
        assert_eq!(results.pagination.items.unwrap().per_page, 3);
    }
}
