//! Users resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::users;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::params::{MediaType, UserSearchParams};
use crate::models::user::{
    UserAbout, UserClub, UserFavorites, UserFriend, UserHistory, UserStatistics, UserUpdates,
};
use crate::models::{NamedResource, User, UserById, UserFull, UserRecommendation};
use crate::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `/users` endpoints
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: ResourceClient,
}

impl UsersClient {
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

    pub async fn search_users(
        &self,
        params: &UserSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<User>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(users::SEARCH, &PathParams::new(), query)
            .await
    }

    pub async fn get_user_by_id(&self, id: u32) -> Result<JikanResponse<UserById>> {
        self.client
            .get_resource(users::BY_ID, &PathParams::new().with("id", id), QueryParams::new())
            .await
    }

    pub async fn get_user_full_profile(&self, username: &str) -> Result<JikanResponse<UserFull>> {
        self.get(users::FULL_PROFILE, username, QueryParams::new()).await
    }

    pub async fn get_user_profile(&self, username: &str) -> Result<JikanResponse<User>> {
        self.get(users::PROFILE, username, QueryParams::new()).await
    }

    pub async fn get_user_statistics(
        &self,
        username: &str,
    ) -> Result<JikanResponse<UserStatistics>> {
        self.get(users::STATISTICS, username, QueryParams::new()).await
    }

    pub async fn get_user_favorites(&self, username: &str) -> Result<JikanResponse<UserFavorites>> {
        self.get(users::FAVORITES, username, QueryParams::new()).await
    }

    pub async fn get_user_updates(&self, username: &str) -> Result<JikanResponse<UserUpdates>> {
        self.get(users::UPDATES, username, QueryParams::new()).await
    }

    pub async fn get_user_about(&self, username: &str) -> Result<JikanResponse<UserAbout>> {
        self.get(users::ABOUT, username, QueryParams::new()).await
    }

    pub async fn get_user_history(
        &self,
        username: &str,
        history_type: Option<MediaType>,
    ) -> Result<JikanResponse<Vec<UserHistory>>> {
        let query = QueryParams::new().set_opt("type", history_type.map(|t| t.as_str()));
        self.get(users::HISTORY, username, query).await
    }

    pub async fn get_user_friends(
        &self,
        username: &str,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<UserFriend>>> {
        self.paginated(users::FRIENDS, username, page).await
    }

    pub async fn get_user_reviews(
        &self,
        username: &str,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<Value>>> {
        self.paginated(users::REVIEWS, username, page).await
    }

    pub async fn get_user_recommendations(
        &self,
        username: &str,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<UserRecommendation>>> {
        self.paginated(users::RECOMMENDATIONS, username, page).await
    }

    pub async fn get_user_clubs(
        &self,
        username: &str,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<UserClub>>> {
        self.paginated(users::CLUBS, username, page).await
    }

    pub async fn get_user_external(
        &self,
        username: &str,
    ) -> Result<JikanResponse<Vec<NamedResource>>> {
        self.get(users::EXTERNAL, username, QueryParams::new()).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        template: &str,
        username: &str,
        query: QueryParams,
    ) -> Result<JikanResponse<T>> {
        self.client
            .get_resource(template, &by_username(username), query)
            .await
    }

    async fn paginated<T: DeserializeOwned>(
        &self,
        template: &str,
        username: &str,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<T>> {
        self.client
            .get_resource_with_pagination(
                template,
                &by_username(username),
                QueryParams::new().set_opt("page", page),
            )
            .await
    }
}

fn by_username(username: &str) -> PathParams {
    PathParams::new().with("username", username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::{paginated, MockTransport};

    #[tokio::test]
    async fn test_user_by_id() {
        let mock = MockTransport::new().with_json(
            "GET /users/userbyid/1",
            r#"{"data":{"url":"https://myanimelist.net/profile/Xinil","username":"Xinil"}}"#,
        );
        let client = UsersClient::with_transport(mock.cached());

        let user = client.get_user_by_id(1).await.unwrap();
        assert_eq!(user.data.username, "Xinil");
    }

    #[tokio::test]
    async fn test_user_history_type() {
        let mock = MockTransport::new().with_json(
            "GET /users/Xinil/history?type=anime",
            r#"{"data":[{"entry":{"mal_id":1,"type":"anime","name":"Cowboy Bebop","url":""},"increment":3,"date":"2024-01-01T00:00:00+00:00"}]}"#,
        );
        let client = UsersClient::with_transport(mock.cached());

        let history = client
            .get_user_history("Xinil", Some(MediaType::Anime))
            .await
            .unwrap();
        assert_eq!(history.data[0].increment, 3);
        assert_eq!(history.data[0].entry.name, "Cowboy Bebop");
    }

    #[tokio::test]
    async fn test_username_is_encoded_into_one_segment() {
        let mock = MockTransport::new().with_json(
            "GET /users/odd%20name%3Fx%2Fy",
            r#"{"data":{"url":"","username":"odd name?x/y"}}"#,
        );
        let client = UsersClient::with_transport(mock.cached());

        let user = client.get_user_profile("odd name?x/y").await.unwrap();
        assert_eq!(user.data.username, "odd name?x/y");
        assert!(client.transport().contains("/users/odd%20name%3Fx%2Fy"));
    }

    #[tokio::test]
    async fn test_user_friends_page() {
        let mock = MockTransport::new().with_json(
            "GET /users/Xinil/friends?page=2",
            &paginated(r#"[{"user":{"username":"friend","url":""},"friends_since":"2010-01-01"}]"#),
        );
        let client = UsersClient::with_transport(mock.cached());

        let friends = client.get_user_friends("Xinil", Some(2)).await.unwrap();
        assert_eq!(friends.data[0].user.username, "friend");
    }
}
