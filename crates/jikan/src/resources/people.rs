//! People resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::people;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::params::PeopleSearchParams;
use crate::models::person::{PersonAnimePosition, PersonMangaPosition, PersonVoiceRole};
use crate::models::{Images, Person, PersonFull};
use crate::Result;

/// `/people` endpoints
#[derive(Debug, Clone)]
pub struct PeopleClient {
    client: ResourceClient,
}

impl PeopleClient {
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

    pub async fn get_person_full_by_id(&self, id: u32) -> Result<JikanResponse<PersonFull>> {
        self.get(people::FULL_BY_ID, id).await
    }

    pub async fn get_person_by_id(&self, id: u32) -> Result<JikanResponse<Person>> {
        self.get(people::BY_ID, id).await
    }

    pub async fn get_person_anime(&self, id: u32) -> Result<JikanResponse<Vec<PersonAnimePosition>>> {
        self.get(people::ANIME, id).await
    }

    pub async fn get_person_voices(&self, id: u32) -> Result<JikanResponse<Vec<PersonVoiceRole>>> {
        self.get(people::VOICES, id).await
    }

    pub async fn get_person_manga(&self, id: u32) -> Result<JikanResponse<Vec<PersonMangaPosition>>> {
        self.get(people::MANGA, id).await
    }

    pub async fn get_person_pictures(&self, id: u32) -> Result<JikanResponse<Vec<Images>>> {
        self.get(people::PICTURES, id).await
    }

    pub async fn search_people(
        &self,
        params: &PeopleSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<Person>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(people::SEARCH, &PathParams::new(), query)
            .await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        template: &str,
        id: u32,
    ) -> Result<JikanResponse<T>> {
        self.client
            .get_resource(template, &PathParams::new().with("id", id), QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;
    use crate::resources::testing::{paginated, MockTransport};

    #[tokio::test]
    async fn test_search_people_sorted() {
        let mock = MockTransport::new().with_json(
            "GET /people?order_by=favorites&q=miyazaki&sort=desc",
            &paginated(r#"[{"mal_id":1870,"name":"Hayao Miyazaki","favorites":50000}]"#),
        );
        let client = PeopleClient::with_transport(mock.cached());

        let params = PeopleSearchParams {
            q: Some("miyazaki".to_string()),
            order_by: Some("favorites".to_string()),
            sort: Some(SortOrder::Desc),
            ..Default::default()
        };
        let people = client.search_people(&params).await.unwrap();
        assert_eq!(people.data[0].name, "Hayao Miyazaki");
    }

    #[tokio::test]
    async fn test_person_anime_positions() {
        let mock = MockTransport::new().with_json(
            "GET /people/1870/anime",
            r#"{"data":[{"position":"Director","anime":{"mal_id":199,"url":"","title":"Sen to Chihiro no Kamikakushi"}}]}"#,
        );
        let client = PeopleClient::with_transport(mock.cached());

        let positions = client.get_person_anime(1870).await.unwrap();
        assert_eq!(positions.data[0].position, "Director");
        assert_eq!(positions.data[0].anime.mal_id, 199);
    }
}
