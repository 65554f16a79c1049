//! Characters resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::characters;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::character::{
    CharacterAnimeAppearance, CharacterMangaAppearance, CharacterVoiceActor,
};
use crate::models::params::CharacterSearchParams;
use crate::models::{Character, CharacterFull, Images};
use crate::Result;

/// `/characters` endpoints
#[derive(Debug, Clone)]
pub struct CharactersClient {
    client: ResourceClient,
}

impl CharactersClient {
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

    pub async fn get_character_full_by_id(&self, id: u32) -> Result<JikanResponse<CharacterFull>> {
        self.get(characters::FULL_BY_ID, id).await
    }

    pub async fn get_character_by_id(&self, id: u32) -> Result<JikanResponse<Character>> {
        self.get(characters::BY_ID, id).await
    }

    pub async fn get_character_anime(
        &self,
        id: u32,
    ) -> Result<JikanResponse<Vec<CharacterAnimeAppearance>>> {
        self.get(characters::ANIME, id).await
    }

    pub async fn get_character_manga(
        &self,
        id: u32,
    ) -> Result<JikanResponse<Vec<CharacterMangaAppearance>>> {
        self.get(characters::MANGA, id).await
    }

    pub async fn get_character_voice_actors(
        &self,
        id: u32,
    ) -> Result<JikanResponse<Vec<CharacterVoiceActor>>> {
        self.get(characters::VOICE_ACTORS, id).await
    }

    pub async fn get_character_pictures(&self, id: u32) -> Result<JikanResponse<Vec<Images>>> {
        self.get(characters::PICTURES, id).await
    }

    pub async fn search_characters(
        &self,
        params: &CharacterSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<Character>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(characters::SEARCH, &PathParams::new(), query)
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
