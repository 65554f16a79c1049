//! Random entry facade.
//!
//! Random responses are cached like any other GET, so repeated calls within
//! the TTL return the same entry until the cache entry is cleared.

use crate::api::client::ClientOptions;
use crate::api::endpoints::random;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::JikanResponse;
use crate::cache::CachedTransport;
use crate::models::{Anime, Character, Manga, Person};
use crate::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `/random` endpoints
#[derive(Debug, Clone)]
pub struct RandomClient {
    client: ResourceClient,
}

impl RandomClient {
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

    pub async fn get_random_anime(&self) -> Result<JikanResponse<Anime>> {
        self.get(random::ANIME).await
    }

    pub async fn get_random_manga(&self) -> Result<JikanResponse<Manga>> {
        self.get(random::MANGA).await
    }

    pub async fn get_random_characters(&self) -> Result<JikanResponse<Character>> {
        self.get(random::CHARACTERS).await
    }

    pub async fn get_random_people(&self) -> Result<JikanResponse<Person>> {
        self.get(random::PEOPLE).await
    }

    pub async fn get_random_users(&self) -> Result<JikanResponse<Value>> {
        self.get(random::USERS).await
    }

    async fn get<T: DeserializeOwned>(&self, template: &str) -> Result<JikanResponse<T>> {
        self.client
            .get_resource(template, &PathParams::new(), QueryParams::new())
            .await
    }
}
