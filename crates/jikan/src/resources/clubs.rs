//! Clubs resource facade.

use crate::api::client::ClientOptions;
use crate::api::endpoints::clubs;
use crate::api::path::PathParams;
use crate::api::query::QueryParams;
use crate::api::resource::ResourceClient;
use crate::api::types::{JikanPaginatedResponse, JikanResponse};
use crate::cache::CachedTransport;
use crate::models::params::ClubSearchParams;
use crate::models::{Club, ClubMember, ClubRelations, ClubStaff};
use crate::Result;

/// `/clubs` endpoints
#[derive(Debug, Clone)]
pub struct ClubsClient {
    client: ResourceClient,
}

impl ClubsClient {
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

    pub async fn get_club_by_id(&self, id: u32) -> Result<JikanResponse<Club>> {
        self.client
            .get_resource(clubs::BY_ID, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_club_members(
        &self,
        id: u32,
        page: Option<u32>,
    ) -> Result<JikanPaginatedResponse<Vec<ClubMember>>> {
        self.client
            .get_resource_with_pagination(
                clubs::MEMBERS,
                &by_id(id),
                QueryParams::new().set_opt("page", page),
            )
            .await
    }

    pub async fn get_club_staff(&self, id: u32) -> Result<JikanResponse<Vec<ClubStaff>>> {
        self.client
            .get_resource(clubs::STAFF, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn get_club_relations(&self, id: u32) -> Result<JikanResponse<ClubRelations>> {
        self.client
            .get_resource(clubs::RELATIONS, &by_id(id), QueryParams::new())
            .await
    }

    pub async fn search_clubs(
        &self,
        params: &ClubSearchParams,
    ) -> Result<JikanPaginatedResponse<Vec<Club>>> {
        let query = QueryParams::from_serialize(params)?;
        self.client
            .get_resource_with_pagination(clubs::SEARCH, &PathParams::new(), query)
            .await
    }
}

fn by_id(id: u32) -> PathParams {
    PathParams::new().with("id", id)
}
