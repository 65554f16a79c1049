//! Clubs.

use super::common::{Images, MalResource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Club {
    pub mal_id: u32,
    pub name: String,
    pub url: String,
    pub images: Images,
    pub members: u32,
    pub category: String,
    pub created: Option<String>,
    /// public, private or secret
    pub access: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubMember {
    pub username: String,
    pub url: String,
    pub images: Images,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubStaff {
    pub url: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubRelations {
    pub anime: Vec<MalResource>,
    pub manga: Vec<MalResource>,
    pub characters: Vec<MalResource>,
}
