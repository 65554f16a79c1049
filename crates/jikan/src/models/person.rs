//! People: staff, authors and voice actors.

use super::common::{EntryMeta, Images, PersonMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub mal_id: u32,
    pub url: String,
    pub website_url: Option<String>,
    pub images: Images,
    pub name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub alternate_names: Vec<String>,
    pub birthday: Option<String>,
    pub favorites: u32,
    pub about: Option<String>,
}

/// `/people/{id}/full`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonFull {
    #[serde(flatten)]
    pub person: Person,
    pub anime: Vec<PersonAnimePosition>,
    pub manga: Vec<PersonMangaPosition>,
    pub voices: Vec<PersonVoiceRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonAnimePosition {
    pub position: String,
    pub anime: EntryMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonMangaPosition {
    pub position: String,
    pub manga: EntryMeta,
}

/// Character voiced by a person in one anime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonVoiceRole {
    pub role: String,
    pub anime: EntryMeta,
    pub character: PersonMeta,
}
