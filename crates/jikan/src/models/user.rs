//! User profiles and lists.

use super::common::{EntryMeta, Images, NamedResource, PersonMeta};
use serde::{Deserialize, Serialize};

/// Avatar URLs; users only have a single size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserImages {
    pub jpg: UserImage,
    pub webp: Option<UserImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserImage {
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub mal_id: Option<u32>,
    pub username: String,
    pub url: String,
    pub images: UserImages,
    pub last_online: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<String>,
    pub location: Option<String>,
    pub joined: Option<String>,
}

/// `/users/{username}/full`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFull {
    #[serde(flatten)]
    pub user: User,
    pub statistics: UserStatistics,
    pub external: Vec<NamedResource>,
}

/// `/users/userbyid/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserById {
    pub url: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStatistics {
    pub anime: UserAnimeStatistics,
    pub manga: UserMangaStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAnimeStatistics {
    pub days_watched: f64,
    pub mean_score: f64,
    pub watching: u32,
    pub completed: u32,
    pub on_hold: u32,
    pub dropped: u32,
    pub plan_to_watch: u32,
    pub total_entries: u32,
    pub rewatched: u32,
    pub episodes_watched: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMangaStatistics {
    pub days_read: f64,
    pub mean_score: f64,
    pub reading: u32,
    pub completed: u32,
    pub on_hold: u32,
    pub dropped: u32,
    pub plan_to_read: u32,
    pub total_entries: u32,
    pub reread: u32,
    pub chapters_read: u32,
    pub volumes_read: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAbout {
    pub about: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFavorites {
    pub anime: Vec<UserFavoriteEntry>,
    pub manga: Vec<UserFavoriteEntry>,
    pub characters: Vec<PersonMeta>,
    pub people: Vec<PersonMeta>,
}

/// Favorited anime or manga
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFavoriteEntry {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub start_year: Option<u32>,
}

/// Last list updates, per medium
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdates {
    pub anime: Vec<UserAnimeUpdate>,
    pub manga: Vec<UserMangaUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAnimeUpdate {
    pub entry: EntryMeta,
    pub score: Option<u32>,
    pub status: String,
    pub episodes_seen: Option<u32>,
    pub episodes_total: Option<u32>,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMangaUpdate {
    pub entry: EntryMeta,
    pub score: Option<u32>,
    pub status: String,
    pub chapters_read: Option<u32>,
    pub chapters_total: Option<u32>,
    pub volumes_read: Option<u32>,
    pub volumes_total: Option<u32>,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserHistory {
    pub entry: UserHistoryEntry,
    pub increment: u32,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserHistoryEntry {
    pub mal_id: u32,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFriend {
    pub user: UserMeta,
    pub last_online: Option<String>,
    pub friends_since: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMeta {
    pub username: String,
    pub url: String,
    pub images: UserImages,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserClub {
    pub mal_id: u32,
    pub name: String,
    pub url: String,
}
