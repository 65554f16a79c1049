//! Seasons archive and watch feeds.

use super::anime::{AnimeSeason, AnimeTrailer};
use super::common::EntryMeta;
use serde::{Deserialize, Serialize};

/// One year of the seasons archive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonsList {
    pub year: u32,
    pub seasons: Vec<AnimeSeason>,
}

/// Recently released or popular episodes of one anime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchEpisode {
    pub entry: EntryMeta,
    pub episodes: Vec<WatchEpisodeItem>,
    pub region_locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchEpisodeItem {
    pub mal_id: u32,
    pub url: String,
    pub title: String,
    pub premium: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchPromo {
    pub title: String,
    pub entry: EntryMeta,
    pub trailer: AnimeTrailer,
}
