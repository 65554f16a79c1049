//! Anime entities.

use super::common::{DateRange, Images, MalResource, NamedResource, RelationResource, TitleResource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anime entry as returned by `/anime/{id}`, searches and top lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anime {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub trailer: Option<AnimeTrailer>,
    pub approved: bool,

    // Titles
    pub titles: Vec<TitleResource>,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub title_synonyms: Vec<String>,

    // Type and status
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub source: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub airing: bool,
    pub aired: DateRange,
    pub duration: Option<String>,
    pub rating: Option<String>,

    // Scores and rankings
    pub score: Option<f64>,
    pub scored_by: Option<u32>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u32>,
    pub favorites: Option<u32>,

    pub synopsis: Option<String>,
    pub background: Option<String>,
    pub season: Option<AnimeSeason>,
    pub year: Option<u32>,
    pub broadcast: Option<Broadcast>,

    pub producers: Vec<MalResource>,
    pub licensors: Vec<MalResource>,
    pub studios: Vec<MalResource>,
    pub genres: Vec<MalResource>,
    pub explicit_genres: Vec<MalResource>,
    pub themes: Vec<MalResource>,
    pub demographics: Vec<MalResource>,
}

/// `/anime/{id}/full`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeFull {
    #[serde(flatten)]
    pub anime: Anime,
    pub relations: Vec<RelationResource>,
    pub theme: AnimeTheme,
    pub external: Vec<NamedResource>,
    pub streaming: Vec<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeTrailer {
    pub youtube_id: Option<String>,
    pub url: Option<String>,
    pub embed_url: Option<String>,
    pub images: Option<AnimeTrailerImages>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeTrailerImages {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub medium_image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub maximum_image_url: Option<String>,
}

/// Broadcast information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Broadcast {
    pub day: Option<String>,
    pub time: Option<String>,
    pub timezone: Option<String>,
    pub string: Option<String>,
}

/// Opening and ending songs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeTheme {
    pub openings: Vec<String>,
    pub endings: Vec<String>,
}

/// Episode from `/anime/{id}/episodes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeEpisode {
    pub mal_id: u32,
    pub url: Option<String>,
    pub title: String,
    pub title_japanese: Option<String>,
    pub title_romanji: Option<String>,
    pub aired: Option<String>,
    pub score: Option<f64>,
    pub filler: bool,
    pub recap: bool,
    pub forum_url: Option<String>,
}

/// Broadcast season of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimeSeason {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl AnimeSeason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimeSeason::Winter => "winter",
            AnimeSeason::Spring => "spring",
            AnimeSeason::Summer => "summer",
            AnimeSeason::Fall => "fall",
        }
    }
}

impl fmt::Display for AnimeSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
