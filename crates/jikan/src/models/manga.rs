//! Manga entities.

use super::common::{DateRange, Images, MalResource, NamedResource, RelationResource, TitleResource};
use serde::{Deserialize, Serialize};

/// Manga entry as returned by `/manga/{id}`, searches and top lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manga {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub approved: bool,

    // Titles
    pub titles: Vec<TitleResource>,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub title_synonyms: Vec<String>,

    #[serde(rename = "type")]
    pub manga_type: Option<String>,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub status: Option<String>,
    pub publishing: bool,
    pub published: DateRange,

    // Scores and rankings
    pub score: Option<f64>,
    pub scored_by: Option<u32>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u32>,
    pub favorites: Option<u32>,

    pub synopsis: Option<String>,
    pub background: Option<String>,

    pub authors: Vec<MalResource>,
    pub serializations: Vec<MalResource>,
    pub genres: Vec<MalResource>,
    pub explicit_genres: Vec<MalResource>,
    pub themes: Vec<MalResource>,
    pub demographics: Vec<MalResource>,
}

/// `/manga/{id}/full`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MangaFull {
    #[serde(flatten)]
    pub manga: Manga,
    pub relations: Vec<RelationResource>,
    pub external: Vec<NamedResource>,
}
