//! Typed query parameters.
//!
//! Every field is optional; unset fields serialize to `null` and are dropped
//! by `QueryParams::from_serialize`, so they never reach the wire.

use super::common::SortOrder;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimeTypeFilter {
    Tv,
    Movie,
    Ova,
    Special,
    Ona,
    Music,
    Cm,
    Pv,
    TvSpecial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MangaTypeFilter {
    Manga,
    Novel,
    Lightnovel,
    Oneshot,
    Doujin,
    Manhwa,
    Manhua,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimeSearchStatus {
    Airing,
    Complete,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MangaSearchStatus {
    Publishing,
    Complete,
    Hiatus,
    Discontinued,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimeRatingFilter {
    G,
    Pg,
    Pg13,
    R17,
    R,
    Rx,
}

/// `/anime` search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnimeSearchParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub anime_type: Option<AnimeTypeFilter>,
    pub score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub status: Option<AnimeSearchStatus>,
    pub rating: Option<AnimeRatingFilter>,
    pub sfw: Option<bool>,
    /// Comma-separated genre ids
    pub genres: Option<String>,
    pub genres_exclude: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<SortOrder>,
    pub letter: Option<String>,
    /// Comma-separated producer ids
    pub producers: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub unapproved: Option<bool>,
}

/// `/manga` search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MangaSearchParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub manga_type: Option<MangaTypeFilter>,
    pub score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub status: Option<MangaSearchStatus>,
    pub sfw: Option<bool>,
    pub genres: Option<String>,
    pub genres_exclude: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<SortOrder>,
    pub letter: Option<String>,
    /// Comma-separated magazine ids
    pub magazines: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub unapproved: Option<bool>,
}

/// Search over named entities: characters, people, producers, magazines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameSearchParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<SortOrder>,
    pub letter: Option<String>,
}

pub type CharacterSearchParams = NameSearchParams;
pub type PeopleSearchParams = NameSearchParams;
pub type ProducerSearchParams = NameSearchParams;
pub type MagazineSearchParams = NameSearchParams;

/// `/clubs` search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClubSearchParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    /// public, private or secret
    #[serde(rename = "type")]
    pub club_type: Option<String>,
    pub category: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<SortOrder>,
    pub letter: Option<String>,
}

/// `/users` search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserSearchParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    /// any, male, female or nonbinary
    pub gender: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "maxAge")]
    pub max_age: Option<u32>,
    #[serde(rename = "minAge")]
    pub min_age: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Unknown,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub filter: Option<ScheduleDay>,
    pub kids: Option<bool>,
    pub sfw: Option<bool>,
    pub unapproved: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub filter: Option<AnimeTypeFilter>,
    pub sfw: Option<bool>,
    pub unapproved: Option<bool>,
    pub continuing: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopAnimeFilter {
    Airing,
    Upcoming,
    Bypopularity,
    Favorite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopMangaFilter {
    Publishing,
    Upcoming,
    Bypopularity,
    Favorite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopAnimeParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    pub anime_type: Option<AnimeTypeFilter>,
    pub filter: Option<TopAnimeFilter>,
    pub rating: Option<AnimeRatingFilter>,
    pub sfw: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopMangaParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    pub manga_type: Option<MangaTypeFilter>,
    pub filter: Option<TopMangaFilter>,
}

/// Top characters and top people
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Anime,
    Manga,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Anime => "anime",
            MediaType::Manga => "manga",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopReviewsParams {
    pub page: Option<u32>,
    #[serde(rename = "type")]
    pub review_type: Option<MediaType>,
    pub preliminary: Option<bool>,
    pub spoilers: Option<bool>,
}

/// Review listings, per entry or site-wide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewParams {
    pub page: Option<u32>,
    pub preliminary: Option<bool>,
    pub spoilers: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::QueryParams;

    #[test]
    fn test_search_params_drop_unset_fields() {
        let params = AnimeSearchParams {
            q: Some("naruto".to_string()),
            limit: Some(3),
            anime_type: Some(AnimeTypeFilter::TvSpecial),
            ..Default::default()
        };
        let query = QueryParams::from_serialize(&params).unwrap();

        assert_eq!(query.len(), 3);
        assert_eq!(query.to_query_string(), "limit=3&q=naruto&type=tv_special");
    }

    #[test]
    fn test_user_search_age_names() {
        let params = UserSearchParams {
            max_age: Some(30),
            min_age: Some(18),
            ..Default::default()
        };
        let query = QueryParams::from_serialize(&params).unwrap();
        assert_eq!(query.get("maxAge"), Some("30"));
        assert_eq!(query.get("minAge"), Some("18"));
    }

    #[test]
    fn test_empty_params_are_empty_query() {
        assert!(QueryParams::from_serialize(&SeasonParams::default())
            .unwrap()
            .is_empty());
        let top = TopReviewsParams {
            review_type: Some(MediaType::Manga),
            spoilers: Some(false),
            ..Default::default()
        };
        assert_eq!(
            QueryParams::from_serialize(&top).unwrap().to_query_string(),
            "spoilers=false&type=manga"
        );
    }
}
