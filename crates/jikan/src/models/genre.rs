//! Genres and magazines: named, counted catalogue entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub mal_id: u32,
    pub name: String,
    pub url: String,
    pub count: u32,
}

/// Which genre list `/genres/{anime,manga}` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreFilter {
    Genres,
    ExplicitGenres,
    Themes,
    Demographics,
}

impl GenreFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenreFilter::Genres => "genres",
            GenreFilter::ExplicitGenres => "explicit_genres",
            GenreFilter::Themes => "themes",
            GenreFilter::Demographics => "demographics",
        }
    }
}

/// Manga magazine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Magazine {
    pub mal_id: u32,
    pub name: String,
    pub url: String,
    pub count: u32,
}
