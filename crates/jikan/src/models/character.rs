//! Characters and their appearances.

use super::common::{EntryMeta, Images, PersonMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub name: String,
    pub name_kanji: Option<String>,
    pub nicknames: Vec<String>,
    pub favorites: u32,
    pub about: Option<String>,
}

/// `/characters/{id}/full`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterFull {
    #[serde(flatten)]
    pub character: Character,
    pub anime: Vec<CharacterAnimeAppearance>,
    pub manga: Vec<CharacterMangaAppearance>,
    pub voices: Vec<CharacterVoiceActor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterAnimeAppearance {
    pub role: String,
    pub anime: EntryMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterMangaAppearance {
    pub role: String,
    pub manga: EntryMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterVoiceActor {
    pub person: PersonMeta,
    pub language: String,
}
