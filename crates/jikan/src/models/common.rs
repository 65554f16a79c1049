//! Building blocks shared by the entity models.

use serde::{Deserialize, Serialize};

/// Image URLs in JPG and WebP variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub jpg: ImageSet,
    pub webp: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSet {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub medium_image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub maximum_image_url: Option<String>,
}

/// Reference to a MAL entity (genre, studio, author, related entry, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MalResource {
    pub mal_id: u32,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub url: String,
}

/// Name and link, e.g. an external site or streaming service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleResource {
    #[serde(rename = "type")]
    pub title_type: String,
    pub title: String,
}

/// Compact entry reference with images and title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryMeta {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub title: String,
}

/// Compact person or character reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonMeta {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub name: String,
}

/// Aired or published date span
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
    pub prop: DateRangeProp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRangeProp {
    pub from: DateProp,
    pub to: DateProp,
    pub string: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateProp {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationResource {
    pub relation: String,
    pub entry: Vec<MalResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct News {
    pub mal_id: u32,
    pub url: String,
    pub title: String,
    pub date: String,
    pub author_username: String,
    pub author_url: String,
    pub forum_url: String,
    pub images: Images,
    pub comments: u32,
    pub excerpt: String,
}

/// Forum topic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forum {
    pub mal_id: u32,
    pub url: String,
    pub title: String,
    pub date: String,
    pub author_username: String,
    pub author_url: String,
    pub comments: u32,
    pub last_comment: Option<ForumLastComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumLastComment {
    pub url: String,
    pub author_username: String,
    pub author_url: String,
    pub date: Option<String>,
}

/// Forum topic filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForumFilter {
    All,
    Episode,
    Other,
}

impl ForumFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumFilter::All => "all",
            ForumFilter::Episode => "episode",
            ForumFilter::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoreInfo {
    pub moreinfo: Option<String>,
}

/// Entry recommended alongside another entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub entry: EntryMeta,
    pub url: String,
    pub votes: u32,
}

/// User-written recommendation pairing two entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecommendation {
    pub mal_id: String,
    pub entry: Vec<EntryMeta>,
    pub content: String,
    pub user: UserRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRef {
    pub url: String,
    pub username: String,
}

/// Sort direction for search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
