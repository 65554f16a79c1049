//! Data contracts for the payloads inside response envelopes.

pub mod anime;
pub mod character;
pub mod club;
pub mod common;
pub mod genre;
pub mod manga;
pub mod params;
pub mod person;
pub mod producer;
pub mod user;
pub mod watch;

pub use anime::{Anime, AnimeEpisode, AnimeFull, AnimeSeason, AnimeTheme, AnimeTrailer, Broadcast};
pub use character::{Character, CharacterFull};
pub use club::{Club, ClubMember, ClubRelations, ClubStaff};
pub use common::{
    EntryMeta, Forum, ForumFilter, Images, MalResource, MoreInfo, NamedResource, News,
    Recommendation, SortOrder, UserRecommendation,
};
pub use genre::{Genre, GenreFilter, Magazine};
pub use manga::{Manga, MangaFull};
pub use person::{Person, PersonFull};
pub use producer::{Producer, ProducerFull};
pub use user::{User, UserById, UserFull};
pub use watch::{SeasonsList, WatchEpisode, WatchPromo};
