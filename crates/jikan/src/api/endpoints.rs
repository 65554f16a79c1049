//! Endpoint path templates, grouped by resource family.
//!
//! Paths are relative to the API base address. Placeholder names are unique
//! within a template.

pub mod anime {
    pub const SEARCH: &str = "/anime";
    pub const BY_ID: &str = "/anime/{id}";
    pub const FULL_BY_ID: &str = "/anime/{id}/full";
    pub const CHARACTERS: &str = "/anime/{id}/characters";
    pub const STAFF: &str = "/anime/{id}/staff";
    pub const EPISODES: &str = "/anime/{id}/episodes";
    pub const EPISODE_BY_ID: &str = "/anime/{id}/episodes/{episode}";
    pub const NEWS: &str = "/anime/{id}/news";
    pub const FORUM: &str = "/anime/{id}/forum";
    pub const VIDEOS: &str = "/anime/{id}/videos";
    pub const VIDEO_EPISODES: &str = "/anime/{id}/videos/episodes";
    pub const PICTURES: &str = "/anime/{id}/pictures";
    pub const STATISTICS: &str = "/anime/{id}/statistics";
    pub const MORE_INFO: &str = "/anime/{id}/moreinfo";
    pub const RECOMMENDATIONS: &str = "/anime/{id}/recommendations";
    pub const USER_UPDATES: &str = "/anime/{id}/userupdates";
    pub const REVIEWS: &str = "/anime/{id}/reviews";
    pub const RELATIONS: &str = "/anime/{id}/relations";
    pub const THEMES: &str = "/anime/{id}/themes";
    pub const EXTERNAL: &str = "/anime/{id}/external";
    pub const STREAMING: &str = "/anime/{id}/streaming";
}

pub mod manga {
    pub const SEARCH: &str = "/manga";
    pub const BY_ID: &str = "/manga/{id}";
    pub const FULL_BY_ID: &str = "/manga/{id}/full";
    pub const CHARACTERS: &str = "/manga/{id}/characters";
    pub const NEWS: &str = "/manga/{id}/news";
    pub const TOPICS: &str = "/manga/{id}/forum";
    pub const PICTURES: &str = "/manga/{id}/pictures";
    pub const STATISTICS: &str = "/manga/{id}/statistics";
    pub const MORE_INFO: &str = "/manga/{id}/moreinfo";
    pub const RECOMMENDATIONS: &str = "/manga/{id}/recommendations";
    pub const USER_UPDATES: &str = "/manga/{id}/userupdates";
    pub const REVIEWS: &str = "/manga/{id}/reviews";
    pub const RELATIONS: &str = "/manga/{id}/relations";
    pub const EXTERNAL: &str = "/manga/{id}/external";
}

pub mod characters {
    pub const SEARCH: &str = "/characters";
    pub const BY_ID: &str = "/characters/{id}";
    pub const FULL_BY_ID: &str = "/characters/{id}/full";
    pub const ANIME: &str = "/characters/{id}/anime";
    pub const MANGA: &str = "/characters/{id}/manga";
    pub const VOICE_ACTORS: &str = "/characters/{id}/voices";
    pub const PICTURES: &str = "/characters/{id}/pictures";
}

pub mod clubs {
    pub const SEARCH: &str = "/clubs";
    pub const BY_ID: &str = "/clubs/{id}";
    pub const MEMBERS: &str = "/clubs/{id}/members";
    pub const STAFF: &str = "/clubs/{id}/staff";
    pub const RELATIONS: &str = "/clubs/{id}/relations";
}

pub mod genres {
    pub const ANIME: &str = "/genres/anime";
    pub const MANGA: &str = "/genres/manga";
}

pub mod magazines {
    pub const LIST: &str = "/magazines";
}

pub mod people {
    pub const SEARCH: &str = "/people";
    pub const BY_ID: &str = "/people/{id}";
    pub const FULL_BY_ID: &str = "/people/{id}/full";
    pub const ANIME: &str = "/people/{id}/anime";
    pub const VOICES: &str = "/people/{id}/voices";
    pub const MANGA: &str = "/people/{id}/manga";
    pub const PICTURES: &str = "/people/{id}/pictures";
}

pub mod producers {
    pub const SEARCH: &str = "/producers";
    pub const BY_ID: &str = "/producers/{id}";
    pub const FULL_BY_ID: &str = "/producers/{id}/full";
    pub const EXTERNAL: &str = "/producers/{id}/external";
}

pub mod random {
    pub const ANIME: &str = "/random/anime";
    pub const MANGA: &str = "/random/manga";
    pub const CHARACTERS: &str = "/random/characters";
    pub const PEOPLE: &str = "/random/people";
    pub const USERS: &str = "/random/users";
}

pub mod recommendations {
    pub const ANIME: &str = "/recommendations/anime";
    pub const MANGA: &str = "/recommendations/manga";
}

pub mod reviews {
    pub const ANIME: &str = "/reviews/anime";
    pub const MANGA: &str = "/reviews/manga";
}

pub mod schedules {
    pub const LIST: &str = "/schedules";
}

pub mod seasons {
    pub const LIST: &str = "/seasons";
    pub const NOW: &str = "/seasons/now";
    pub const UPCOMING: &str = "/seasons/upcoming";
    pub const BY_YEAR_AND_SEASON: &str = "/seasons/{year}/{season}";
}

pub mod top {
    pub const ANIME: &str = "/top/anime";
    pub const MANGA: &str = "/top/manga";
    pub const CHARACTERS: &str = "/top/characters";
    pub const PEOPLE: &str = "/top/people";
    pub const REVIEWS: &str = "/top/reviews";
}

pub mod users {
    pub const SEARCH: &str = "/users";
    pub const BY_ID: &str = "/users/userbyid/{id}";
    pub const PROFILE: &str = "/users/{username}";
    pub const FULL_PROFILE: &str = "/users/{username}/full";
    pub const STATISTICS: &str = "/users/{username}/statistics";
    pub const FAVORITES: &str = "/users/{username}/favorites";
    pub const UPDATES: &str = "/users/{username}/userupdates";
    pub const ABOUT: &str = "/users/{username}/about";
    pub const HISTORY: &str = "/users/{username}/history";
    pub const FRIENDS: &str = "/users/{username}/friends";
    pub const REVIEWS: &str = "/users/{username}/reviews";
    pub const RECOMMENDATIONS: &str = "/users/{username}/recommendations";
    pub const CLUBS: &str = "/users/{username}/clubs";
    pub const EXTERNAL: &str = "/users/{username}/external";
}

pub mod watch {
    pub const RECENT_EPISODES: &str = "/watch/episodes";
    pub const POPULAR_EPISODES: &str = "/watch/episodes/popular";
    pub const RECENT_PROMOS: &str = "/watch/promos";
    pub const POPULAR_PROMOS: &str = "/watch/promos/popular";
}

/// Every registered template
pub const ALL: &[&str] = &[
    anime::SEARCH,
    anime::BY_ID,
    anime::FULL_BY_ID,
    anime::CHARACTERS,
    anime::STAFF,
    anime::EPISODES,
    anime::EPISODE_BY_ID,
    anime::NEWS,
    anime::FORUM,
    anime::VIDEOS,
    anime::VIDEO_EPISODES,
    anime::PICTURES,
    anime::STATISTICS,
    anime::MORE_INFO,
    anime::RECOMMENDATIONS,
    anime::USER_UPDATES,
    anime::REVIEWS,
    anime::RELATIONS,
    anime::THEMES,
    anime::EXTERNAL,
    anime::STREAMING,
    manga::SEARCH,
    manga::BY_ID,
    manga::FULL_BY_ID,
    manga::CHARACTERS,
    manga::NEWS,
    manga::TOPICS,
    manga::PICTURES,
    manga::STATISTICS,
    manga::MORE_INFO,
    manga::RECOMMENDATIONS,
    manga::USER_UPDATES,
    manga::REVIEWS,
    manga::RELATIONS,
    manga::EXTERNAL,
    characters::SEARCH,
    characters::BY_ID,
    characters::FULL_BY_ID,
    characters::ANIME,
    characters::MANGA,
    characters::VOICE_ACTORS,
    characters::PICTURES,
    clubs::SEARCH,
    clubs::BY_ID,
    clubs::MEMBERS,
    clubs::STAFF,
    clubs::RELATIONS,
    genres::ANIME,
    genres::MANGA,
    magazines::LIST,
    people::SEARCH,
    people::BY_ID,
    people::FULL_BY_ID,
    people::ANIME,
    people::VOICES,
    people::MANGA,
    people::PICTURES,
    producers::SEARCH,
    producers::BY_ID,
    producers::FULL_BY_ID,
    producers::EXTERNAL,
    random::ANIME,
    random::MANGA,
    random::CHARACTERS,
    random::PEOPLE,
    random::USERS,
    recommendations::ANIME,
    recommendations::MANGA,
    reviews::ANIME,
    reviews::MANGA,
    schedules::LIST,
    seasons::LIST,
    seasons::NOW,
    seasons::UPCOMING,
    seasons::BY_YEAR_AND_SEASON,
    top::ANIME,
    top::MANGA,
    top::CHARACTERS,
    top::PEOPLE,
    top::REVIEWS,
    users::SEARCH,
    users::BY_ID,
    users::PROFILE,
    users::FULL_PROFILE,
    users::STATISTICS,
    users::FAVORITES,
    users::UPDATES,
    users::ABOUT,
    users::HISTORY,
    users::FRIENDS,
    users::REVIEWS,
    users::RECOMMENDATIONS,
    users::CLUBS,
    users::EXTERNAL,
    watch::RECENT_EPISODES,
    watch::POPULAR_EPISODES,
    watch::RECENT_PROMOS,
    watch::POPULAR_PROMOS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::path::placeholders;
    use std::collections::HashSet;

    #[test]
    fn test_templates_are_unique() {
        let unique: HashSet<_> = ALL.iter().collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn test_placeholder_names_unique_within_template() {
        for template in ALL {
            let names = placeholders(template);
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len(), "{template}");
            assert!(template.starts_with('/'), "{template}");
        }
    }
}
