//! Resource facades, one per API resource family.
//!
//! Each facade composes endpoint templates with path and query parameters
//! and delegates to a `ResourceClient`. Built through `JikanClient` they
//! share one cache; built with `new` each gets a private one.

pub mod anime;
pub mod characters;
pub mod clubs;
pub mod genres;
pub mod magazines;
pub mod manga;
pub mod people;
pub mod producers;
pub mod random;
pub mod recommendations;
pub mod reviews;
pub mod schedules;
pub mod seasons;
pub mod top;
pub mod users;
pub mod watch;

#[cfg(test)]
pub(crate) mod testing;

pub use anime::AnimeClient;
pub use characters::CharactersClient;
pub use clubs::ClubsClient;
pub use genres::GenresClient;
pub use magazines::MagazinesClient;
pub use manga::MangaClient;
pub use people::PeopleClient;
pub use producers::ProducersClient;
pub use random::RandomClient;
pub use recommendations::RecommendationsClient;
pub use reviews::ReviewsClient;
pub use schedules::SchedulesClient;
pub use seasons::SeasonsClient;
pub use top::TopClient;
pub use users::UsersClient;
pub use watch::WatchClient;
