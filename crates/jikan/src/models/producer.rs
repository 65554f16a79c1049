//! Producers, studios and licensors.

use super::common::{Images, NamedResource, TitleResource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Producer {
    pub mal_id: u32,
    pub url: String,
    pub titles: Vec<TitleResource>,
    pub images: Images,
    pub favorites: u32,
    /// Number of anime credited
    pub count: u32,
    pub established: Option<String>,
    pub about: Option<String>,
}

/// `/producers/{id}/full`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerFull {
    #[serde(flatten)]
    pub producer: Producer,
    pub external: Vec<NamedResource>,
}
