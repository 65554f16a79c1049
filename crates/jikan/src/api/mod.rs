//! Jikan API v4 plumbing: endpoints, path and query handling, transports,
//! request execution and the aggregate client.

pub mod client;
pub mod endpoints;
pub mod path;
pub mod query;
pub mod resource;
pub mod transport;
pub mod types;

pub use client::{ClientOptions, JikanClient};
pub use path::PathParams;
pub use query::QueryParams;
pub use resource::ResourceClient;
pub use transport::{HttpTransport, Method, RawResponse, Request, Transport};
pub use types::{ApiErrorBody, JikanPaginatedResponse, JikanResponse, Pagination};
