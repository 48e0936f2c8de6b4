//! YouTube Data API client with transparent pagination
//!
//! * [`api`](./api) - the client; walks continuation pages and merges them
//! * [`params`](./params) - request parameters for the `search` and
//!   `playlistItems` endpoints
//! * [`page`](./page) - parsing single pages and the merged result
//! * [`budget`](./budget) - translating a target count into page requests
//! * [`transport`](./transport) - the HTTP seam
pub mod api;
pub mod budget;
pub mod page;
pub mod params;
pub mod transport;

pub use api::YouTube;
pub use budget::{PageBudget, Target};
pub use page::{Aggregated, Item, Page};
pub use params::{PlaylistItemsParams, SearchParams};
pub use transport::{HttpTransport, RawResponse, Transport};

pub use reqwest::StatusCode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("YouTube API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
