//! Provides a paginating client for the YouTube Data API.
//!
//! ```ignore
//! use youtube::{SearchParams, Target, YouTube};
//!
//! #[tokio::main]
//! async fn main() {
//!     let youtube = YouTube::with_api_key("API_KEY_HERE".into());
//!     let result = youtube
//!         .search(&SearchParams::query("lofi"), Target::Count(120))
//!         .await
//!         .unwrap();
//!     println!("{} of {} results", result.items.len(), result.total_results);
//! }
//! ```
use std::time::Duration;

use crate::{
    budget::{PageBudget, Target},
    page::{Aggregated, Page},
    params::{EndpointParams, PlaylistItemsParams, SearchParams},
    transport::{HttpTransport, Transport},
    Result,
};

/// The base YouTube Data API v3 URL.
pub const BASE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
/// Pause between two page requests of the same call.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Provides a Rust interface to the paged YouTube list endpoints.
///
/// Each call walks `nextPageToken`s until its page budget runs out or the
/// server stops returning tokens, and merges all pages into one result.
/// Pages are requested strictly one after another.
pub struct YouTube<T = HttpTransport> {
    transport: T,
    api_key: String,
    base_url: String,
    page_delay: Duration,
}

impl YouTube<HttpTransport> {
    pub fn with_api_key(api_key: String) -> Self { Self::with_transport(api_key, HttpTransport::new()) }
}

impl<T: Transport> YouTube<T> {
    pub fn with_transport(api_key: String, transport: T) -> Self {
        YouTube {
            transport,
            api_key,
            base_url: BASE_API_URL.to_owned(),
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    /// Sets the pause between consecutive page requests.
    pub fn page_delay(self, page_delay: Duration) -> Self { Self { page_delay, ..self } }

    /// Points the client at a different API root.
    pub fn base_url<S: Into<String>>(self, base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..self
        }
    }

    /// ```
    /// # use youtube::YouTube;
    /// let youtube = YouTube::with_api_key(String::new());
    /// assert_eq!(youtube.endpoint_url("search"), "https://www.googleapis.com/youtube/v3/search");
    /// ```
    #[inline]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// `GET /search`, merged over as many pages as `target` allows.
    pub async fn search(&self, params: &SearchParams, target: Target) -> Result<Aggregated> {
        self.aggregate(params, target).await
    }

    /// `GET /playlistItems`, merged over as many pages as `target` allows.
    ///
    /// Fails with `Error::InvalidArgument` before making any request unless
    /// exactly one of `id` and `playlist_id` is set.
    pub async fn playlist_items(&self, params: &PlaylistItemsParams, target: Target) -> Result<Aggregated> {
        self.aggregate(params, target).await
    }

    async fn aggregate<P>(&self, params: &P, target: Target) -> Result<Aggregated>
    where
        P: EndpointParams + Sync,
    {
        params.validate()?;

        let budget = PageBudget::for_target(target);
        let url = self.endpoint_url(P::PATH);
        let filters = params.to_query()?;
        log::debug!(
            "Fetching {} with page size {} and at most {} page(s)",
            P::PATH,
            budget.page_size,
            budget.max_pages
        );

        let mut page_token = params.page_token().map(String::from);
        let mut total_results = None;
        let mut items = Vec::new();
        let mut pages = 0;

        let (status, raw) = loop {
            let mut query = filters.clone();
            query.push(("key".into(), self.api_key.clone()));
            query.push(("maxResults".into(), budget.page_size.to_string()));
            if let Some(token) = &page_token {
                query.push(("pageToken".into(), token.clone()));
            }

            let response = self.transport.get(&url, &query).await?;
            if !response.status.is_success() {
                log::warn!("{} page {} returned {}", P::PATH, pages + 1, response.status);
            }
            let page = Page::parse(response.status, &response.body)?;
            pages += 1;

            if total_results.is_none() {
                log::info!("Total results: {}", page.total_results);
                total_results = Some(page.total_results);
            }
            log::info!(
                "{} {} ({} items)",
                P::PATH,
                progress(pages, target, &budget),
                page.items.len()
            );

            items.extend(page.items);
            page_token = page.next_page_token;
            if page_token.is_none() || pages >= budget.max_pages {
                break (response.status, page.raw);
            }

            tokio::time::sleep(self.page_delay).await;
        };

        log::info!("Fetched results: {}", items.len());
        Ok(Aggregated {
            items,
            total_results: total_results.unwrap_or_default(),
            status,
            pages,
            raw,
        })
    }
}

fn progress(pages: usize, target: Target, budget: &PageBudget) -> String {
    match target {
        Target::All | Target::Count(0) => format!("page {}", pages),
        Target::Count(_) => format!("page {}/{}", pages, budget.max_pages),
    }
}
