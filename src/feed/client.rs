//! HTTP client for the MediathekViewWeb search feed.
//!
//! The client builds a search query from a program's name and minimum-length
//! filter, fetches the feed with a bounded timeout, and yields the raw items.
//! Items missing required fields are skipped with a warning rather than
//! failing the whole program.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::error::FetchError;

/// Base URL of the MediathekViewWeb search feed.
pub const DEFAULT_FEED_URL: &str = "https://mediathekviewweb.de/feed";

/// Timeout for the whole feed request.
const FEED_TIMEOUT_SECS: u64 = 10;

/// One candidate episode as reported by the feed.
///
/// All fields are raw feed text; parsing and validation happen downstream.
#[derive(Debug, Clone)]
pub struct FeedItem {
    /// Raw item title, e.g. `"Tatort (S2/E5)"`.
    pub title: String,
    /// The program name as reported by the feed. Authoritative for the
    /// on-disk folder name.
    pub category: String,
    /// Feed-supplied publication date in an arbitrary format.
    pub pub_date: String,
    /// Download URL, ending in a file extension.
    pub link: String,
}

/// Client for fetching program search results from the feed endpoint.
///
/// Designed to be created once and reused across programs, taking advantage
/// of connection pooling.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient {
    /// Creates a feed client against the default MediathekViewWeb endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_FEED_URL)
    }

    /// Creates a feed client against an explicit base URL (used by tests to
    /// point at a mock server).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FEED_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client with static configuration");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds the search query for a program.
    ///
    /// The query is `"# {name}"`, with `" >{min}"` appended when a positive
    /// minimum length (in minutes) is configured. The length filter is
    /// applied server-side.
    #[must_use]
    pub fn search_query(name: &str, min_length: u32) -> String {
        let mut query = format!("# {name}");
        if min_length > 0 {
            query.push_str(&format!(" >{min_length}"));
        }
        query
    }

    /// Builds the full search URL for a program, URL-encoding the query.
    #[must_use]
    pub fn search_url(&self, name: &str, min_length: u32) -> String {
        let query = Self::search_query(name, min_length);
        format!("{}?query={}", self.base_url, urlencoding::encode(&query))
    }

    /// Fetches the feed for a program and returns its items.
    ///
    /// Items missing any of the four required fields (title, category,
    /// pubDate, link) are skipped with a warning. An empty result is not an
    /// error; the caller decides how to report it.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails at the network level,
    /// the server answers with an error status, or the body is not a
    /// parsable RSS document. All of these are recovered per-program by the
    /// caller.
    pub async fn fetch_program(
        &self,
        name: &str,
        min_length: u32,
    ) -> Result<Vec<FeedItem>, FetchError> {
        let url = self.search_url(name, min_length);
        debug!(url = %url, "fetching search feed");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::network(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(&url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::network(&url, source))?;

        let channel = body
            .parse::<rss::Channel>()
            .map_err(|source| FetchError::parse(&url, source))?;

        let mut items = Vec::new();
        for item in channel.items() {
            let title = item.title();
            let category = item.categories().first().map(rss::Category::name);
            let pub_date = item.pub_date();
            let link = item.link();

            let (Some(title), Some(category), Some(pub_date), Some(link)) =
                (title, category, pub_date, link)
            else {
                warn!("skipping malformed feed item: missing required tags");
                continue;
            };

            items.push(FeedItem {
                title: title.to_string(),
                category: category.to_string(),
                pub_date: pub_date.to_string(),
                link: link.to_string(),
            });
        }

        debug!(program = %name, items = items.len(), "feed fetched");
        Ok(items)
    }
}
