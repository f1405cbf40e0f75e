//! Search feed access: query construction, fetching, and item extraction.

mod client;
mod error;

pub use client::{DEFAULT_FEED_URL, FeedClient, FeedItem};
pub use error::FetchError;
