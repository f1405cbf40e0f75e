//! MediathekViewWeb Series Downloader Library
//!
//! This library provides the core functionality for the mediathek-dl tool,
//! which discovers newly published episodes of configured broadcast programs
//! via the MediathekViewWeb search feed and schedules deduplicated downloads
//! into a season-organized folder tree.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - YAML configuration loading and per-program settings
//! - [`feed`] - Search query construction and RSS feed fetching
//! - [`episode`] - Title pattern extraction and age-based filtering
//! - [`layout`] - Season-folder path resolution and segment sanitization
//! - [`dispatch`] - Deduplicated download dispatch via an external transfer tool
//! - [`runner`] - Per-program orchestration

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dispatch;
pub mod episode;
pub mod feed;
pub mod layout;
pub mod runner;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError, ProgramConfig};
pub use dispatch::{
    DispatchError, DispatchOutcome, Dispatcher, FsLedger, Ledger, Transfer, WgetTransfer,
};
pub use episode::{EpisodeError, ParsedEpisode, parse_pub_date, parse_title, within_max_age};
pub use feed::{DEFAULT_FEED_URL, FeedClient, FeedItem, FetchError};
pub use layout::{ResolvedTarget, resolve_target};
pub use runner::{ProgramRunner, RunStats};
