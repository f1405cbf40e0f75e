//! Per-program orchestration: fetch, parse, filter, resolve, dispatch.
//!
//! Programs are processed one at a time, feed items within a program one at
//! a time, and downloads are dispatched synchronously. Nothing below the
//! configuration load is allowed to abort the overall run: per-program fetch
//! failures and per-item malformations are logged and skipped.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::config::ProgramConfig;
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::episode::{EpisodeError, parse_pub_date, parse_title, within_max_age};
use crate::feed::{FeedClient, FeedItem};
use crate::layout::resolve_target;

/// Counters from one full run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    downloaded: usize,
    skipped: usize,
    failed: usize,
}

impl RunStats {
    /// Returns the number of episodes downloaded this run.
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    /// Returns the number of episodes skipped because they already existed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns the number of dispatch failures.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }
}

/// Orchestrates the discovery-and-scheduling pipeline per configured program.
#[derive(Debug)]
pub struct ProgramRunner {
    feed: FeedClient,
    dispatcher: Dispatcher,
    output_root: PathBuf,
}

impl ProgramRunner {
    /// Creates a runner over the given collaborators.
    #[must_use]
    pub fn new(feed: FeedClient, dispatcher: Dispatcher, output_root: PathBuf) -> Self {
        Self {
            feed,
            dispatcher,
            output_root,
        }
    }

    /// Processes every configured program and returns the run counters.
    pub async fn run(&self, programs: &[ProgramConfig]) -> RunStats {
        let mut stats = RunStats::default();
        for program in programs {
            self.process_program(program, &mut stats).await;
        }
        stats
    }

    /// Processes one program: fetch its feed, then walk the items.
    ///
    /// Fetch failures and empty result sets are non-fatal; the program is
    /// treated as having zero episodes.
    async fn process_program(&self, program: &ProgramConfig, stats: &mut RunStats) {
        info!(program = %program.name, "processing program");

        let items = match self
            .feed
            .fetch_program(&program.name, program.min_length)
            .await
        {
            Ok(items) => items,
            Err(err) => {
                error!(program = %program.name, error = %err, "failed to fetch feed data");
                return;
            }
        };

        if items.is_empty() {
            warn!(
                program = %program.name,
                "no episodes found; check the program name or filters"
            );
            return;
        }

        for item in &items {
            self.process_item(program, item, stats).await;
        }
    }

    /// Processes one feed item through parse, filter, resolve, and dispatch.
    async fn process_item(&self, program: &ProgramConfig, item: &FeedItem, stats: &mut RunStats) {
        let parsed = match parse_title(&item.title, program.season_offset) {
            Ok(parsed) => parsed,
            Err(EpisodeError::NoMatch) => {
                debug!(title = %item.title, "skipping: does not match episode naming pattern");
                return;
            }
            Err(err) => {
                warn!(title = %item.title, error = %err, "skipping item");
                return;
            }
        };
        let formatted_title = parsed.formatted_title();

        let published = match parse_pub_date(&item.pub_date) {
            Ok(published) => published,
            Err(err) => {
                warn!(title = %item.title, error = %err, "skipping item");
                return;
            }
        };

        if !within_max_age(published, program.max_age, Utc::now()) {
            info!(
                episode = %formatted_title,
                published = %published.date_naive(),
                "skipping: too old"
            );
            return;
        }

        let target = resolve_target(
            &self.output_root,
            &item.category,
            parsed.season,
            &formatted_title,
            &item.link,
        );

        match self.dispatcher.dispatch(&target, &item.link).await {
            Ok(DispatchOutcome::AlreadyDownloaded) => stats.skipped += 1,
            Ok(DispatchOutcome::Completed) => {
                info!(
                    episode = %formatted_title,
                    target = %target.full_path().display(),
                    "downloaded"
                );
                stats.downloaded += 1;
            }
            Err(err) => {
                error!(episode = %formatted_title, error = %err, "download failed");
                stats.failed += 1;
            }
        }
    }
}
