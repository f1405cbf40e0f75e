//! Deduplicated download dispatch.
//!
//! Given a resolved target path and a source URL, the dispatcher checks the
//! dedup ledger (the filesystem itself: a present file means "already
//! handled"), creates missing parent directories, invokes the external
//! transfer, and verifies that the transfer actually produced a non-empty
//! file before counting the episode as downloaded.

mod error;
mod transfer;

pub use error::DispatchError;
pub use transfer::{Transfer, WgetTransfer};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::layout::ResolvedTarget;

/// Capability for the dedup existence check.
///
/// The filesystem is the sole record of previously completed downloads.
/// Abstracted so tests can substitute an in-memory double.
pub trait Ledger: Send + Sync + fmt::Debug {
    /// Returns true when a file already exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Ledger backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLedger;

impl Ledger for FsLedger {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Outcome of a dispatch attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The target file already existed; no I/O was performed.
    AlreadyDownloaded,
    /// The transfer completed and left a non-empty file at the target.
    Completed,
}

/// Dispatches downloads for resolved targets.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    ledger: Arc<dyn Ledger>,
    transfer: Arc<dyn Transfer>,
    rate_limit: Option<String>,
}

impl Dispatcher {
    /// Creates a dispatcher using the real filesystem and the external
    /// transfer tool.
    ///
    /// `rate_limit` is the optional transfer rate cap from the configuration
    /// (e.g. `"250k"`); `None` means unlimited.
    #[must_use]
    pub fn new(rate_limit: Option<String>) -> Self {
        Self::with_parts(Arc::new(FsLedger), Arc::new(WgetTransfer), rate_limit)
    }

    /// Creates a dispatcher from explicit capabilities (used by tests).
    #[must_use]
    pub fn with_parts(
        ledger: Arc<dyn Ledger>,
        transfer: Arc<dyn Transfer>,
        rate_limit: Option<String>,
    ) -> Self {
        Self {
            ledger,
            transfer,
            rate_limit,
        }
    }

    /// Returns the configured rate limit, if any.
    #[must_use]
    pub fn rate_limit(&self) -> Option<&str> {
        self.rate_limit.as_deref()
    }

    /// Dispatches one episode download.
    ///
    /// Skips with [`DispatchOutcome::AlreadyDownloaded`] when the target
    /// file exists. Otherwise creates the season folder, runs the transfer,
    /// and verifies a non-empty file appeared at the target.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when directory creation fails, the transfer
    /// cannot be launched or exits unsuccessfully, or the transfer reported
    /// success without producing a non-empty file.
    pub async fn dispatch(
        &self,
        target: &ResolvedTarget,
        url: &str,
    ) -> Result<DispatchOutcome, DispatchError> {
        let full_path = target.full_path();

        if self.ledger.exists(&full_path) {
            info!(target = %full_path.display(), "already downloaded");
            return Ok(DispatchOutcome::AlreadyDownloaded);
        }

        tokio::fs::create_dir_all(&target.folder)
            .await
            .map_err(|source| DispatchError::io(&target.folder, source))?;

        debug!(url = %url, target = %full_path.display(), "starting transfer");
        self.transfer
            .fetch(url, &full_path, self.rate_limit.as_deref())
            .await?;

        // The transfer tool's exit status alone is not trusted: verify that
        // a non-empty file actually landed at the target.
        match tokio::fs::metadata(&full_path).await {
            Ok(meta) if meta.len() > 0 => Ok(DispatchOutcome::Completed),
            Ok(_) | Err(_) => Err(DispatchError::missing_output(url, &full_path)),
        }
    }
}
