//! External transfer invocation.
//!
//! The actual byte transfer is delegated to an external tool (`wget`),
//! invoked with an argument vector rather than a shell-interpolated string
//! so that paths and URLs are never subject to shell interpretation.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::error::DispatchError;

/// Name of the external transfer tool.
const TRANSFER_COMMAND: &str = "wget";

/// Capability for transferring one URL to a local file.
///
/// Abstracted as a trait so tests can substitute a recording double for the
/// external process invocation.
#[async_trait]
pub trait Transfer: Send + Sync + fmt::Debug {
    /// Transfers `url` to `dest`, honoring an optional rate limit.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the transfer cannot be launched or
    /// exits unsuccessfully.
    async fn fetch(
        &self,
        url: &str,
        dest: &Path,
        rate_limit: Option<&str>,
    ) -> Result<(), DispatchError>;
}

/// Transfer implementation invoking `wget` as a child process.
///
/// The rate limit, URL, and output path are passed as separate argv
/// elements; no shell is involved, so quoting in any of them is inert.
#[derive(Debug, Clone, Copy, Default)]
pub struct WgetTransfer;

#[async_trait]
impl Transfer for WgetTransfer {
    async fn fetch(
        &self,
        url: &str,
        dest: &Path,
        rate_limit: Option<&str>,
    ) -> Result<(), DispatchError> {
        let mut command = Command::new(TRANSFER_COMMAND);
        if let Some(rate) = rate_limit {
            command.arg(format!("--limit-rate={rate}"));
        }
        command.arg(url).arg("-O").arg(dest);

        debug!(url = %url, dest = %dest.display(), rate_limit = ?rate_limit, "executing transfer");

        let status = command
            .status()
            .await
            .map_err(|source| DispatchError::spawn(TRANSFER_COMMAND, source))?;

        if !status.success() {
            return Err(DispatchError::transfer_failed(url, status));
        }

        Ok(())
    }
}
