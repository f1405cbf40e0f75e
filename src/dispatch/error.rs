//! Error types for download dispatch.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while dispatching one download.
///
/// All variants are per-episode: the runner logs them and proceeds to the
/// next item. There is no retry.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// File system error preparing the target (directory creation, metadata).
    #[error("IO error preparing {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The transfer process could not be launched.
    #[error("failed to launch {command}: {source}")]
    Spawn {
        /// The transfer command that failed to start.
        command: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The transfer process exited unsuccessfully.
    #[error("transfer of {url} failed with {status}")]
    TransferFailed {
        /// The source URL being transferred.
        url: String,
        /// The child process exit status.
        status: ExitStatus,
    },

    /// The transfer reported success but left no usable file behind.
    #[error("transfer of {url} left no non-empty file at {path}")]
    MissingOutput {
        /// The source URL being transferred.
        url: String,
        /// The expected output path.
        path: PathBuf,
    },
}

impl DispatchError {
    /// Creates an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a spawn error for a transfer command.
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a transfer-failed error from a child exit status.
    pub fn transfer_failed(url: impl Into<String>, status: ExitStatus) -> Self {
        Self::TransferFailed {
            url: url.into(),
            status,
        }
    }

    /// Creates a missing-output error.
    pub fn missing_output(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingOutput {
            url: url.into(),
            path: path.into(),
        }
    }
}
