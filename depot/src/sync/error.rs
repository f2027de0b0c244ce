//! Error types for the reconciliation engine.
//!
//! The taxonomy mirrors how failures propagate: manifest errors abort the
//! whole run before any filesystem change, transfer errors are recoverable
//! per attempt until the retry budget runs out, and trash errors are fatal
//! for one file but never abort the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a sync run before any filesystem change.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The index could not be fetched from the server.
    #[error("failed to fetch index for {package} {version}: {reason}")]
    Fetch {
        package: String,
        version: String,
        reason: String,
    },

    /// The index response could not be decoded.
    #[error("failed to parse index response: {0}")]
    Parse(String),

    /// The server answered the request with an error message.
    #[error("{0}")]
    Rejected(String),
}

/// Per-attempt transfer failures.
///
/// The engine counts these as recoverable errors and re-derives the file's
/// classification, so a transient failure is fixed by a later attempt.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The destination file could not be created.
    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The download request failed or returned an error status.
    #[error("server error for {name}: {reason}")]
    Network { name: String, reason: String },
}

/// Failures while moving a file into the trash directory.
#[derive(Debug, Error)]
pub enum TrashError {
    /// The mirrored parent directory under the trash root could not be created.
    #[error("failed to create trash directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be renamed into the trash.
    #[error("failed to move {path} to trash: {source}")]
    Rename {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
