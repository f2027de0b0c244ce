//! Transport error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from talking to the depot server outside a sync run.
///
/// Fetching and downloading during a sync use the engine's own error types;
/// this one covers listings and uploads.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response not read.
    #[error("request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    /// The server answered with an error status.
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be decoded.
    #[error("failed to parse response from {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The server rejected the request with a message.
    #[error("{0}")]
    Rejected(String),

    /// A local file could not be read for upload.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
