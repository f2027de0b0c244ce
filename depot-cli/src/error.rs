//! Error types for the CLI.

use std::io;

use thiserror::Error;

/// Errors surfaced to the terminal by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration problem with a user-facing message.
    #[error("{0}")]
    Config(String),

    /// Transport error outside a sync run (listings, uploads).
    #[error(transparent)]
    Client(#[from] depot::client::ClientError),

    /// A sync run aborted before touching the filesystem.
    #[error(transparent)]
    Manifest(#[from] depot::sync::ManifestError),

    /// A file could not be fingerprinted for upload.
    #[error(transparent)]
    Checksum(#[from] depot::checksum::ChecksumError),

    /// The configuration file could not be read or written.
    #[error(transparent)]
    ConfigFile(#[from] depot::config::ConfigError),

    /// Local I/O error.
    #[error(transparent)]
    Io(#[from] io::Error),
}
