//! Collaborator seams used by the reconciliation engine.

use std::path::Path;

use crate::manifest::Manifest;

use super::error::{ManifestError, TransferError};

/// Narrow view of the depot server as seen by the engine.
///
/// The production implementation is `client::HttpDepotClient`; tests use
/// in-memory fakes.
pub trait PackageClient {
    /// Fetch the file index for a package version.
    fn fetch_manifest(&self, package: &str, version: &str) -> Result<Manifest, ManifestError>;

    /// Download one file of a package version to `dest`, replacing it.
    fn download_file(
        &self,
        package: &str,
        version: &str,
        remote_name: &str,
        dest: &Path,
    ) -> Result<(), TransferError>;
}

impl<C: PackageClient + ?Sized> PackageClient for &C {
    fn fetch_manifest(&self, package: &str, version: &str) -> Result<Manifest, ManifestError> {
        (**self).fetch_manifest(package, version)
    }

    fn download_file(
        &self,
        package: &str,
        version: &str,
        remote_name: &str,
        dest: &Path,
    ) -> Result<(), TransferError> {
        (**self).download_file(package, version, remote_name, dest)
    }
}

/// Sink for human-readable progress lines.
///
/// The engine reports every classification (`+`, `>`, `*`, `-` prefixes)
/// and every terminal per-file outcome through this trait instead of
/// printing directly, so the CLI owns all console formatting.
pub trait Reporter {
    /// Emit one line of progress output.
    fn line(&mut self, text: &str);
}
