//! Remote package index and listing models.
//!
//! A depot server describes one version of a package through its `_index`
//! endpoint, returning an envelope of the form:
//!
//! ```json
//! { "error": false, "message": "", "version": "3",
//!   "files": [ { "name": "lib/app.jar", "size": 1024, "crc": 12345 } ] }
//! ```
//!
//! When `error` is true, only `message` is meaningful and the whole sync run
//! must abort before touching the filesystem. The listing endpoints
//! (`/artifacts` and `/artifacts/{package}`) use the same envelope shape
//! with `artifacts` or `versions` payloads.

use std::path::PathBuf;

use serde::Deserialize;

use crate::sync::error::ManifestError;

/// Reserved name suffix marking a sibling path as intentionally unmanaged.
///
/// An index entry `conf/local.ini.depotignore` means `conf/local.ini` is
/// neither downloaded nor reported as unexpected during the deletion sweep.
/// The marker itself is never transferred, verified, or deleted.
pub const IGNORE_SUFFIX: &str = ".depotignore";

/// One file described by a package index.
///
/// Identity is `name`; `crc` and `size` describe the expected content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Relative file path using forward-slash separators.
    pub name: String,
    /// CRC-32 (IEEE) checksum of the file content.
    #[serde(default)]
    pub crc: u32,
    /// File size in bytes.
    #[serde(default)]
    pub size: i64,
}

impl ManifestEntry {
    /// True if this entry is an ignore marker rather than a real file.
    pub fn is_ignore_marker(&self) -> bool {
        self.name.ends_with(IGNORE_SUFFIX)
    }

    /// Translate the forward-slash remote name into a platform path.
    pub fn local_rel_path(&self) -> PathBuf {
        self.name.split('/').collect()
    }
}

/// A package version's full file listing.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// The resolved version label (the server answers `latest` with the
    /// concrete version it picked).
    pub version: String,
    /// Files belonging to this version, in server order.
    pub files: Vec<ManifestEntry>,
}

/// Envelope of the `_index` endpoint.
#[derive(Debug, Deserialize)]
struct IndexResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    files: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parse an `_index` response body.
    ///
    /// A payload with `error: true` becomes [`ManifestError::Rejected`]
    /// carrying the server's message; an undecodable payload becomes
    /// [`ManifestError::Parse`].
    pub fn parse(body: &[u8]) -> Result<Self, ManifestError> {
        let response: IndexResponse =
            serde_json::from_slice(body).map_err(|e| ManifestError::Parse(e.to_string()))?;
        if response.error {
            return Err(ManifestError::Rejected(response.message));
        }
        Ok(Self {
            version: response.version,
            files: response.files,
        })
    }
}

/// A package name as returned by the server's package listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageName {
    /// Name used to address the package in all other requests.
    pub name: String,
}

/// One released version of a package.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionInfo {
    /// Package the version belongs to.
    #[serde(default)]
    pub artifact: String,
    /// Version label.
    pub name: String,
    /// Release date as reported by the server.
    #[serde(default)]
    pub date: String,
    /// Human-readable total size.
    #[serde(default)]
    pub size: String,
}

/// Envelope of the `/artifacts` listing.
#[derive(Debug, Deserialize)]
pub(crate) struct PackagesResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub artifacts: Vec<PackageName>,
}

/// Envelope of the `/artifacts/{package}` listing.
#[derive(Debug, Deserialize)]
pub(crate) struct VersionsResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub versions: Vec<VersionInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        let body = br#"{
            "error": false,
            "message": "",
            "version": "3",
            "files": [
                {"name": "a.txt", "size": 10, "crc": 111},
                {"name": "lib/b.jar", "size": 0, "crc": 0}
            ]
        }"#;
        let manifest = Manifest::parse(body).unwrap();
        assert_eq!(manifest.version, "3");
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.files[0].name, "a.txt");
        assert_eq!(manifest.files[0].size, 10);
        assert_eq!(manifest.files[0].crc, 111);
    }

    #[test]
    fn test_parse_index_with_missing_fields_defaults() {
        let manifest = Manifest::parse(br#"{"version": "1"}"#).unwrap();
        assert_eq!(manifest.version, "1");
        assert!(manifest.files.is_empty());
    }

    #[test]
    fn test_server_rejection_carries_message() {
        let body = br#"{"error": true, "message": "Unknown package: foo"}"#;
        match Manifest::parse(body) {
            Err(ManifestError::Rejected(message)) => {
                assert_eq!(message, "Unknown package: foo");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_payload_is_a_parse_error() {
        assert!(matches!(
            Manifest::parse(b"<html>502 Bad Gateway</html>"),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn test_ignore_marker_detection() {
        let marker = ManifestEntry {
            name: "conf/local.ini.depotignore".to_string(),
            crc: 0,
            size: 0,
        };
        let regular = ManifestEntry {
            name: "conf/local.ini".to_string(),
            crc: 1,
            size: 2,
        };
        assert!(marker.is_ignore_marker());
        assert!(!regular.is_ignore_marker());
    }

    #[test]
    fn test_local_rel_path_splits_on_forward_slashes() {
        let entry = ManifestEntry {
            name: "lib/sub/app.jar".to_string(),
            crc: 0,
            size: 0,
        };
        let expected: PathBuf = ["lib", "sub", "app.jar"].iter().collect();
        assert_eq!(entry.local_rel_path(), expected);
    }
}
