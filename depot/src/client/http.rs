//! Blocking HTTP client for a depot server.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Body, Client, Response};
use reqwest::StatusCode;
use tracing::debug;

use crate::manifest::{Manifest, PackageName, PackagesResponse, VersionInfo, VersionsResponse};
use crate::sync::error::{ManifestError, TransferError};
use crate::sync::traits::PackageClient;

use super::auth::Credentials;
use super::error::ClientError;

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP access to a depot server.
///
/// All methods are blocking; the engine is strictly sequential and never
/// issues more than one request at a time.
#[derive(Debug, Clone)]
pub struct HttpDepotClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl HttpDepotClient {
    /// Create a client for the given server URL, e.g. `http://depot.example.com`.
    pub fn new(server: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self::with_timeout(server, credentials, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(
        server: impl Into<String>,
        credentials: Option<Credentials>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        let mut base_url = server.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Build a full URL for `path`, appending the auth query when configured.
    fn url(&self, path: &str) -> String {
        match &self.credentials {
            Some(credentials) => {
                format!("{}{}?{}", self.base_url, path, credentials.auth_query())
            }
            None => format!("{}{}", self.base_url, path),
        }
    }

    fn get(&self, url: &str) -> Result<Response, ClientError> {
        let response = self.client.get(url).send().map_err(|e| ClientError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        Ok(response)
    }

    /// List all packages on the server.
    pub fn list_packages(&self) -> Result<Vec<PackageName>, ClientError> {
        let url = self.url("/artifacts");
        let body = self.get(&url)?.bytes().map_err(|e| ClientError::Http {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        let data: PackagesResponse =
            serde_json::from_slice(&body).map_err(|e| ClientError::Parse {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        if data.error {
            return Err(ClientError::Rejected(data.message));
        }
        Ok(data.artifacts)
    }

    /// List all versions of a package.
    pub fn list_versions(&self, package: &str) -> Result<Vec<VersionInfo>, ClientError> {
        let url = self.url(&format!("/artifacts/{}", package));
        let body = self.get(&url)?.bytes().map_err(|e| ClientError::Http {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        let data: VersionsResponse =
            serde_json::from_slice(&body).map_err(|e| ClientError::Parse {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        if data.error {
            return Err(ClientError::Rejected(data.message));
        }
        Ok(data.versions)
    }

    /// Upload a new version of `package`, passing `content_hash` so the
    /// server can verify the body arrived intact.
    ///
    /// Returns the server's response status; the server answers with a
    /// non-success status when the hash does not match what it received.
    pub fn upload<R>(
        &self,
        package: &str,
        reader: R,
        len: u64,
        content_hash: &str,
    ) -> Result<StatusCode, ClientError>
    where
        R: Read + Send + 'static,
    {
        let url = match &self.credentials {
            Some(credentials) => format!(
                "{}/artifacts/{}?contenthash={}&{}",
                self.base_url,
                package,
                content_hash,
                credentials.auth_query()
            ),
            None => format!(
                "{}/artifacts/{}?contenthash={}",
                self.base_url, package, content_hash
            ),
        };
        debug!(package, len, "uploading");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/zip")
            .body(Body::sized(reader, len))
            .send()
            .map_err(|e| ClientError::Http {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        Ok(response.status())
    }
}

impl PackageClient for HttpDepotClient {
    fn fetch_manifest(&self, package: &str, version: &str) -> Result<Manifest, ManifestError> {
        let url = self.url(&format!("/artifacts/{}/{}/_index", package, version));
        debug!(package, version, "fetching package index");
        let fetch_err = |reason: String| ManifestError::Fetch {
            package: package.to_string(),
            version: version.to_string(),
            reason,
        };
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;
        if !response.status().is_success() {
            return Err(fetch_err(format!("status {}", response.status())));
        }
        let body = response.bytes().map_err(|e| fetch_err(e.to_string()))?;
        Manifest::parse(&body)
    }

    fn download_file(
        &self,
        package: &str,
        version: &str,
        remote_name: &str,
        dest: &Path,
    ) -> Result<(), TransferError> {
        let url = self.url(&format!("/artifacts/{}/{}/{}", package, version, remote_name));
        debug!(name = remote_name, "downloading");
        let network_err = |reason: String| TransferError::Network {
            name: remote_name.to_string(),
            reason,
        };
        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_err(e.to_string()))?;
        if !response.status().is_success() {
            return Err(network_err(format!("status {}", response.status())));
        }

        // The destination is created only after a successful response, so a
        // dead server never truncates an existing local file.
        let file = File::create(dest).map_err(|e| TransferError::Create {
            path: dest.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        io::copy(&mut response, &mut writer).map_err(|e| network_err(e.to_string()))?;
        writer.flush().map_err(|e| TransferError::Create {
            path: dest.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}
