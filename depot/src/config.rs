//! Configuration file handling.
//!
//! Settings live in an INI file at `<config dir>/depot/config.ini`:
//!
//! ```ini
//! [server]
//! url = http://depot.example.com
//! identity = jdoe
//! key = secret-access-key
//! ```
//!
//! Command-line flags take precedence over environment variables, which
//! take precedence over this file; the resolution itself happens in the
//! CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Errors loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or parsed.
    #[error("failed to read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The file could not be written.
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parent directory could not be created.
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Server connection settings from the `[server]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the depot server.
    pub url: Option<String>,
    /// Username for authenticated access.
    pub identity: Option<String>,
    /// Access key for authenticated access.
    pub key: Option<String>,
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Server connection settings.
    pub server: ServerConfig,
}

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("depot")
        .join("config.ini")
}

impl ConfigFile {
    /// Load from the default location; a missing file is an empty config.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let get = |key: &str| ini.get_from(Some("server"), key).map(str::to_string);
        Ok(Self {
            server: ServerConfig {
                url: get("url"),
                identity: get("identity"),
                key: get("key"),
            },
        })
    }

    /// Save to the default location, creating parent directories.
    ///
    /// Returns the path written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_file_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let mut ini = Ini::new();
        {
            let mut section = ini.with_section(Some("server"));
            if let Some(url) = &self.server.url {
                section.set("url", url.clone());
            }
            if let Some(identity) = &self.server.identity {
                section.set("identity", identity.clone());
            }
            if let Some(key) = &self.server.key {
                section.set("key", key.clone());
            }
        }
        ini.write_to_file(path).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_as_default() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("config.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let config = ConfigFile {
            server: ServerConfig {
                url: Some("http://depot.example.com".to_string()),
                identity: Some("jdoe".to_string()),
                key: Some("secret".to_string()),
            },
        };
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_section_leaves_missing_keys_unset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "[server]\nurl = http://depot.example.com\n").unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(
            loaded.server.url.as_deref(),
            Some("http://depot.example.com")
        );
        assert!(loaded.server.identity.is_none());
        assert!(loaded.server.key.is_none());
    }

    #[test]
    fn test_unreadable_ini_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "[server\nbroken").unwrap();
        assert!(matches!(
            ConfigFile::load_from(&path),
            Err(ConfigError::Read { .. })
        ));
    }
}
