//! The init command: write a configuration file skeleton.

use depot::config::{config_file_path, ConfigFile, ServerConfig};

use crate::error::CliError;

/// Write a config skeleton if none exists and print its path.
pub fn run() -> Result<(), CliError> {
    let path = config_file_path();
    if path.exists() {
        println!("Configuration file already exists: {}", path.display());
        return Ok(());
    }

    let config = ConfigFile {
        server: ServerConfig {
            url: Some("http://depot.example.com".to_string()),
            identity: None,
            key: None,
        },
    };
    let written = config.save()?;

    println!("Wrote configuration skeleton: {}", written.display());
    println!("Fill in url, identity, and key in the [server] section.");
    Ok(())
}
