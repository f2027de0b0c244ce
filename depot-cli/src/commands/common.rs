//! Shared connection resolution for CLI commands.
//!
//! Settings resolve in order: command-line flag, then environment
//! variable, then the configuration file. The server is required;
//! credentials are optional and only sent when both identity and key are
//! present.

use std::env;

use tracing::debug;

use depot::client::{Credentials, HttpDepotClient};
use depot::config::ConfigFile;

use crate::cli::Cli;
use crate::error::CliError;

/// Environment variable naming the depot server URL.
pub const ENV_SERVER: &str = "DEPOT_SERVER";

/// Environment variable naming the identity for authentication.
pub const ENV_IDENTITY: &str = "DEPOT_IDENTITY";

/// Environment variable naming the access key for authentication.
pub const ENV_KEY: &str = "DEPOT_KEY";

/// Resolved server connection settings.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Base URL of the depot server.
    pub server: String,
    /// Credentials, when both identity and key were configured.
    pub credentials: Option<Credentials>,
}

impl Connection {
    /// Resolve from flags, environment, and the config file.
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let config = ConfigFile::load().unwrap_or_default();

        let server = first_set([
            cli.server.clone(),
            env::var(ENV_SERVER).ok(),
            config.server.url.clone(),
        ])
        .ok_or_else(|| {
            CliError::Config(
                "No server specified. Use --server, set DEPOT_SERVER, \
                 or run 'depot init' and fill in the config file."
                    .to_string(),
            )
        })?;

        let identity = first_set([
            cli.identity.clone(),
            env::var(ENV_IDENTITY).ok(),
            config.server.identity.clone(),
        ]);
        let key = first_set([
            cli.key.clone(),
            env::var(ENV_KEY).ok(),
            config.server.key.clone(),
        ]);

        let credentials = match (identity, key) {
            (Some(identity), Some(key)) => Some(Credentials { identity, key }),
            _ => None,
        };

        debug!(
            server = %server,
            authenticated = credentials.is_some(),
            "resolved connection"
        );
        Ok(Self {
            server,
            credentials,
        })
    }

    /// Create an HTTP client for this connection.
    pub fn client(&self) -> HttpDepotClient {
        HttpDepotClient::new(self.server.clone(), self.credentials.clone())
    }

    /// Print the startup banner.
    pub fn banner(&self) {
        match &self.credentials {
            Some(credentials) => println!(
                "depot {} ({}@{})",
                depot::VERSION,
                credentials.identity, self.server
            ),
            None => println!("depot {} ({})", depot::VERSION, self.server),
        }
        println!();
    }
}

/// Pick the first non-empty value in precedence order.
fn first_set(values: [Option<String>; 3]) -> Option<String> {
    values.into_iter().flatten().find(|v| !v.is_empty())
}
