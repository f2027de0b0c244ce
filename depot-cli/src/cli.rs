//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Client for a depot software distribution server.
#[derive(Debug, Parser)]
#[command(name = "depot", version, about = "Client for a depot software distribution server")]
pub struct Cli {
    /// Depot server URL, e.g. http://depot.example.com
    /// (falls back to DEPOT_SERVER, then the config file)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Username for authenticated access; optional for public packages
    /// (falls back to DEPOT_IDENTITY, then the config file)
    #[arg(long, global = true)]
    pub identity: Option<String>,

    /// Access key for authenticated access; optional for public packages
    /// (falls back to DEPOT_KEY, then the config file)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Synchronize the current directory with a package version
    Pull {
        /// Package to pull
        package: String,
        /// Version to pull, or "latest"
        #[arg(default_value = "latest")]
        version: String,
    },

    /// Simulate a synchronization without changing anything
    Verify {
        /// Package to verify against
        package: String,
        /// Version to verify against, or "latest"
        #[arg(default_value = "latest")]
        version: String,
    },

    /// Synchronize interactively, confirming every change
    Patch {
        /// Package to patch from
        package: String,
        /// Version to patch from, or "latest"
        #[arg(default_value = "latest")]
        version: String,
    },

    /// Upload a file as a new version of a package
    Push {
        /// Package to push to
        package: String,
        /// File to upload
        file: PathBuf,
    },

    /// List packages on the server, or all versions of one package
    Remote {
        /// Package whose versions should be listed
        package: Option<String>,
    },

    /// Write a configuration file skeleton
    Init,
}
