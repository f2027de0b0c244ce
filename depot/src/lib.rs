//! depot - client for a versioned software distribution server.
//!
//! A depot server stores packages as a series of versions, each described by
//! an index of files with sizes and CRC-32 checksums. This library implements
//! the client side:
//!
//! - [`sync`]: the reconciliation engine that brings a local directory in
//!   line with a package version (add, replace, quarantine)
//! - [`client`]: blocking HTTP transport, including signed requests
//! - [`manifest`]: the parsed package index and remote listing models
//! - [`checksum`]: MD5 content hashes and CRC-32 integrity codes
//! - [`config`]: INI configuration file handling
//! - [`logging`]: tracing subscriber setup for the CLI
//!
//! The engine sees the server only through the narrow
//! [`sync::PackageClient`] trait, which keeps the core reconciliation logic
//! testable without a network.

pub mod checksum;
pub mod client;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod sync;

/// Library version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
