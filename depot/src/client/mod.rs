//! HTTP transport for a depot server.
//!
//! `HttpDepotClient` implements the engine-facing
//! [`PackageClient`](crate::sync::PackageClient) trait and the remaining
//! server operations (listings and uploads) used by the CLI. Requests carry
//! a signed auth query when credentials are configured.

mod auth;
mod error;
mod http;

pub use auth::Credentials;
pub use error::ClientError;
pub use http::HttpDepotClient;
