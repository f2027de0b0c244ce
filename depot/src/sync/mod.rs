//! Reconciliation of a local directory against a remote package version.
//!
//! The engine walks the package index, classifies every file as unchanged,
//! added, changed, or deleted, asks a pluggable [`SyncPolicy`] whether each
//! change may be applied, downloads approved files with a bounded retry
//! budget, and moves files the index no longer lists into a trash directory
//! instead of deleting them.
//!
//! Collaborators are injected through two narrow traits: [`PackageClient`]
//! for the server and [`Reporter`] for progress output.

pub mod counters;
pub mod engine;
pub mod error;
pub mod policy;
pub mod traits;
pub mod trash;

pub use counters::{RunCounters, SyncReport, SyncVerdict};
pub use engine::{Classification, SyncEngine};
pub use error::{ManifestError, TransferError, TrashError};
pub use policy::{SyncPolicy, UserPrompt};
pub use traits::{PackageClient, Reporter};
pub use trash::{TrashBin, RESERVED_SUBSTRING, TRASH_DIR};
