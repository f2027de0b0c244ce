//! Run-scoped counters and the final sync report.

/// Counters accumulated over a single reconciliation run.
///
/// Owned by the engine and reset at the start of every run; never shared
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Index entries examined (ignore markers excluded).
    pub checked: u64,
    /// Times a file was found missing locally.
    pub added: u64,
    /// Times a local file's size or content differed from the index.
    pub changed: u64,
    /// Local files not listed in the index.
    pub deleted: u64,
    /// Changes rejected by the policy.
    pub skipped: u64,
    /// Recoverable transfer errors (fixable by a retry).
    pub errors: u64,
    /// Per-file failures no retry could fix.
    pub failures: u64,
}

/// Overall outcome of a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncVerdict {
    /// Every entry reconciled cleanly.
    Success,
    /// Recoverable errors occurred but every file ended up correct.
    CompletedWithErrors,
    /// At least one file could not be reconciled.
    Failed,
}

/// Result of one reconciliation run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// The version label the server resolved for this run.
    pub version: String,
    /// Final counter values.
    pub counters: RunCounters,
}

impl SyncReport {
    /// Derive the overall verdict from the counters.
    pub fn verdict(&self) -> SyncVerdict {
        if self.counters.failures > 0 {
            SyncVerdict::Failed
        } else if self.counters.errors > 0 {
            SyncVerdict::CompletedWithErrors
        } else {
            SyncVerdict::Success
        }
    }
}
