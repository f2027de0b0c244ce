//! The reconciliation engine.
//!
//! Compares a remote package index against the local directory tree,
//! classifies every file as unchanged, added, changed, or deleted, asks the
//! policy whether each change may be applied, downloads approved files with
//! a bounded retry budget, and quarantines files the index no longer lists.
//!
//! A transfer is never trusted on its own: after every download the entry
//! is classified again from the bytes on disk, and only an `Unchanged`
//! result ends the attempt loop. This verify-after-write check is what
//! makes a run idempotent and lets transient download failures heal
//! themselves within the attempt budget.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::checksum;
use crate::manifest::{ManifestEntry, IGNORE_SUFFIX};

use super::counters::{RunCounters, SyncReport};
use super::error::ManifestError;
use super::policy::SyncPolicy;
use super::traits::{PackageClient, Reporter};
use super::trash::{TrashBin, TRASH_DIR};

/// Maximum classification attempts per index entry.
const MAX_ATTEMPTS: u32 = 5;

/// Separator line framing the per-file output.
const SEPARATOR: &str = "------------------------------------------";

/// How an index entry relates to the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Size and checksum match; nothing to do.
    Unchanged,
    /// No local file exists.
    Added,
    /// Local size differs from the index.
    ModifiedSize,
    /// Sizes match but the checksum differs or could not be computed.
    ModifiedContent,
}

/// Reconciles a local directory against a remote package version.
///
/// One engine instance performs one run at a time, strictly sequentially;
/// the counters and the expected-name set are owned by the engine and reset
/// at the start of every run.
pub struct SyncEngine<C: PackageClient> {
    client: C,
    root: PathBuf,
    policy: SyncPolicy,
    trash: TrashBin,
    counters: RunCounters,
    expected: HashSet<String>,
}

impl<C: PackageClient> SyncEngine<C> {
    /// Create an engine syncing `root` against packages served by `client`.
    pub fn new(client: C, root: impl Into<PathBuf>, policy: SyncPolicy) -> Self {
        let root = root.into();
        Self {
            client,
            trash: TrashBin::new(root.clone()),
            root,
            policy,
            counters: RunCounters::default(),
            expected: HashSet::new(),
        }
    }

    /// Run one reconciliation of `package` at `version`.
    ///
    /// Aborts with a [`ManifestError`] before any filesystem change if the
    /// index cannot be fetched or the server rejects the request. Per-file
    /// problems never abort the run; they are counted and reflected in the
    /// report's verdict.
    pub fn run(
        &mut self,
        package: &str,
        version: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport, ManifestError> {
        self.counters = RunCounters::default();
        self.expected.clear();

        reporter.line(&format!("Synchronizing: {}", package));
        let manifest = self.client.fetch_manifest(package, version)?;
        reporter.line(&format!("Version: {}", manifest.version));
        reporter.line(SEPARATOR);

        for entry in &manifest.files {
            self.expected.insert(entry.name.clone());
            if entry.is_ignore_marker() {
                continue;
            }
            self.expected.insert(format!("{}{}", entry.name, IGNORE_SUFFIX));
            self.counters.checked += 1;
            self.sync_entry(package, version, entry, reporter);
        }

        let root = self.root.clone();
        self.sweep(&root, "", reporter);

        Ok(SyncReport {
            version: manifest.version,
            counters: self.counters.clone(),
        })
    }

    /// Reconcile one index entry.
    ///
    /// Each attempt re-derives the classification from disk; the loop ends
    /// on `Unchanged`, on a policy rejection, on a fatal directory failure,
    /// or when the attempt budget is spent (one fatal failure, run
    /// continues).
    fn sync_entry(
        &mut self,
        package: &str,
        version: &str,
        entry: &ManifestEntry,
        reporter: &mut dyn Reporter,
    ) {
        let local = self.root.join(entry.local_rel_path());

        for _ in 0..MAX_ATTEMPTS {
            let class = classify(&local, entry);
            match class {
                Classification::Unchanged => return,
                Classification::Added => {
                    self.counters.added += 1;
                    reporter.line(&format!("+ {}", entry.name));
                }
                Classification::ModifiedSize => {
                    self.counters.changed += 1;
                    reporter.line(&format!("> {}", entry.name));
                }
                Classification::ModifiedContent => {
                    self.counters.changed += 1;
                    reporter.line(&format!("* {}", entry.name));
                }
            }

            if !self.policy.decide() {
                self.counters.skipped += 1;
                return;
            }

            if class == Classification::Added {
                if let Some(parent) = local.parent() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        self.counters.failures += 1;
                        reporter.line(&format!(
                            "Cannot create parent directories for: {} ({})",
                            entry.name, e
                        ));
                        return;
                    }
                }
            }

            if let Err(e) = self
                .client
                .download_file(package, version, &entry.name, &local)
            {
                self.counters.errors += 1;
                reporter.line(&e.to_string());
                debug!(name = %entry.name, error = %e, "transfer failed, re-checking");
            }
        }

        self.counters.failures += 1;
        reporter.line(&format!("Failed to update file: {}", entry.name));
    }

    /// Walk the local tree and quarantine files the index does not list.
    ///
    /// `prefix` is the forward-slash relative path of `dir`: empty at the
    /// root, `/`-terminated below it. A path whose ignore-marker sibling is
    /// in the expected set is skipped entirely (for a directory, the whole
    /// subtree), and the trash directory at the root is never descended
    /// into or reported.
    fn sweep(&mut self, dir: &Path, prefix: &str, reporter: &mut dyn Reporter) {
        let read = match fs::read_dir(dir) {
            Ok(read) => read,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        let mut entries: Vec<(String, bool)> = read
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let is_dir = entry.file_type().ok()?.is_dir();
                Some((entry.file_name().to_string_lossy().into_owned(), is_dir))
            })
            .collect();
        entries.sort();

        for (name, is_dir) in entries {
            let rel = format!("{}{}", prefix, name);
            if self.expected.contains(&format!("{}{}", rel, IGNORE_SUFFIX)) {
                continue;
            }
            if rel == TRASH_DIR {
                continue;
            }
            if is_dir {
                self.sweep(&dir.join(&name), &format!("{}/", rel), reporter);
            } else if !self.expected.contains(&rel) {
                self.counters.deleted += 1;
                reporter.line(&format!("- {}", rel));
                if self.policy.decide() {
                    if let Err(e) = self.trash.quarantine(Path::new(&rel)) {
                        self.counters.failures += 1;
                        reporter.line(&e.to_string());
                    }
                } else {
                    self.counters.skipped += 1;
                }
            }
        }
    }
}

/// Classify an index entry against the file on disk.
fn classify(local: &Path, entry: &ManifestEntry) -> Classification {
    let meta = match fs::symlink_metadata(local) {
        Ok(meta) => meta,
        Err(_) => return Classification::Added,
    };
    if meta.len() as i64 != entry.size {
        return Classification::ModifiedSize;
    }
    match checksum::integrity_code(local) {
        Ok(code) if code == entry.crc => Classification::Unchanged,
        _ => Classification::ModifiedContent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn entry_for(name: &str, content: &[u8]) -> ManifestEntry {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(content);
        ManifestEntry {
            name: name.to_string(),
            crc: hasher.finalize(),
            size: content.len() as i64,
        }
    }

    #[test]
    fn test_classify_missing_file_as_added() {
        let dir = TempDir::new().unwrap();
        let entry = entry_for("a.txt", b"content");
        assert_eq!(
            classify(&dir.path().join("a.txt"), &entry),
            Classification::Added
        );
    }

    #[test]
    fn test_classify_matching_file_as_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"content").unwrap();
        let entry = entry_for("a.txt", b"content");
        assert_eq!(classify(&path, &entry), Classification::Unchanged);
    }

    #[test]
    fn test_classify_size_mismatch_before_checksum() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"longer content").unwrap();
        let entry = entry_for("a.txt", b"content");
        assert_eq!(classify(&path, &entry), Classification::ModifiedSize);
    }

    #[test]
    fn test_classify_same_size_different_bytes_as_content_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"contenB").unwrap();
        let entry = entry_for("a.txt", b"content");
        assert_eq!(classify(&path, &entry), Classification::ModifiedContent);
    }
}
