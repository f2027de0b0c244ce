//! Trash-based deletion.
//!
//! Files removed during a sync are never unlinked. They are renamed into a
//! `trash` directory at the sync root with their relative path preserved,
//! so a bad deletion can be undone by moving the file back.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::TrashError;

/// Name of the quarantine directory at the sync root.
pub const TRASH_DIR: &str = "trash";

/// Paths containing this substring are never quarantined.
///
/// Guards the tool's own files (binary, config, ignore markers) against
/// being swept into the trash.
pub const RESERVED_SUBSTRING: &str = "depot";

/// Moves unexpected files into the trash directory instead of deleting them.
#[derive(Debug, Clone)]
pub struct TrashBin {
    root: PathBuf,
}

impl TrashBin {
    /// Create a trash bin for the sync directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Move the file at `rel` (relative to the sync root) into the trash,
    /// mirroring its parent directories.
    ///
    /// Paths containing [`RESERVED_SUBSTRING`] are left untouched; that is
    /// a silent no-op, not an error.
    pub fn quarantine(&self, rel: &Path) -> Result<(), TrashError> {
        if rel.to_string_lossy().contains(RESERVED_SUBSTRING) {
            debug!(path = %rel.display(), "refusing to trash reserved path");
            return Ok(());
        }
        let dest = self.root.join(TRASH_DIR).join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| TrashError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::rename(self.root.join(rel), &dest).map_err(|e| TrashError::Rename {
            path: rel.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_quarantine_preserves_relative_path() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("lib").join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("old.jar"), b"bytes").unwrap();

        let bin = TrashBin::new(root.path());
        bin.quarantine(Path::new("lib/sub/old.jar")).unwrap();

        assert!(!nested.join("old.jar").exists());
        let trashed = root.path().join(TRASH_DIR).join("lib/sub/old.jar");
        assert_eq!(fs::read(trashed).unwrap(), b"bytes");
    }

    #[test]
    fn test_reserved_paths_are_refused_silently() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("depot-notes.txt");
        fs::write(&path, b"keep me").unwrap();

        let bin = TrashBin::new(root.path());
        bin.quarantine(Path::new("depot-notes.txt")).unwrap();

        assert!(path.exists());
        assert!(!root.path().join(TRASH_DIR).exists());
    }

    #[test]
    fn test_missing_source_is_a_rename_error() {
        let root = TempDir::new().unwrap();
        let bin = TrashBin::new(root.path());
        assert!(matches!(
            bin.quarantine(Path::new("nope.txt")),
            Err(TrashError::Rename { .. })
        ));
    }
}
