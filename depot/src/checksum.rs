//! Content fingerprints for files exchanged with a depot server.
//!
//! Two fingerprints are used:
//!
//! - [`content_hash`] produces the MD5 hex digest the server uses to verify
//!   that an uploaded file arrived intact.
//! - [`integrity_code`] produces the CRC-32 (IEEE) checksum stored in the
//!   package index and compared against local files during a sync.
//!
//! Both stream the file in fixed-size chunks so arbitrarily large files can
//! be fingerprinted without loading them into memory, and both depend only
//! on file content, never on filesystem metadata.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use thiserror::Error;

/// Chunk size for streaming reads (64 KiB).
const CHUNK_SIZE: usize = 64 * 1024;

/// A file could not be opened or read while fingerprinting.
#[derive(Debug, Error)]
#[error("failed to read {path}: {source}")]
pub struct ChecksumError {
    /// Path of the file that could not be fingerprinted.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Compute the MD5 content hash of a file as a lowercase hex string.
pub fn content_hash(path: &Path) -> Result<String, ChecksumError> {
    let mut hasher = Md5::new();
    stream_file(path, |chunk| hasher.update(chunk))?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the CRC-32 (IEEE) integrity code of a file.
pub fn integrity_code(path: &Path) -> Result<u32, ChecksumError> {
    let mut hasher = crc32fast::Hasher::new();
    stream_file(path, |chunk| hasher.update(chunk))?;
    Ok(hasher.finalize())
}

/// MD5 hex digest of an in-memory buffer (used for request signing).
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}

/// Feed a file through `update` in [`CHUNK_SIZE`] chunks.
fn stream_file(path: &Path, mut update: impl FnMut(&[u8])) -> Result<(), ChecksumError> {
    let mut file = File::open(path).map_err(|e| ChecksumError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| ChecksumError {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            return Ok(());
        }
        update(&buf[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::time::{Duration, SystemTime};

    use filetime::FileTime;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_content_hash_known_value() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hello.txt", b"hello world");
        let hash = content_hash(&path).unwrap();
        assert_eq!(hash, "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_content_hash_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty", b"");
        let hash = content_hash(&path).unwrap();
        assert_eq!(hash, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_integrity_code_known_value() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hello.txt", b"hello world");
        assert_eq!(integrity_code(&path).unwrap(), 0x0d4a_1185);
    }

    #[test]
    fn test_integrity_code_empty_file_is_zero() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty", b"");
        assert_eq!(integrity_code(&path).unwrap(), 0);
    }

    #[test]
    fn test_md5_hex_matches_file_hash() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.bin", b"some bytes");
        assert_eq!(content_hash(&path).unwrap(), md5_hex(b"some bytes"));
    }

    #[test]
    fn test_fingerprints_ignore_mtime() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.bin", b"stable content");

        let before_hash = content_hash(&path).unwrap();
        let before_code = integrity_code(&path).unwrap();

        let old = SystemTime::now() - Duration::from_secs(86_400 * 365);
        filetime::set_file_mtime(&path, FileTime::from_system_time(old)).unwrap();

        assert_eq!(content_hash(&path).unwrap(), before_hash);
        assert_eq!(integrity_code(&path).unwrap(), before_code);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist");
        assert!(content_hash(&path).is_err());
        assert!(integrity_code(&path).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Streaming in chunks must match hashing the whole buffer at once,
        /// including sizes that straddle the chunk boundary.
        #[test]
        fn prop_streamed_crc_matches_in_memory(content in proptest::collection::vec(any::<u8>(), 0..200_000)) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("blob");
            fs::write(&path, &content).unwrap();

            let mut hasher = crc32fast::Hasher::new();
            hasher.update(&content);
            prop_assert_eq!(integrity_code(&path).unwrap(), hasher.finalize());
            prop_assert_eq!(content_hash(&path).unwrap(), md5_hex(&content));
        }
    }
}
