//! Signed-request authentication.
//!
//! When an identity and access key are configured, every request carries a
//! query of the form
//! `user=<identity>&hash=<md5(identity + timestamp + key)>&timestamp=<unix-seconds>`.
//! The server recomputes the hash from its copy of the key to validate the
//! request. Public packages need no credentials at all.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::checksum::md5_hex;

/// Identity and access key for a depot server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username the request is signed as.
    pub identity: String,
    /// Shared access key; never sent over the wire.
    pub key: String,
}

impl Credentials {
    /// Compute the auth query for the current time.
    pub fn auth_query(&self) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.auth_query_at(timestamp)
    }

    /// Compute the auth query for a fixed timestamp.
    fn auth_query_at(&self, timestamp: u64) -> String {
        let hash = md5_hex(format!("{}{}{}", self.identity, timestamp, self.key).as_bytes());
        format!("user={}&hash={}&timestamp={}", self.identity, hash, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_query_layout() {
        let credentials = Credentials {
            identity: "jdoe".to_string(),
            key: "secret".to_string(),
        };
        let query = credentials.auth_query_at(1_700_000_000);
        let expected_hash = md5_hex(b"jdoe1700000000secret");
        assert_eq!(
            query,
            format!("user=jdoe&hash={}&timestamp=1700000000", expected_hash)
        );
    }

    #[test]
    fn test_hash_depends_on_the_key() {
        let a = Credentials {
            identity: "jdoe".to_string(),
            key: "secret".to_string(),
        };
        let b = Credentials {
            identity: "jdoe".to_string(),
            key: "other".to_string(),
        };
        assert_ne!(a.auth_query_at(42), b.auth_query_at(42));
    }
}
