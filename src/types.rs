use serde::{Serialize, Deserialize};
use std::time::{SystemTime, UNIX_EPOCH};
use sha2::{Digest as ShaDigest, Sha256};

/// Stable key for one account, canonicalized from the profile URL or handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

/// Wall-clock instant in epoch milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

pub const SECS_PER_DAY: i64 = 24 * 3600;
pub const MS_PER_DAY: i64 = SECS_PER_DAY * 1000;

impl AccountId {
    /// Canonicalize a profile URL into a stable key: trim whitespace and
    /// any trailing slash so `/u/andi` and `/u/andi/` index the same record.
    pub fn from_url(url: &str) -> Self {
        let canonical = url.trim().trim_end_matches('/');
        AccountId(canonical.to_string())
    }

    /// Filesystem-safe storage key: hex of the SHA-256 of the canonical id.
    pub fn storage_key(&self) -> String {
        let mut h = Sha256::new();
        h.update(self.0.as_bytes());
        h.finalize().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl Timestamp {
    pub fn millis(self) -> i64 {
        self.0
    }
}

pub fn now_timestamp() -> Timestamp {
    let dur = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    Timestamp(dur.as_millis() as i64)
}
