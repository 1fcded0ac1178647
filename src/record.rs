use serde::{Serialize, Deserialize};

use crate::types::Timestamp;

/// Cached records go stale 12 hours after the fetch that produced them.
pub const TTL_MS: i64 = 12 * 60 * 60 * 1000;

/// The persisted unit of knowledge about one account.
///
/// A record only ever comes into existence through a complete fetch+classify
/// cycle (or pre-existing cache data in the same layout), so `age_days` and
/// `fetched_at` are always populated together; "never fetched" is simply the
/// absence of a record in the store.
///
/// The serialized field names (`days`, `is_bot`, `verified`, `date`) match
/// the pre-existing cache layout so old entries keep deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationRecord {
    /// Days since account creation, rounded up.
    #[serde(rename = "days")]
    pub age_days: u32,

    /// Heuristic cadence classification. Never true on a verified record.
    #[serde(rename = "is_bot", default)]
    pub likely_bot: bool,

    /// User-asserted override. Manual trust supersedes heuristic suspicion.
    #[serde(default)]
    pub verified: bool,

    /// Wall-clock time of the last successful fetch, epoch milliseconds.
    #[serde(rename = "date")]
    pub fetched_at: Timestamp,
}

impl ReputationRecord {
    /// True once more than `TTL_MS` has elapsed since the last fetch.
    /// Exactly at the boundary the record is still considered fresh.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now.millis() - self.fetched_at.millis() > TTL_MS
    }

    /// Set the override flag, enforcing the invariant that a verified
    /// record never carries a bot flag.
    pub fn set_verified(&mut self, value: bool) {
        self.verified = value;
        if value {
            self.likely_bot = false;
        }
    }
}
