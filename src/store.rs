use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::record::ReputationRecord;
use crate::types::AccountId;

/// Keyed store of reputation records: one JSON file per account under a
/// root directory, named by the account id's storage key.
///
/// The store is deliberately dumb: it serializes, deserializes and
/// timestamps nothing itself. Freshness decisions belong to the resolver.
#[derive(Debug, Clone)]
pub struct ReputationStore {
    root: PathBuf,
}

impl ReputationStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, id: &AccountId) -> PathBuf {
        self.root.join(id.storage_key())
    }

    /// Load the record for `id`. A missing file, an unreadable file and a
    /// malformed entry are all reported as `None`; callers never see an
    /// error from a cache read.
    pub fn get(&self, id: &AccountId) -> Option<ReputationRecord> {
        let path = self.path_for(id);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(account = %id.0, error = %e, "malformed cache entry, treating as miss");
                None
            }
        }
    }

    /// Full record replace. Callers that need to keep `verified` across a
    /// replace must read-modify-write, or go through [`merge_update`].
    ///
    /// [`merge_update`]: ReputationStore::merge_update
    pub fn put(&self, id: &AccountId, record: &ReputationRecord) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.path_for(id), json)
    }

    /// Load, apply `mutator`, store, as one entry point. Keeps the
    /// read-modify-write for `verified`-preservation in a single place so
    /// interleaved resolutions in one process cannot lose an update.
    pub fn merge_update<F>(&self, id: &AccountId, mutator: F) -> io::Result<ReputationRecord>
    where
        F: FnOnce(Option<ReputationRecord>) -> ReputationRecord,
    {
        let updated = mutator(self.get(id));
        self.put(id, &updated)?;
        Ok(updated)
    }

    /// Flip the user override on an existing record. Absent record is a
    /// no-op returning false. Setting true also clears `likely_bot`.
    pub fn set_verified(&self, id: &AccountId, value: bool) -> bool {
        let Some(mut record) = self.get(id) else {
            return false;
        };
        record.set_verified(value);
        match self.put(id, &record) {
            Ok(()) => true,
            Err(e) => {
                warn!(account = %id.0, error = %e, "failed to persist verification flag");
                false
            }
        }
    }
}
