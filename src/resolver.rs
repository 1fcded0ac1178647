use tracing::{debug, warn};

use crate::heuristic::classify;
use crate::profile::ProfileFetcher;
use crate::record::ReputationRecord;
use crate::render::RenderDecision;
use crate::store::ReputationStore;
use crate::types::{now_timestamp, AccountId, Timestamp, MS_PER_DAY};

/// Orchestrates one post's reputation resolution:
/// consult the store, fetch and classify when stale or missing, write the
/// refreshed record back, and reduce it all to a single RenderDecision.
pub struct ReputationResolver {
    store: ReputationStore,
}

impl ReputationResolver {
    pub fn new(store: ReputationStore) -> Self {
        Self { store }
    }

    /// Resolve `id` to a decision. Exactly one store write when a fetch
    /// happens; zero writes on a fresh cache hit or a failed fetch.
    pub fn resolve<F: ProfileFetcher>(&mut self, id: &AccountId, fetcher: &mut F) -> RenderDecision {
        self.resolve_at(id, fetcher, now_timestamp())
    }

    /// Same as [`resolve`] with an explicit clock, so TTL behavior is
    /// testable without waiting twelve hours.
    ///
    /// [`resolve`]: ReputationResolver::resolve
    pub fn resolve_at<F: ProfileFetcher>(
        &mut self,
        id: &AccountId,
        fetcher: &mut F,
        now: Timestamp,
    ) -> RenderDecision {
        if let Some(record) = self.store.get(id) {
            if !record.is_expired(now) {
                debug!(account = %id.0, "cache hit");
                return RenderDecision::from_record(&record);
            }
        }

        let profile = match fetcher.fetch_profile(id) {
            Ok(profile) => profile,
            Err(e) => {
                // Leave any stale record in place for the next attempt.
                warn!(account = %id.0, error = %e, "profile fetch failed");
                return RenderDecision::error("Request failed");
            }
        };

        let age_days = age_days_at(now, profile.creation_ts);
        let likely_bot = classify(&profile.recent_post_ts);

        // One atomic replace; only `verified` survives from the old record.
        let merged = self.store.merge_update(id, |prev| ReputationRecord {
            age_days,
            likely_bot,
            verified: prev.map_or(false, |p| p.verified),
            fetched_at: now,
        });

        match merged {
            Ok(record) => RenderDecision::from_record(&record),
            Err(e) => {
                // The fetch itself succeeded; losing the cache write only
                // costs us a refetch next time.
                warn!(account = %id.0, error = %e, "cache write failed");
                let verified = self.store.get(id).map_or(false, |p| p.verified);
                RenderDecision::from_record(&ReputationRecord {
                    age_days,
                    likely_bot,
                    verified,
                    fetched_at: now,
                })
            }
        }
    }

    pub fn store(&self) -> &ReputationStore {
        &self.store
    }
}

/// Days since `creation_ts` (epoch seconds), rounded up to whole days.
fn age_days_at(now: Timestamp, creation_ts: i64) -> u32 {
    let elapsed_ms = now.millis() - creation_ts * 1000;
    if elapsed_ms <= 0 {
        return 0;
    }
    ((elapsed_ms + MS_PER_DAY - 1) / MS_PER_DAY) as u32
}
