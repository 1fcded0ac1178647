use std::collections::HashMap;

use thiserror::Error;

use crate::types::AccountId;

/// What the scraping collaborator extracts from an account's profile page.
/// The engine requires nothing about how the page was parsed.
#[derive(Debug, Clone)]
pub struct ProfileData {
    /// Account creation time, epoch seconds.
    pub creation_ts: i64,
    /// Recent post times, epoch seconds, most-recent-first, at most 10.
    pub recent_post_ts: Vec<i64>,
}

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Network failure, non-2xx response, or the page did not load.
    #[error("request failed")]
    RequestFailed,
    /// The page loaded but the embedded profile data could not be extracted.
    #[error("malformed profile page")]
    MalformedPage,
}

/// The fetch collaborator seam. A real implementation scrapes the profile
/// page; tests and the demo binary script one in memory.
pub trait ProfileFetcher {
    fn fetch_profile(&mut self, id: &AccountId) -> Result<ProfileData, FetchError>;
}

/// Scripted in-memory fetcher. Each account id maps to a canned outcome;
/// unknown accounts fail like a dead network would. Counts calls per
/// account so tests can assert that cache hits skip the fetch entirely.
pub struct MemoryFetcher {
    outcomes: HashMap<AccountId, Result<ProfileData, FetchError>>,
    calls: HashMap<AccountId, usize>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            calls: HashMap::new(),
        }
    }

    pub fn stage_profile(&mut self, id: AccountId, profile: ProfileData) {
        self.outcomes.insert(id, Ok(profile));
    }

    pub fn stage_failure(&mut self, id: AccountId) {
        self.outcomes.insert(id, Err(FetchError::RequestFailed));
    }

    /// How many times `fetch_profile` was invoked for `id`.
    pub fn calls(&self, id: &AccountId) -> usize {
        self.calls.get(id).copied().unwrap_or(0)
    }
}

impl Default for MemoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileFetcher for MemoryFetcher {
    fn fetch_profile(&mut self, id: &AccountId) -> Result<ProfileData, FetchError> {
        *self.calls.entry(id.clone()).or_insert(0) += 1;
        match self.outcomes.get(id) {
            Some(outcome) => outcome.clone(),
            None => Err(FetchError::RequestFailed),
        }
    }
}
