use tracing::warn;

use crate::render::RenderDecision;
use crate::store::ReputationStore;
use crate::types::AccountId;

/// Applies and reverts the user's manual-trust override. Invoked from the
/// host's UI callback, never from the resolution path.
pub struct VerificationController {
    store: ReputationStore,
}

impl VerificationController {
    pub fn new(store: ReputationStore) -> Self {
        Self { store }
    }

    /// Flip the `verified` flag on an already-seen account and recompute
    /// the decision from the stored record. Pure local state change: the
    /// previously known `age_days` is reused, no fetch happens.
    ///
    /// Toggling an account with no record is a no-op that reports an error
    /// decision; the host should only wire this to annotations it has
    /// already rendered.
    pub fn toggle_verification(&self, id: &AccountId) -> RenderDecision {
        let Some(record) = self.store.get(id) else {
            warn!(account = %id.0, "verification toggle on unseen account");
            return RenderDecision::error("Unknown account");
        };

        let new_value = !record.verified;
        if !self.store.set_verified(id, new_value) {
            return RenderDecision::error("Unknown account");
        }

        match self.store.get(id) {
            Some(updated) => RenderDecision::from_record(&updated),
            None => RenderDecision::error("Unknown account"),
        }
    }
}
