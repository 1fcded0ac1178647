use account_reputation::record::ReputationRecord;
use account_reputation::render::{RenderDecision, Rgb};
use account_reputation::store::ReputationStore;
use account_reputation::types::{AccountId, Timestamp};
use account_reputation::verify::VerificationController;
use tempfile::TempDir;

fn seeded(dir: &TempDir, id: &AccountId, likely_bot: bool, verified: bool) -> VerificationController {
    let store = ReputationStore::open(dir.path());
    store
        .put(
            id,
            &ReputationRecord {
                age_days: 25,
                likely_bot,
                verified,
                fetched_at: Timestamp(0),
            },
        )
        .unwrap();
    VerificationController::new(store)
}

#[test]
fn verifying_a_flagged_account_clears_the_warning() {
    let dir = TempDir::new().unwrap();
    let id = AccountId::from_url("/u/falsely-flagged");
    let controller = seeded(&dir, &id, true, false);

    // One toggle: cached record was likely_bot=true, verified=false.
    let decision = controller.toggle_verification(&id);

    assert_eq!(
        decision,
        RenderDecision::Aged {
            age_days: 25,
            verified: true
        }
    );
    assert_eq!(decision.style().color, Rgb(0, 255, 0), "verified renders bright green");

    let rec = ReputationStore::open(dir.path()).get(&id).unwrap();
    assert!(rec.verified);
    assert!(!rec.likely_bot, "manual trust supersedes the heuristic flag");
}

#[test]
fn double_toggle_round_trips_an_unflagged_record() {
    let dir = TempDir::new().unwrap();
    let id = AccountId::from_url("/u/plain");
    let controller = seeded(&dir, &id, false, false);

    let store = ReputationStore::open(dir.path());
    let before = store.get(&id).unwrap();

    let first = controller.toggle_verification(&id);
    assert_eq!(
        first,
        RenderDecision::Aged {
            age_days: 25,
            verified: true
        }
    );

    let second = controller.toggle_verification(&id);
    assert_eq!(
        second,
        RenderDecision::Aged {
            age_days: 25,
            verified: false
        }
    );
    assert_eq!(store.get(&id).unwrap(), before, "double toggle restores the record");
}

#[test]
fn unverifying_does_not_resurrect_a_cleared_bot_flag() {
    let dir = TempDir::new().unwrap();
    let id = AccountId::from_url("/u/once-flagged");
    let controller = seeded(&dir, &id, true, false);

    controller.toggle_verification(&id);
    let decision = controller.toggle_verification(&id);

    // The flag was cleared by the verification and only a refetch can set
    // it again, so the second toggle lands on a plain aged decision.
    assert_eq!(
        decision,
        RenderDecision::Aged {
            age_days: 25,
            verified: false
        }
    );
    let rec = ReputationStore::open(dir.path()).get(&id).unwrap();
    assert!(!rec.likely_bot);
    assert!(!rec.verified);
}

#[test]
fn toggling_an_unseen_account_is_an_error_noop() {
    let dir = TempDir::new().unwrap();
    let store = ReputationStore::open(dir.path());
    let controller = VerificationController::new(store.clone());
    let id = AccountId::from_url("/u/never-resolved");

    let decision = controller.toggle_verification(&id);
    assert_eq!(decision, RenderDecision::error("Unknown account"));
    assert_eq!(store.get(&id), None, "no record is conjured by a toggle");
}

#[test]
fn toggle_uses_previously_known_age_without_refetching() {
    // No fetcher exists anywhere in this test; if toggling needed the
    // network, it could not produce an aged decision at all.
    let dir = TempDir::new().unwrap();
    let id = AccountId::from_url("/u/local-only");
    let controller = seeded(&dir, &id, false, false);

    let decision = controller.toggle_verification(&id);
    assert_eq!(
        decision,
        RenderDecision::Aged {
            age_days: 25,
            verified: true
        }
    );
}
