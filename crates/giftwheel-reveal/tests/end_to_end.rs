//! End-to-end integration tests across all three planes.
//!
//! These tests exercise the full exchange lifecycle:
//! Intake (draft → seal) -> `MatchCore` -> Reveal plane (publish → reveal)
//!
//! They verify that the planes work together in realistic scenarios:
//! constrained rosters, per-participant private links, refusal paths, and
//! the store-unavailable boundary.

use chrono::Utc;
use giftwheel_intake::RosterDraft;
use giftwheel_matchcore::match_roster;
use giftwheel_reveal::{AssignmentStore, MemoryStore, RevealLink, RevealResolver};
use giftwheel_types::{GiftwheelError, GroupId, GroupRecord, MatchConfig, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

/// Helper: full exchange pipeline — draft, seal, match, publish.
struct ExchangePipeline {
    resolver: RevealResolver<MemoryStore>,
    record: GroupRecord,
    links: Vec<RevealLink>,
}

impl ExchangePipeline {
    fn run(draft: &RosterDraft, seed: u64) -> Self {
        let request = draft
            .seal(MatchConfig::default())
            .expect("draft should seal");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let assignments = match_roster(&request, &mut rng).expect("matching should succeed");

        let record = GroupRecord::new(
            request.group_name.clone(),
            request.budget,
            assignments,
        );
        let mut resolver = RevealResolver::new(MemoryStore::new());
        let links = resolver.publish(&record).expect("publish should succeed");

        Self {
            resolver,
            record,
            links,
        }
    }
}

fn office_draft() -> RosterDraft {
    let mut draft = RosterDraft::new();
    draft.set_group_name("Office Party 2025");
    draft.set_budget(Some(Decimal::new(25, 0)));
    for name in ["Alice", "Bob", "Carol", "Dave", "Erin"] {
        draft.add_participant(name);
    }
    draft.add_exclusion_group(vec!["Alice".into(), "Bob".into()]);
    draft.add_forced_pair("Carol", "Dave");
    draft
}

#[test]
fn each_participant_reveals_exactly_their_own_match() {
    let pipeline = ExchangePipeline::run(&office_draft(), 11);

    assert_eq!(pipeline.links.len(), 5);
    for (link, pairing) in pipeline.links.iter().zip(&pipeline.record.pairings) {
        let reveal = pipeline.resolver.reveal(link).unwrap();
        assert_eq!(reveal.giver, pairing.giver);
        assert_eq!(reveal.receiver, pairing.receiver);
        assert_ne!(reveal.giver, reveal.receiver);
        assert_eq!(reveal.group_name, "Office Party 2025");
        assert_eq!(reveal.budget, Some(Decimal::new(25, 0)));
    }
}

#[test]
fn constraints_survive_the_whole_pipeline() {
    let pipeline = ExchangePipeline::run(&office_draft(), 23);

    let carol = pipeline
        .record
        .pairings
        .iter()
        .find(|p| p.giver == "Carol")
        .unwrap();
    assert_eq!(carol.receiver, "Dave", "forced pair must survive");

    for pairing in &pipeline.record.pairings {
        assert!(
            !(pairing.giver == "Alice" && pairing.receiver == "Bob"),
            "excluded pair assigned"
        );
        assert!(
            !(pairing.giver == "Bob" && pairing.receiver == "Alice"),
            "excluded pair assigned"
        );
    }
}

#[test]
fn links_survive_rendering_as_paths() {
    // The link a participant receives is a path string; parsing it back
    // must authorize the same reveal.
    let pipeline = ExchangePipeline::run(&office_draft(), 5);

    for link in &pipeline.links {
        let pasted = RevealLink::parse(&link.to_path()).unwrap();
        let reveal = pipeline.resolver.reveal(&pasted).unwrap();
        assert_eq!(
            reveal.receiver,
            pipeline
                .record
                .pairing_for(link.participant_id)
                .unwrap()
                .receiver
        );
    }
}

#[test]
fn wrong_secret_key_reveals_nothing() {
    let pipeline = ExchangePipeline::run(&office_draft(), 7);

    let mut link = pipeline.links[0].clone();
    link.secret_key = giftwheel_types::SecretKey::new();

    let err = pipeline.resolver.reveal(&link).unwrap_err();
    assert!(matches!(err, GiftwheelError::InvalidSecretKey));
    assert!(err.refuses_reveal());
}

#[test]
fn regeneration_replaces_the_old_record() {
    let draft = office_draft();
    let request = draft.seal(MatchConfig::default()).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let first = match_roster(&request, &mut rng).unwrap();
    let second = match_roster(&request, &mut rng).unwrap();

    // Same group id, regenerated pairings: old secret keys stop working.
    let mut record = GroupRecord::new(request.group_name.clone(), request.budget, first);
    let mut resolver = RevealResolver::new(MemoryStore::new());
    let old_links = resolver.publish(&record).unwrap();

    record.pairings = second;
    let new_links = resolver.publish(&record).unwrap();

    assert!(resolver.reveal(&new_links[0]).is_ok());

    // Same participant id, regenerated secret key: the stale link refuses.
    let err = resolver.reveal(&old_links[0]).unwrap_err();
    assert!(matches!(err, GiftwheelError::InvalidSecretKey));
}

// ---------------------------------------------------------------------------
// Store-unavailable boundary
// ---------------------------------------------------------------------------

/// Test double: a store whose medium is down.
struct DownStore;

impl AssignmentStore for DownStore {
    fn save(&mut self, _record: &GroupRecord) -> Result<()> {
        Err(GiftwheelError::StoreUnavailable {
            reason: "connection refused".into(),
        })
    }

    fn load(&self, _group_id: GroupId) -> Result<Option<GroupRecord>> {
        Err(GiftwheelError::StoreUnavailable {
            reason: "connection refused".into(),
        })
    }
}

#[test]
fn store_failure_is_not_not_found() {
    let pipeline = ExchangePipeline::run(&office_draft(), 3);
    let resolver = RevealResolver::new(DownStore);

    let err = resolver.reveal(&pipeline.links[0]).unwrap_err();
    assert!(
        matches!(err, GiftwheelError::StoreUnavailable { .. }),
        "'couldn't check' must stay distinct from 'nothing there', got {err}"
    );
    assert!(!err.refuses_reveal());
}

#[test]
fn publish_surfaces_store_failure() {
    let record = GroupRecord::new("Office 2025", None, vec![]);
    let mut resolver = RevealResolver::new(DownStore);

    assert!(matches!(
        resolver.publish(&record),
        Err(GiftwheelError::StoreUnavailable { .. })
    ));
}

#[test]
fn expiry_refuses_at_the_boundary() {
    let pipeline = ExchangePipeline::run(&office_draft(), 13);

    let expiring = pipeline
        .record
        .clone()
        .with_expiry(Utc::now() + chrono::Duration::days(30));
    let mut resolver = RevealResolver::new(MemoryStore::new());
    let links = resolver.publish(&expiring).unwrap();

    let before = expiring.expires_at.unwrap() - chrono::Duration::seconds(1);
    let after = expiring.expires_at.unwrap() + chrono::Duration::seconds(1);
    assert!(resolver.reveal_at(&links[0], before).is_ok());
    assert!(matches!(
        resolver.reveal_at(&links[0], after),
        Err(GiftwheelError::RevealExpired)
    ));
}
