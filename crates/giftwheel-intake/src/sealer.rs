//! Draft validation and sealing.
//!
//! `seal_draft` is the single boundary between the name-keyed, mutable world
//! of the organizer form and the id-keyed, immutable world of the engine.
//! Every pre-matching validation error is rejected here, before the matching
//! loop ever runs.

use std::collections::HashMap;

use giftwheel_types::{
    ExclusionGroup, ExclusionSet, ForcedPair, GiftwheelError, MatchConfig, MatchRequest,
    Participant, ParticipantId, Result, constants,
};
use rust_decimal::Decimal;

use crate::draft::RosterDraft;

/// Validate a draft and produce the immutable request MatchCore consumes.
///
/// Validation order: group metadata, roster, then constraints. Display
/// names are trimmed before any check, and duplicates are rejected outright
/// rather than disambiguated by position — a name-keyed constraint aimed at
/// "the first Alex" would silently mis-aim an exclusion.
pub(crate) fn seal_draft(draft: &RosterDraft, config: MatchConfig) -> Result<MatchRequest> {
    let group_name = draft.group_name().trim();
    if group_name.is_empty() {
        return Err(GiftwheelError::EmptyGroupName);
    }

    if let Some(budget) = draft.budget() {
        if budget < Decimal::ZERO {
            return Err(GiftwheelError::NegativeBudget { budget });
        }
    }

    if draft.participants().is_empty() {
        return Err(GiftwheelError::EmptyRoster);
    }
    if draft.participants().len() > constants::MAX_ROSTER_SIZE {
        return Err(GiftwheelError::RosterTooLarge {
            count: draft.participants().len(),
            max: constants::MAX_ROSTER_SIZE,
        });
    }

    let mut participants = Vec::with_capacity(draft.participants().len());
    let mut by_name: HashMap<String, ParticipantId> = HashMap::new();
    for p in draft.participants() {
        let name = p.name.trim();
        if name.is_empty() {
            return Err(GiftwheelError::EmptyParticipantName);
        }
        if by_name.insert(name.to_string(), p.id).is_some() {
            return Err(GiftwheelError::DuplicateParticipantName {
                name: name.to_string(),
            });
        }
        participants.push(Participant::with_id(p.id, name));
    }

    let resolve = |name: &str| -> Result<ParticipantId> {
        by_name
            .get(name.trim())
            .copied()
            .ok_or_else(|| GiftwheelError::UnknownParticipant {
                name: name.trim().to_string(),
            })
    };

    let mut exclusions = ExclusionSet::new();
    for group in draft.exclusion_groups() {
        let mut members: Vec<ParticipantId> = Vec::with_capacity(group.len());
        for name in group {
            let id = resolve(name)?;
            // A name listed twice in one group is a single member.
            if !members.contains(&id) {
                members.push(id);
            }
        }
        if members.len() < constants::MIN_EXCLUSION_GROUP_SIZE {
            return Err(GiftwheelError::ExclusionGroupTooSmall {
                size: members.len(),
            });
        }
        exclusions.add(ExclusionGroup::new(members));
    }

    let mut forced_pairs = Vec::with_capacity(draft.forced_pairs().len());
    for (giver_name, receiver_name) in draft.forced_pairs() {
        let giver = resolve(giver_name)?;
        let receiver = resolve(receiver_name)?;
        if giver == receiver {
            return Err(GiftwheelError::SelfForcedPair {
                name: giver_name.trim().to_string(),
            });
        }
        forced_pairs.push(ForcedPair::new(giver, receiver));
    }

    tracing::debug!(
        group = group_name,
        participants = participants.len(),
        exclusion_groups = exclusions.len(),
        forced_pairs = forced_pairs.len(),
        "draft sealed"
    );

    Ok(MatchRequest {
        group_name: group_name.to_string(),
        budget: draft.budget(),
        participants,
        exclusions,
        forced_pairs,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(names: &[&str]) -> RosterDraft {
        let mut draft = RosterDraft::new();
        draft.set_group_name("Office 2025");
        for name in names {
            draft.add_participant(*name);
        }
        draft
    }

    fn seal(draft: &RosterDraft) -> Result<MatchRequest> {
        draft.seal(MatchConfig::default())
    }

    #[test]
    fn seals_into_id_keyed_request() {
        let mut d = draft(&["Alice", "Bob", "Carol"]);
        d.add_exclusion_group(vec!["Alice".into(), "Bob".into()]);
        d.add_forced_pair("Bob", "Carol");

        let req = seal(&d).unwrap();
        assert_eq!(req.participants.len(), 3);

        let alice = req.participants[0].id;
        let bob = req.participants[1].id;
        let carol = req.participants[2].id;
        assert!(req.exclusions.is_blocked(alice, bob));
        assert!(!req.exclusions.is_blocked(alice, carol));
        assert_eq!(req.forced_pairs, vec![ForcedPair::new(bob, carol)]);
    }

    #[test]
    fn empty_group_name_rejected() {
        let mut d = draft(&["Alice", "Bob"]);
        d.set_group_name("   ");
        assert!(matches!(seal(&d), Err(GiftwheelError::EmptyGroupName)));
    }

    #[test]
    fn negative_budget_rejected() {
        let mut d = draft(&["Alice", "Bob"]);
        d.set_budget(Some(Decimal::new(-25, 0)));
        assert!(matches!(seal(&d), Err(GiftwheelError::NegativeBudget { .. })));
    }

    #[test]
    fn empty_roster_rejected() {
        let d = draft(&[]);
        assert!(matches!(seal(&d), Err(GiftwheelError::EmptyRoster)));
    }

    #[test]
    fn oversized_roster_rejected() {
        let mut d = draft(&[]);
        for i in 0..=constants::MAX_ROSTER_SIZE {
            d.add_participant(format!("p{i}"));
        }
        assert!(matches!(
            seal(&d),
            Err(GiftwheelError::RosterTooLarge { .. })
        ));
    }

    #[test]
    fn blank_participant_name_rejected() {
        let d = draft(&["Alice", "  "]);
        assert!(matches!(
            seal(&d),
            Err(GiftwheelError::EmptyParticipantName)
        ));
    }

    #[test]
    fn names_trimmed_at_seal() {
        let d = draft(&["  Alice ", "Bob"]);
        let req = seal(&d).unwrap();
        assert_eq!(req.participants[0].name, "Alice");
    }

    #[test]
    fn duplicate_names_rejected() {
        // Decision pinned: duplicates are a user-input error, never
        // disambiguated by position.
        let d = draft(&["Alex", "Bob", " Alex "]);
        let err = seal(&d).unwrap_err();
        assert!(
            matches!(err, GiftwheelError::DuplicateParticipantName { ref name } if name == "Alex"),
            "got {err}"
        );
    }

    #[test]
    fn undersized_exclusion_group_rejected() {
        let mut d = draft(&["Alice", "Bob"]);
        d.add_exclusion_group(vec!["Alice".into()]);
        assert!(matches!(
            seal(&d),
            Err(GiftwheelError::ExclusionGroupTooSmall { size: 1 })
        ));
    }

    #[test]
    fn repeated_name_in_group_counts_once() {
        let mut d = draft(&["Alice", "Bob"]);
        d.add_exclusion_group(vec!["Alice".into(), "Alice".into()]);
        assert!(matches!(
            seal(&d),
            Err(GiftwheelError::ExclusionGroupTooSmall { size: 1 })
        ));
    }

    #[test]
    fn unknown_constraint_name_rejected() {
        let mut d = draft(&["Alice", "Bob"]);
        d.add_forced_pair("Alice", "Mallory");
        let err = seal(&d).unwrap_err();
        assert!(
            matches!(err, GiftwheelError::UnknownParticipant { ref name } if name == "Mallory")
        );
    }

    #[test]
    fn self_forced_pair_rejected() {
        let mut d = draft(&["Alice", "Bob"]);
        d.add_forced_pair("Alice", " Alice ");
        assert!(matches!(
            seal(&d),
            Err(GiftwheelError::SelfForcedPair { .. })
        ));
    }

    #[test]
    fn stale_constraint_after_removal_surfaces_at_seal() {
        let mut d = draft(&["Alice", "Bob", "Carol"]);
        d.add_exclusion_group(vec!["Bob".into(), "Carol".into()]);
        let bob = d.participants()[1].id;
        d.remove_participant(bob);

        assert!(matches!(
            seal(&d),
            Err(GiftwheelError::UnknownParticipant { .. })
        ));
    }
}
