//! The sealed, immutable input to the matching engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExclusionSet, ForcedPair, MatchConfig, Participant, ParticipantId};

/// A validated matching request.
///
/// Produced by `giftwheel-intake` once the organizer's draft passes
/// validation, then handed to MatchCore by reference. The engine keeps no
/// ambient state: everything a run needs travels inside this value, and
/// constraints are already resolved to participant ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    /// Display name of the gift exchange.
    pub group_name: String,
    /// Optional per-gift budget.
    pub budget: Option<Decimal>,
    /// The full roster, in the order the organizer entered it.
    pub participants: Vec<Participant>,
    /// Pairs that must not match each other.
    pub exclusions: ExclusionSet,
    /// Directed pairs that must appear in the result.
    pub forced_pairs: Vec<ForcedPair>,
    /// Matching loop tuning.
    pub config: MatchConfig,
}

impl MatchRequest {
    /// Look up a roster member by id.
    #[must_use]
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_lookup() {
        let alice = Participant::new("Alice");
        let bob = Participant::new("Bob");
        let alice_id = alice.id;
        let request = MatchRequest {
            group_name: "Office 2025".into(),
            budget: None,
            participants: vec![alice, bob],
            exclusions: ExclusionSet::new(),
            forced_pairs: vec![],
            config: MatchConfig::default(),
        };

        assert_eq!(request.participant(alice_id).unwrap().name, "Alice");
        assert!(request.participant(ParticipantId::new()).is_none());
    }
}
