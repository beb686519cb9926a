//! The organizer's working draft of a gift exchange.

use giftwheel_types::{MatchConfig, MatchRequest, Participant, ParticipantId, Result};
use rust_decimal::Decimal;

use crate::sealer;

/// Mutable intake state for one gift exchange.
///
/// Participants keep a stable id from the moment they are added; names,
/// constraints, the group name, and the budget stay editable until
/// [`seal`](Self::seal) snapshots everything into a [`MatchRequest`].
/// Exclusion groups and forced pairs are recorded by display name — they are
/// validated and resolved to ids only at seal time, so a draft may hold
/// temporarily inconsistent entries while the organizer edits.
#[derive(Debug, Clone, Default)]
pub struct RosterDraft {
    group_name: String,
    budget: Option<Decimal>,
    participants: Vec<Participant>,
    exclusion_groups: Vec<Vec<String>>,
    forced_pairs: Vec<(String, String)>,
}

impl RosterDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_group_name(&mut self, name: impl Into<String>) {
        self.group_name = name.into();
    }

    pub fn set_budget(&mut self, budget: Option<Decimal>) {
        self.budget = budget;
    }

    /// Add a participant row; returns the stable id assigned to it.
    pub fn add_participant(&mut self, name: impl Into<String>) -> ParticipantId {
        let participant = Participant::new(name);
        let id = participant.id;
        self.participants.push(participant);
        id
    }

    /// Rename an existing participant. Returns false if the id is unknown.
    pub fn rename_participant(&mut self, id: ParticipantId, name: impl Into<String>) -> bool {
        match self.participants.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Remove a participant row. Returns false if the id is unknown.
    /// Constraint entries naming the removed participant are left in place;
    /// they surface as `UnknownParticipant` at seal time.
    pub fn remove_participant(&mut self, id: ParticipantId) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != id);
        self.participants.len() < before
    }

    /// Record a group of names forbidden from matching one another.
    pub fn add_exclusion_group(&mut self, members: Vec<String>) {
        self.exclusion_groups.push(members);
    }

    /// Drop an exclusion group by position. Returns false if out of range.
    pub fn remove_exclusion_group(&mut self, index: usize) -> bool {
        if index < self.exclusion_groups.len() {
            self.exclusion_groups.remove(index);
            true
        } else {
            false
        }
    }

    /// Record a mandatory giver→receiver relationship by name.
    pub fn add_forced_pair(&mut self, giver: impl Into<String>, receiver: impl Into<String>) {
        self.forced_pairs.push((giver.into(), receiver.into()));
    }

    /// Drop a forced pair by position. Returns false if out of range.
    pub fn remove_forced_pair(&mut self, index: usize) -> bool {
        if index < self.forced_pairs.len() {
            self.forced_pairs.remove(index);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    #[must_use]
    pub fn budget(&self) -> Option<Decimal> {
        self.budget
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn exclusion_groups(&self) -> &[Vec<String>] {
        &self.exclusion_groups
    }

    #[must_use]
    pub fn forced_pairs(&self) -> &[(String, String)] {
        &self.forced_pairs
    }

    /// Validate the draft and seal it into an immutable [`MatchRequest`].
    pub fn seal(&self, config: MatchConfig) -> Result<MatchRequest> {
        sealer::seal_draft(self, config)
    }
}
