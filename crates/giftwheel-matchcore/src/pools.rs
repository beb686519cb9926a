//! Per-attempt working pools of available givers and receivers.
//!
//! Each matching attempt owns its own `Pools`, copied fresh from the request
//! roster; nothing outside the attempt can observe or mutate them. The two
//! pools shrink independently — a participant consumed as a forced giver is
//! still free to receive, and vice versa.

use giftwheel_types::{ExclusionSet, Participant, ParticipantId};

/// Available giver and receiver pools for one matching attempt.
#[derive(Debug, Clone)]
pub struct Pools {
    givers: Vec<Participant>,
    receivers: Vec<Participant>,
}

impl Pools {
    /// Both pools start as the full roster, in roster order.
    #[must_use]
    pub fn from_roster(roster: &[Participant]) -> Self {
        Self {
            givers: roster.to_vec(),
            receivers: roster.to_vec(),
        }
    }

    /// Remove and return the giver with `id`. `None` when the id is unknown
    /// or the giver was already consumed — callers treat both as an attempt
    /// failure.
    pub fn take_giver(&mut self, id: ParticipantId) -> Option<Participant> {
        let idx = self.givers.iter().position(|p| p.id == id)?;
        Some(self.givers.remove(idx))
    }

    /// Remove and return the receiver with `id`, same semantics as
    /// [`take_giver`](Self::take_giver).
    pub fn take_receiver(&mut self, id: ParticipantId) -> Option<Participant> {
        let idx = self.receivers.iter().position(|p| p.id == id)?;
        Some(self.receivers.remove(idx))
    }

    /// Pop the next giver in roster order.
    pub fn next_giver(&mut self) -> Option<Participant> {
        if self.givers.is_empty() {
            None
        } else {
            Some(self.givers.remove(0))
        }
    }

    /// Indices into the receiver pool that `giver` may draw: everyone still
    /// available except the giver themselves and anyone sharing an exclusion
    /// group with them.
    #[must_use]
    pub fn candidate_receivers(
        &self,
        giver: &Participant,
        exclusions: &ExclusionSet,
    ) -> Vec<usize> {
        self.receivers
            .iter()
            .enumerate()
            .filter(|(_, r)| r.id != giver.id && !exclusions.is_blocked(giver.id, r.id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove the receiver at `idx` (an index previously returned by
    /// [`candidate_receivers`](Self::candidate_receivers)).
    pub fn remove_receiver_at(&mut self, idx: usize) -> Participant {
        self.receivers.remove(idx)
    }

    #[must_use]
    pub fn givers_remaining(&self) -> usize {
        self.givers.len()
    }

    #[must_use]
    pub fn receivers_remaining(&self) -> usize {
        self.receivers.len()
    }
}
