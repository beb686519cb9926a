//! Reveal resolution — the only read path over stored assignments.

use chrono::{DateTime, Utc};
use giftwheel_types::{GiftwheelError, GroupRecord, Result};
use rust_decimal::Decimal;

use crate::link::{RevealLink, slugify};
use crate::store::AssignmentStore;

/// What one participant is allowed to see: their own assignment, nothing
/// more.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub group_name: String,
    pub giver: String,
    pub receiver: String,
    pub budget: Option<Decimal>,
}

/// Resolves presented reveal links against an [`AssignmentStore`].
///
/// Every check is exact-match: the slug against the stored group name, the
/// participant id against a stored giver, the secret key against that one
/// pairing. A partial match refuses with a typed error and leaks nothing —
/// not even whether the participant exists in some other group.
pub struct RevealResolver<S> {
    store: S,
}

impl<S: AssignmentStore> RevealResolver<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a freshly generated record and hand out one private link per
    /// giver.
    pub fn publish(&mut self, record: &GroupRecord) -> Result<Vec<RevealLink>> {
        self.store.save(record)?;
        Ok(record
            .pairings
            .iter()
            .map(|a| RevealLink::for_assignment(record, a))
            .collect())
    }

    /// Resolve a link against the current wall clock.
    pub fn reveal(&self, link: &RevealLink) -> Result<Reveal> {
        self.reveal_at(link, Utc::now())
    }

    /// Resolve a link as of `now`. Expiry is enforced here, not by the
    /// store: an expired record refuses exactly like a missing one, under a
    /// distinct kind for messaging.
    pub fn reveal_at(&self, link: &RevealLink, now: DateTime<Utc>) -> Result<Reveal> {
        let Some(record) = self.store.load(link.group_id)? else {
            tracing::warn!(group = %link.group_id, "reveal refused: unknown group");
            return Err(GiftwheelError::RevealNotFound);
        };

        if record.is_expired(now) {
            tracing::warn!(group = %link.group_id, "reveal refused: record expired");
            return Err(GiftwheelError::RevealExpired);
        }

        if slugify(&record.group_name) != link.group_slug {
            tracing::warn!(group = %link.group_id, "reveal refused: slug mismatch");
            return Err(GiftwheelError::RevealNotFound);
        }

        let Some(pairing) = record.pairing_for(link.participant_id) else {
            tracing::warn!(group = %link.group_id, "reveal refused: unknown participant");
            return Err(GiftwheelError::RevealNotFound);
        };

        if pairing.secret_key != link.secret_key {
            tracing::warn!(
                group = %link.group_id,
                participant = %link.participant_id,
                "reveal refused: secret key mismatch"
            );
            return Err(GiftwheelError::InvalidSecretKey);
        }

        Ok(Reveal {
            group_name: record.group_name.clone(),
            giver: pairing.giver.clone(),
            receiver: pairing.receiver.clone(),
            budget: record.budget,
        })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
