//! The persisted group record — one per generated assignment set.
//!
//! Created once at successful matching, read many times by reveal lookups,
//! never partially updated. Regenerating a group's assignments replaces the
//! whole record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Assignment, GroupId, ParticipantId};

/// A complete, persisted assignment set for one gift exchange.
///
/// Serialized field names follow the stored wire shape (`groupName`,
/// `budget`, `pairings`, `expiresAt`). Expiry is optional and enforced by
/// the reveal resolver, not the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub group_id: GroupId,
    pub group_name: String,
    pub budget: Option<Decimal>,
    pub pairings: Vec<Assignment>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl GroupRecord {
    /// Package a generated assignment set into a record with a fresh group
    /// id and no expiry.
    #[must_use]
    pub fn new(
        group_name: impl Into<String>,
        budget: Option<Decimal>,
        pairings: Vec<Assignment>,
    ) -> Self {
        Self {
            group_id: GroupId::new(),
            group_name: group_name.into(),
            budget,
            pairings,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Attach an expiry timestamp.
    #[must_use]
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Whether the record has passed its expiry as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }

    /// The pairing where `id` is the giver, if any.
    #[must_use]
    pub fn pairing_for(&self, id: ParticipantId) -> Option<&Assignment> {
        self.pairings.iter().find(|p| p.giver_id == id)
    }
}
