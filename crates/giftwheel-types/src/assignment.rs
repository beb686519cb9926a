//! Assignment model — one entry per participant-as-giver.

use serde::{Deserialize, Serialize};

use crate::{ParticipantId, SecretKey};

/// One giver's assignment within a generated set.
///
/// The full set is a fixed-point-free permutation of the roster, produced
/// atomically by MatchCore and persisted as a unit. Field names follow the
/// persisted wire shape: `giverId`, `giver`, `receiver`, `secretKey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Identity of the giver; the lookup key for reveals.
    pub giver_id: ParticipantId,
    /// Giver's display name.
    pub giver: String,
    /// Receiver's display name.
    pub receiver: String,
    /// Capability token authorizing this one reveal.
    pub secret_key: SecretKey,
}
