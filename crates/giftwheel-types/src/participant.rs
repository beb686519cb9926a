//! Participant model.

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A single member of the gift exchange.
///
/// The identity is immutable once created; the display name stays editable
/// in the intake draft until matching runs. Names are not required to be
/// globally unique here — intake enforces uniqueness at seal time so that
/// name-keyed constraint entry stays unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    /// Create a participant with a freshly minted id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
        }
    }

    /// Create a participant with a known id (e.g. when rehydrating state).
    #[must_use]
    pub fn with_id(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
