//! In-memory assignment store.

use std::collections::HashMap;

use giftwheel_types::{GroupId, GroupRecord, Result};

use crate::store::AssignmentStore;

/// Map-backed store holding each record as a serialized JSON document,
/// mirroring the key-value media it stands in for during tests and local
/// runs. Round-tripping through JSON also means a `MemoryStore` exercises
/// the exact persisted wire shape.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<GroupId, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored group records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AssignmentStore for MemoryStore {
    fn save(&mut self, record: &GroupRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.records.insert(record.group_id, json);
        tracing::debug!(group = %record.group_id, pairings = record.pairings.len(), "record saved");
        Ok(())
    }

    fn load(&self, group_id: GroupId) -> Result<Option<GroupRecord>> {
        match self.records.get(&group_id) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}
