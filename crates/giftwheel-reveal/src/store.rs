//! Storage seam for generated assignment records.

use giftwheel_types::{GroupId, GroupRecord, Result};

/// Persistence boundary for group records, keyed by group identity.
///
/// The engine has no opinion on the medium — an in-memory map, a browser
/// key-value store, or a networked database all fit behind this trait. Two
/// rules hold for every implementation:
///
/// - **Absence is not failure**: `load` returns `Ok(None)` for an unknown
///   group. Errors ([`GiftwheelError::StoreUnavailable`],
///   [`GiftwheelError::Serialization`]) mean the medium itself failed, and
///   callers must never collapse "couldn't check" into "nothing there".
/// - **Records are whole**: `save` replaces any previous record for the
///   same group; there are no partial updates.
///
/// Implementations fronting a networked medium own their timeout and retry
/// policy; this seam stays synchronous like the rest of the engine.
///
/// [`GiftwheelError::StoreUnavailable`]: giftwheel_types::GiftwheelError::StoreUnavailable
/// [`GiftwheelError::Serialization`]: giftwheel_types::GiftwheelError::Serialization
pub trait AssignmentStore {
    /// Persist a record, overwriting any previous record for its group.
    fn save(&mut self, record: &GroupRecord) -> Result<()>;

    /// Fetch the record for `group_id`, if one exists.
    fn load(&self, group_id: GroupId) -> Result<Option<GroupRecord>>;
}
