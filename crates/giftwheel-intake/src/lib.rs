//! # giftwheel-intake
//!
//! **Intake plane**: the organizer's mutable draft and its validation into a
//! sealed [`MatchRequest`].
//!
//! ## Draft Flow
//!
//! ```text
//! UI → RosterDraft (names, mutable) → seal() → MatchRequest (ids, immutable) → MatchCore
//! ```
//!
//! All mutation happens on the draft, and all constraint entry is by display
//! name — the boundary where names exist. `seal` validates the whole draft,
//! resolves every name to a [`ParticipantId`], and emits an immutable
//! request, so nothing downstream ever sees a name-keyed constraint or a
//! half-edited roster.
//!
//! [`MatchRequest`]: giftwheel_types::MatchRequest
//! [`ParticipantId`]: giftwheel_types::ParticipantId

pub mod draft;
mod sealer;

pub use draft::RosterDraft;
