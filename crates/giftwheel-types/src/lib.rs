//! # giftwheel-types
//!
//! Shared types, errors, and configuration for the **Giftwheel** assignment
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`SecretKey`], [`GroupId`]
//! - **Participant model**: [`Participant`]
//! - **Constraint model**: [`ExclusionGroup`], [`ExclusionSet`], [`ForcedPair`]
//! - **Assignment model**: [`Assignment`]
//! - **Request model**: [`MatchRequest`] — the sealed input to MatchCore
//! - **Record model**: [`GroupRecord`] — the persisted assignment set
//! - **Configuration**: [`MatchConfig`]
//! - **Errors**: [`GiftwheelError`] with `GW_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod assignment;
pub mod config;
pub mod constants;
pub mod constraint;
pub mod error;
pub mod ids;
pub mod participant;
pub mod record;
pub mod request;

// Re-export all primary types at crate root for ergonomic imports:
//   use giftwheel_types::{Participant, ExclusionSet, Assignment, ...};

pub use assignment::*;
pub use config::*;
pub use constraint::*;
pub use error::*;
pub use ids::*;
pub use participant::*;
pub use record::*;
pub use request::*;

// Constants are accessed via `giftwheel_types::constants::FOO`
// (not re-exported to avoid name collisions).
