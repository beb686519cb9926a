//! # giftwheel-matchcore
//!
//! **Pure randomized matching engine for Giftwheel.**
//!
//! MatchCore is the compute plane — it takes a sealed [`MatchRequest`] and
//! either produces a complete constrained assignment or reports
//! infeasibility after a bounded number of attempts. It has:
//!
//! - **Zero side effects**: no storage, no I/O, no ambient state
//! - **Injected randomness**: callers pass the RNG, so a fixed seed gives a
//!   fixed outcome
//! - **Bounded effort**: a one-pass greedy heuristic retried with fresh
//!   randomness, never an unbounded search
//!
//! [`MatchRequest`]: giftwheel_types::MatchRequest

pub mod matcher;
pub mod pools;

pub use matcher::match_roster;
pub use pools::Pools;
