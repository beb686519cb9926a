//! Randomized constrained matching with bounded retries.
//!
//! The core function: takes a sealed `MatchRequest` and produces a complete
//! assignment set, or `Infeasible` once the attempt budget runs out. This is
//! the **only** function MatchCore exposes — no storage, no I/O.
//!
//! ```text
//! match_roster(MatchRequest, Rng) -> Vec<Assignment> | Infeasible
//! ```
//!
//! ## Best-Effort, Not Complete
//!
//! Each attempt is a one-pass greedy walk: forced pairs first, then every
//! remaining giver draws a uniformly random receiver from their candidate
//! pool. The walk never reconsiders earlier choices, so it can paint itself
//! into a corner even when a valid global assignment exists; fresh-randomness
//! retries make that rare in practice for realistic rosters and sparse
//! constraints, but exhausting the budget proves nothing.

use giftwheel_types::{Assignment, GiftwheelError, MatchRequest, Result, SecretKey};
use rand::Rng;

use crate::pools::Pools;

/// Generate a constrained assignment set for the request's roster.
///
/// ## Algorithm (per attempt, up to `config.max_attempts`)
///
/// 1. Copy the roster into fresh giver/receiver pools
/// 2. Forced-pair pass: consume each forced giver from the giver pool and
///    each forced receiver from the receiver pool; a dangling or
///    already-consumed id fails the attempt
/// 3. Greedy pass: each remaining giver, in roster order, draws a uniformly
///    random receiver from (available receivers − self − exclusions); an
///    empty candidate pool fails the attempt
/// 4. All givers matched → return the set; otherwise discard the partial
///    state and retry with fresh randomness
///
/// Every emitted assignment carries a fresh secret key minted from `rng`.
///
/// ## Determinism
///
/// The engine consumes randomness only through `rng`: a seeded RNG replays
/// the exact same attempt sequence, assignments and secret keys included.
///
/// ## Errors
///
/// Returns [`GiftwheelError::Infeasible`] after the attempt budget is
/// exhausted. Input-deterministic failures (a forced pair naming no roster
/// member) still burn the whole budget before reporting, matching the
/// legacy retry behavior.
pub fn match_roster<R: Rng>(request: &MatchRequest, rng: &mut R) -> Result<Vec<Assignment>> {
    let max_attempts = request.config.max_attempts;

    for attempt in 1..=max_attempts {
        if let Some(assignments) = try_match(request, rng) {
            tracing::info!(
                group = %request.group_name,
                participants = request.participants.len(),
                forced = request.forced_pairs.len(),
                attempt,
                "assignment set generated"
            );
            return Ok(assignments);
        }
        tracing::debug!(attempt, "attempt dead-ended, retrying with fresh randomness");
    }

    tracing::warn!(
        group = %request.group_name,
        attempts = max_attempts,
        "no valid assignment within attempt budget"
    );
    Err(GiftwheelError::Infeasible {
        attempts: max_attempts,
    })
}

/// One matching attempt. `None` means the attempt dead-ended and the caller
/// should retry; partial state never escapes.
fn try_match<R: Rng>(request: &MatchRequest, rng: &mut R) -> Option<Vec<Assignment>> {
    let mut pools = Pools::from_roster(&request.participants);
    let mut assignments = Vec::with_capacity(request.participants.len());

    // Forced-pair pass. Consuming a giver leaves them in the receiver pool:
    // being forced to give to X does not stop them receiving from someone.
    for pair in &request.forced_pairs {
        if pair.giver == pair.receiver {
            return None;
        }
        let giver = pools.take_giver(pair.giver)?;
        let receiver = pools.take_receiver(pair.receiver)?;
        assignments.push(Assignment {
            giver_id: giver.id,
            giver: giver.name,
            receiver: receiver.name,
            secret_key: SecretKey::from_rng(rng),
        });
    }

    // Greedy random pass over the remaining givers, in roster order. One
    // pass, no backtracking.
    while let Some(giver) = pools.next_giver() {
        let candidates = pools.candidate_receivers(&giver, &request.exclusions);
        if candidates.is_empty() {
            return None;
        }
        let receiver = pools.remove_receiver_at(candidates[rng.gen_range(0..candidates.len())]);
        assignments.push(Assignment {
            giver_id: giver.id,
            giver: giver.name,
            receiver: receiver.name,
            secret_key: SecretKey::from_rng(rng),
        });
    }

    Some(assignments)
}
