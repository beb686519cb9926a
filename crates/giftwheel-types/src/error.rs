//! Error types for the Giftwheel assignment engine.
//!
//! All errors use the `GW_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Intake / roster validation errors
//! - 2xx: Constraint validation errors
//! - 3xx: Matching errors
//! - 4xx: Store errors
//! - 5xx: Reveal errors
//! - 9xx: General / internal errors
//!
//! [`GiftwheelError::Infeasible`] is an expected terminal result of the
//! matching loop, not a program fault — callers surface it as an actionable
//! message ("reduce blocked combinations"), never as a crash.

use rust_decimal::Decimal;
use thiserror::Error;

/// Central error enum for all Giftwheel operations.
#[derive(Debug, Error)]
pub enum GiftwheelError {
    // =================================================================
    // Intake / Roster Errors (1xx)
    // =================================================================
    /// A participant name is empty after trimming whitespace.
    #[error("GW_ERR_100: Participant name is empty")]
    EmptyParticipantName,

    /// Two participants share the same display name. Constraints are entered
    /// by name at the boundary, so duplicates are rejected rather than
    /// silently bound to whichever participant was added first.
    #[error("GW_ERR_101: Duplicate participant name: {name}")]
    DuplicateParticipantName { name: String },

    /// The roster has no participants.
    #[error("GW_ERR_102: Roster has no participants")]
    EmptyRoster,

    /// The roster exceeds the supported size.
    #[error("GW_ERR_103: Roster too large: {count} participants (max {max})")]
    RosterTooLarge { count: usize, max: usize },

    /// A constraint references a name that resolves to no participant.
    #[error("GW_ERR_104: Unknown participant name: {name}")]
    UnknownParticipant { name: String },

    /// The group name is empty after trimming whitespace.
    #[error("GW_ERR_105: Group name is empty")]
    EmptyGroupName,

    /// The gift budget is negative.
    #[error("GW_ERR_106: Budget must be non-negative, got {budget}")]
    NegativeBudget { budget: Decimal },

    // =================================================================
    // Constraint Errors (2xx)
    // =================================================================
    /// An exclusion group has fewer than two members.
    #[error("GW_ERR_200: Exclusion group needs at least 2 members, got {size}")]
    ExclusionGroupTooSmall { size: usize },

    /// A forced pair names the same participant as giver and receiver.
    #[error("GW_ERR_201: Forced pair assigns {name} to themselves")]
    SelfForcedPair { name: String },

    // =================================================================
    // Matching Errors (3xx)
    // =================================================================
    /// No valid assignment was found within the attempt budget. Expected
    /// terminal result for over-constrained input — not retried further.
    #[error("GW_ERR_300: No valid assignment found within {attempts} attempts")]
    Infeasible { attempts: usize },

    // =================================================================
    // Store Errors (4xx)
    // =================================================================
    /// The assignment store could not be reached or failed mid-operation.
    /// Distinct from an absent record: "couldn't check" is not "nothing there".
    #[error("GW_ERR_400: Assignment store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    // =================================================================
    // Reveal Errors (5xx)
    // =================================================================
    /// No stored assignment matches the presented link.
    #[error("GW_ERR_500: No assignment found for this link")]
    RevealNotFound,

    /// The group record exists but has passed its expiry. Same refusal
    /// semantics as not-found, distinct kind for messaging.
    #[error("GW_ERR_501: This group's assignments have expired")]
    RevealExpired,

    /// The participant exists but the presented secret key does not match.
    #[error("GW_ERR_502: Secret key does not match")]
    InvalidSecretKey,

    /// The reveal link could not be parsed into its four components.
    #[error("GW_ERR_503: Malformed reveal link: {reason}")]
    MalformedRevealLink { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("GW_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("GW_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// An opaque token failed to parse.
    #[error("GW_ERR_902: Malformed token: {reason}")]
    MalformedToken { reason: String },
}

impl GiftwheelError {
    /// True for every reveal-side refusal. The kinds differ for messaging,
    /// but all of them must withhold assignment data identically.
    #[must_use]
    pub fn refuses_reveal(&self) -> bool {
        matches!(
            self,
            Self::RevealNotFound | Self::RevealExpired | Self::InvalidSecretKey
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GiftwheelError>;

impl From<serde_json::Error> for GiftwheelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
