//! Configuration for a matching run.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tuning for the randomized matching loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum randomized attempts before reporting infeasibility. The loop
    /// is best-effort: exhausting the budget does not prove that no valid
    /// assignment exists.
    pub max_attempts: usize,
}

impl MatchConfig {
    #[must_use]
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_attempts: constants::DEFAULT_MAX_ATTEMPTS,
        }
    }
}
