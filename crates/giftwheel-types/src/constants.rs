//! System-wide constants for the Giftwheel assignment engine.

/// Raw byte width of an opaque token (participant id, secret key, group id).
pub const TOKEN_BYTES: usize = 8;

/// Rendered token length: 16 symbols drawn from the 16-symbol hex alphabet.
pub const TOKEN_LEN: usize = 2 * TOKEN_BYTES;

/// Default number of randomized matching attempts before reporting
/// infeasibility.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Minimum member count for an exclusion group.
pub const MIN_EXCLUSION_GROUP_SIZE: usize = 2;

/// Maximum participants accepted in a single roster. 64-bit tokens keep
/// collision odds negligible well below this bound.
pub const MAX_ROSTER_SIZE: usize = 10_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Giftwheel";
