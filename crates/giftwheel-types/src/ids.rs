//! Opaque tokens used throughout Giftwheel.
//!
//! Every token is 64 bits of randomness rendered as 16 lowercase hex
//! characters. [`ParticipantId`] is an identity, [`SecretKey`] is a
//! capability, [`GroupId`] is a record key — they are distinct newtypes so
//! an identity can never be compared against a capability by accident.
//!
//! All three offer an ambient [`new`](ParticipantId::new) constructor and an
//! RNG-injected [`from_rng`](ParticipantId::from_rng) so the matching engine
//! can mint tokens from a seeded source.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{GiftwheelError, Result, constants};

fn decode_hex(s: &str) -> Result<[u8; constants::TOKEN_BYTES]> {
    let raw = hex::decode(s).map_err(|e| GiftwheelError::MalformedToken {
        reason: e.to_string(),
    })?;
    raw.try_into().map_err(|_| GiftwheelError::MalformedToken {
        reason: format!("expected {} hex chars, got {}", constants::TOKEN_LEN, s.len()),
    })
}

// ---------------------------------------------------------------------------
// ParticipantId
// ---------------------------------------------------------------------------

/// Stable opaque identity of a participant. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ParticipantId([u8; constants::TOKEN_BYTES]);

impl ParticipantId {
    /// Mint a fresh id from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// Mint a fresh id from an injected (possibly seeded) RNG.
    pub fn from_rng<R: RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; constants::TOKEN_BYTES];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Parse the 16-hex-char rendering.
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex(s).map(Self)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for ParticipantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ParticipantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// SecretKey
// ---------------------------------------------------------------------------

/// Per-assignment capability token: authorizes revealing one giver's
/// recipient and nothing else. A convenience obfuscation, not a security
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretKey([u8; constants::TOKEN_BYTES]);

impl SecretKey {
    /// Mint a fresh key from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// Mint a fresh key from an injected (possibly seeded) RNG.
    pub fn from_rng<R: RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; constants::TOKEN_BYTES];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Parse the 16-hex-char rendering.
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex(s).map(Self)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for SecretKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for SecretKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// GroupId
// ---------------------------------------------------------------------------

/// Key of a persisted group record in the assignment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct GroupId([u8; constants::TOKEN_BYTES]);

impl GroupId {
    /// Mint a fresh id from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// Mint a fresh id from an injected (possibly seeded) RNG.
    pub fn from_rng<R: RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; constants::TOKEN_BYTES];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Parse the 16-hex-char rendering.
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex(s).map(Self)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for GroupId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
