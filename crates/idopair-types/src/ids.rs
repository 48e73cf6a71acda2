//! Fixed-width identities used throughout idopair.
//!
//! Contract and account identities are 20-byte script hashes, printed as
//! big-endian `0x…` hex (the same form the compiled-in defaults use).
//! `InvocationId` uses UUIDv7 for time-ordered lexicographic sorting.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{IdoPairError, Result};

/// Byte width of a script hash.
pub const SCRIPT_HASH_LEN: usize = 20;

// ---------------------------------------------------------------------------
// ScriptHash
// ---------------------------------------------------------------------------

/// Identity of a contract or account: a 20-byte script hash.
///
/// The zero hash is reserved as "not a valid identity" — it never names a
/// deployable contract and is rejected wherever a well-formed identity is
/// required (see [`ScriptHash::is_valid`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ScriptHash(pub [u8; SCRIPT_HASH_LEN]);

impl ScriptHash {
    /// The all-zero hash. Not a valid identity.
    pub const ZERO: Self = Self([0u8; SCRIPT_HASH_LEN]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; SCRIPT_HASH_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SCRIPT_HASH_LEN] {
        &self.0
    }

    /// A well-formed identity is any hash other than the zero hash.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        *self != Self::ZERO
    }

    /// Parse from big-endian hex, with or without a `0x` prefix.
    ///
    /// # Errors
    /// Returns [`IdoPairError::InvalidArgument`] if the input is not exactly
    /// 20 bytes of hex.
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw).map_err(|e| IdoPairError::InvalidArgument {
            reason: format!("bad script hash hex: {e}"),
        })?;
        let arr: [u8; SCRIPT_HASH_LEN] =
            bytes
                .try_into()
                .map_err(|_| IdoPairError::InvalidArgument {
                    reason: format!("script hash must be {SCRIPT_HASH_LEN} bytes"),
                })?;
        Ok(Self(arr))
    }

    /// Big-endian hex without prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Deterministic hash derived from a tag: the first 20 bytes of
    /// `SHA-256(tag)`. Every caller gets the **exact same** hash for the
    /// same tag — handy for fixtures and documented defaults.
    #[must_use]
    pub fn derived(tag: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(tag);
        let mut bytes = [0u8; SCRIPT_HASH_LEN];
        bytes.copy_from_slice(&digest[..SCRIPT_HASH_LEN]);
        Self(bytes)
    }

    /// First 4 bytes as hex, for compact log fields.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Random identity for tests.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; SCRIPT_HASH_LEN];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes[..]);
        Self(bytes)
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// InvocationId
// ---------------------------------------------------------------------------

/// Unique identifier for one external invocation of the contract.
/// UUIDv7, so ids sort in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct InvocationId(pub Uuid);

impl InvocationId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inv:{}", self.0)
    }
}
