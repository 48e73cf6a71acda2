//! Compiled-in trusted identities for a deployment.
//!
//! The three trusted hashes act as fallbacks: the configuration store
//! returns them whenever the corresponding key is absent. The origin
//! administrator is different — deployment seeds it into storage
//! unconditionally, so it never acts as a getter-level fallback.

use serde::{Deserialize, Serialize};

use crate::{constants, ScriptHash};

/// The four compiled-in identities of one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDefaults {
    /// Default trusted payment-asset contract.
    pub asset: ScriptHash,
    /// Default trusted sale-token contract.
    pub token: ScriptHash,
    /// Default trusted authorizer contract.
    pub authorizer: ScriptHash,
    /// Identity the administrator is seeded to at deployment.
    pub origin_admin: ScriptHash,
}

impl PairDefaults {
    #[must_use]
    pub fn new(
        asset: ScriptHash,
        token: ScriptHash,
        authorizer: ScriptHash,
        origin_admin: ScriptHash,
    ) -> Self {
        Self {
            asset,
            token,
            authorizer,
            origin_admin,
        }
    }

    /// The reference deployment's identities.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            asset: ScriptHash::from_bytes(constants::DEFAULT_ASSET_HASH),
            token: ScriptHash::from_bytes(constants::DEFAULT_TOKEN_HASH),
            authorizer: ScriptHash::from_bytes(constants::DEFAULT_AUTHORIZER_HASH),
            origin_admin: ScriptHash::from_bytes(constants::ORIGIN_ADMIN),
        }
    }
}
