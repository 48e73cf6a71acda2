//! Typed access to the four persisted configuration entries.
//!
//! Persisted layout: four key-value entries (administrator, asset hash,
//! token hash, authorizer hash), each either absent or holding a fixed-width
//! 20-byte identity. The three trusted hashes fall back to the compiled-in
//! defaults when absent; the administrator has no fallback because
//! deployment seeds it unconditionally.
//!
//! These accessors are raw: the administrator gate lives in the engine,
//! which proves authority *before* calling any setter.

use idopair_types::{constants, IdoPairError, PairDefaults, Result, ScriptHash, SCRIPT_HASH_LEN};

use crate::kv::KeyValue;

fn read_hash<S: KeyValue + ?Sized>(store: &S, key: &[u8]) -> Result<Option<ScriptHash>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let bytes: [u8; SCRIPT_HASH_LEN] = raw.try_into().map_err(|raw: Vec<u8>| {
        IdoPairError::Storage(format!(
            "entry {} holds {} bytes, expected {SCRIPT_HASH_LEN}",
            hex_key(key),
            raw.len()
        ))
    })?;
    Ok(Some(ScriptHash::from_bytes(bytes)))
}

fn hex_key(key: &[u8]) -> String {
    key.iter().map(|b| format!("{b:02x}")).collect()
}

/// Typed configuration view over any [`KeyValue`].
///
/// Blanket-implemented, so the same accessors work on the committed backend
/// and on a staging overlay mid-invocation.
pub trait ConfigAccess: KeyValue {
    /// The stored administrator identity. `None` only before deployment.
    fn admin(&self) -> Result<Option<ScriptHash>> {
        read_hash(self, &constants::KEY_ADMIN)
    }

    fn set_admin(&mut self, admin: ScriptHash) -> Result<()> {
        self.put(&constants::KEY_ADMIN, admin.as_bytes())
    }

    /// Trusted payment-asset hash: stored value, else the compiled default.
    fn asset_hash(&self, defaults: &PairDefaults) -> Result<ScriptHash> {
        Ok(read_hash(self, &constants::KEY_ASSET_HASH)?.unwrap_or(defaults.asset))
    }

    fn set_asset_hash(&mut self, hash: ScriptHash) -> Result<()> {
        self.put(&constants::KEY_ASSET_HASH, hash.as_bytes())
    }

    /// Trusted sale-token hash: stored value, else the compiled default.
    fn token_hash(&self, defaults: &PairDefaults) -> Result<ScriptHash> {
        Ok(read_hash(self, &constants::KEY_TOKEN_HASH)?.unwrap_or(defaults.token))
    }

    fn set_token_hash(&mut self, hash: ScriptHash) -> Result<()> {
        self.put(&constants::KEY_TOKEN_HASH, hash.as_bytes())
    }

    /// Trusted authorizer hash: stored value, else the compiled default.
    fn authorizer_hash(&self, defaults: &PairDefaults) -> Result<ScriptHash> {
        Ok(read_hash(self, &constants::KEY_AUTHORIZER_HASH)?.unwrap_or(defaults.authorizer))
    }

    fn set_authorizer_hash(&mut self, hash: ScriptHash) -> Result<()> {
        self.put(&constants::KEY_AUTHORIZER_HASH, hash.as_bytes())
    }
}

impl<S: KeyValue + ?Sized> ConfigAccess for S {}
