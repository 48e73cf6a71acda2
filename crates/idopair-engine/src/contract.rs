//! The pair contract: state, deployment, and administrative surface.
//!
//! The contract keeps no state machine of its own — every invocation is
//! stateless apart from reads/writes of the four configuration entries and
//! its append-only event log. The execution environment serializes
//! invocations, so no locking exists anywhere in this crate.

use idopair_store::{ConfigAccess, KeyValue};
use idopair_types::{
    ContractEvent, ContractEventKind, IdoPairError, PairDefaults, Result, ScriptHash,
    TrustedEntry,
};
use serde_json::Value;

use crate::collab::{CallerWitness, Env};
use crate::invocation::Invocation;

/// Custodial escrow for one offering pair.
pub struct PairContract<S: KeyValue> {
    self_hash: ScriptHash,
    defaults: PairDefaults,
    store: S,
    events: Vec<ContractEvent>,
}

impl<S: KeyValue> PairContract<S> {
    /// Wrap existing persisted state without touching it.
    pub fn new(store: S, defaults: PairDefaults, self_hash: ScriptHash) -> Self {
        Self {
            self_hash,
            defaults,
            store,
            events: Vec::new(),
        }
    }

    /// Install the contract: wrap the store and seed the administrator.
    ///
    /// # Errors
    /// Propagates backend failures from the seeding write.
    pub fn deploy(store: S, defaults: PairDefaults, self_hash: ScriptHash) -> Result<Self> {
        let mut contract = Self::new(store, defaults, self_hash);
        contract.on_deploy(false)?;
        Ok(contract)
    }

    /// The environment's deployment hook. Seeds the administrator to the
    /// compiled-in origin identity — unconditionally, so an upgrade
    /// re-seeds it the same way first installation does.
    pub fn on_deploy(&mut self, update: bool) -> Result<()> {
        let admin = self.defaults.origin_admin;
        let mut inv = Invocation::begin(&mut self.store);
        inv.store.set_admin(admin)?;
        inv.emit(ContractEventKind::Deployed { admin, update });
        inv.commit(&mut self.events)?;
        tracing::info!(admin = %admin, update, "contract deployed");
        Ok(())
    }

    /// This contract's own identity: the `from` side of every outbound
    /// custodial transfer.
    pub fn self_hash(&self) -> ScriptHash {
        self.self_hash
    }

    /// The compiled-in defaults of this deployment.
    pub fn defaults(&self) -> &PairDefaults {
        &self.defaults
    }

    /// The contract's append-only event log.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    pub(crate) fn events_mut(&mut self) -> &mut Vec<ContractEvent> {
        &mut self.events
    }

    // ─────────────────────── Configuration surface ───────────────────────

    /// Current administrator. Never absent after deployment.
    pub fn admin(&self) -> Result<ScriptHash> {
        self.store.admin()?.ok_or_else(|| {
            IdoPairError::Internal("administrator not seeded; contract not deployed".into())
        })
    }

    /// Trusted payment-asset hash (stored value or compiled default).
    pub fn asset_hash(&self) -> Result<ScriptHash> {
        self.store.asset_hash(&self.defaults)
    }

    /// Trusted sale-token hash (stored value or compiled default).
    pub fn token_hash(&self) -> Result<ScriptHash> {
        self.store.token_hash(&self.defaults)
    }

    /// Trusted authorizer-contract hash (stored value or compiled default).
    pub fn authorizer_hash(&self) -> Result<ScriptHash> {
        self.store.authorizer_hash(&self.defaults)
    }

    /// Re-point the trusted payment-asset hash. Administrator only.
    pub fn set_asset_hash(&mut self, env: &Env<'_>, hash: ScriptHash) -> Result<bool> {
        self.set_trusted(env.witness, TrustedEntry::Asset, hash, "set_asset_hash")
    }

    /// Re-point the trusted sale-token hash. Administrator only.
    pub fn set_token_hash(&mut self, env: &Env<'_>, hash: ScriptHash) -> Result<bool> {
        self.set_trusted(env.witness, TrustedEntry::Token, hash, "set_token_hash")
    }

    /// Re-point the trusted authorizer hash. Administrator only.
    pub fn set_authorizer_hash(&mut self, env: &Env<'_>, hash: ScriptHash) -> Result<bool> {
        self.set_trusted(
            env.witness,
            TrustedEntry::Authorizer,
            hash,
            "set_authorizer_hash",
        )
    }

    fn set_trusted(
        &mut self,
        witness: &dyn CallerWitness,
        entry: TrustedEntry,
        hash: ScriptHash,
        operation: &'static str,
    ) -> Result<bool> {
        self.require_admin(witness, operation)?;
        let mut inv = Invocation::begin(&mut self.store);
        match entry {
            TrustedEntry::Asset => inv.store.set_asset_hash(hash)?,
            TrustedEntry::Token => inv.store.set_token_hash(hash)?,
            TrustedEntry::Authorizer => inv.store.set_authorizer_hash(hash)?,
        }
        inv.emit(ContractEventKind::TrustedHashUpdated { entry, value: hash });
        inv.commit(&mut self.events)?;
        tracing::info!(?entry, hash = %hash, "trusted hash updated");
        Ok(true)
    }

    // ─────────────────────── Ownership & upgrade ───────────────────────

    /// Hand administrative control to `new_admin`.
    ///
    /// Validity is checked before authority, and authority before the
    /// write: all subsequent privileged checks use the new identity
    /// immediately after this returns.
    ///
    /// # Errors
    /// - [`IdoPairError::InvalidArgument`] if `new_admin` is the zero hash
    /// - [`IdoPairError::NotAuthorized`] unless the caller is the current
    ///   administrator
    pub fn transfer_ownership(&mut self, env: &Env<'_>, new_admin: ScriptHash) -> Result<bool> {
        if !new_admin.is_valid() {
            return Err(IdoPairError::InvalidArgument {
                reason: "new administrator is not a well-formed identity".into(),
            });
        }
        let previous = self.require_admin(env.witness, "transfer_ownership")?;
        let mut inv = Invocation::begin(&mut self.store);
        inv.store.set_admin(new_admin)?;
        inv.emit(ContractEventKind::OwnershipTransferred {
            previous,
            new: new_admin,
        });
        inv.commit(&mut self.events)?;
        tracing::info!(previous = %previous, new = %new_admin, "ownership transferred");
        Ok(true)
    }

    /// Replace the executing logic in place. Administrator only; thin
    /// delegation to the deployment-management collaborator.
    pub fn update(
        &mut self,
        env: &mut Env<'_>,
        code: &[u8],
        manifest: &str,
        data: Option<&Value>,
    ) -> Result<()> {
        self.require_admin(env.witness, "update")?;
        env.code.replace_code(code, manifest, data)?;
        self.events
            .push(ContractEvent::now(ContractEventKind::CodeUpdated {
                code_len: code.len(),
                manifest_len: manifest.len(),
            }));
        tracing::info!(
            code_len = code.len(),
            manifest_len = manifest.len(),
            "contract code updated"
        );
        Ok(())
    }

    /// Prove administrator authority, evaluated against the *committed*
    /// store — always before any mutation.
    pub(crate) fn require_admin(
        &self,
        witness: &dyn CallerWitness,
        operation: &'static str,
    ) -> Result<ScriptHash> {
        let admin = self.admin()?;
        if !witness.is_caller(admin) {
            tracing::warn!(operation, "caller failed administrator witness check");
            return Err(IdoPairError::NotAuthorized { operation });
        }
        Ok(admin)
    }
}
