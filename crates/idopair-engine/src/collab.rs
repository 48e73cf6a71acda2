//! Collaborator seams: the four external capabilities an invocation needs.
//!
//! The contract never talks to the chain directly. Each invocation receives
//! an [`Env`] bundling injected implementations of:
//!
//! - [`CallerWitness`] — "is the caller the given identity?"
//! - [`TokenGateway`] — the fungible-token transfer primitive
//! - [`TransactionLog`] — the event log of the current transaction
//! - [`CodeHost`] — contract deployment/upgrade machinery
//!
//! Keeping these behind traits makes every authorization and failure path
//! reachable from tests.

use idopair_types::{EventRecord, Result, ScriptHash};
use serde_json::Value;

/// Proof of caller identity for privileged operations.
pub trait CallerWitness {
    /// Does the current caller hold the witness for `identity`?
    fn is_caller(&self, identity: ScriptHash) -> bool;
}

/// The external fungible-token transfer primitive.
pub trait TokenGateway {
    /// Move `amount` of `token` from `from` to `to`, attaching `data`.
    ///
    /// Returns the raw primitive outcome. A zero-amount transfer must
    /// report success as a no-op. The engine wraps every call in a guard
    /// that turns `false` into a fatal, invocation-aborting error.
    fn transfer(
        &mut self,
        token: ScriptHash,
        from: ScriptHash,
        to: ScriptHash,
        amount: u128,
        data: Option<&Value>,
    ) -> bool;
}

/// Notification log of the current transaction.
///
/// The log is immutable within one invocation, so repeated queries return
/// the same records.
pub trait TransactionLog {
    /// All events `contract` emitted since the start of this transaction.
    fn events_emitted_by(&self, contract: ScriptHash) -> Vec<EventRecord>;
}

/// Deployment-management collaborator: replaces the executing logic.
pub trait CodeHost {
    /// Replace the contract's code and manifest in place.
    fn replace_code(&mut self, code: &[u8], manifest: &str, data: Option<&Value>) -> Result<()>;
}

/// One invocation's bundle of injected capabilities.
pub struct Env<'a> {
    pub witness: &'a dyn CallerWitness,
    pub gateway: &'a mut dyn TokenGateway,
    pub log: &'a dyn TransactionLog,
    pub code: &'a mut dyn CodeHost,
}

impl<'a> Env<'a> {
    pub fn new(
        witness: &'a dyn CallerWitness,
        gateway: &'a mut dyn TokenGateway,
        log: &'a dyn TransactionLog,
        code: &'a mut dyn CodeHost,
    ) -> Self {
        Self {
            witness,
            gateway,
            log,
            code,
        }
    }
}
