//! In-memory collaborators for tests.
//!
//! These implement the [`crate::collab`] traits with just enough behavior
//! to drive every authorization and failure path: a witness pinned to one
//! identity, a balance-tracking token gateway with programmable failure,
//! a transaction-scoped event log, and a recording code host.

use std::collections::HashMap;

use idopair_types::{EventRecord, IdoPairError, Result, ScriptHash};
use serde_json::Value;

use crate::collab::{CallerWitness, CodeHost, TokenGateway, TransactionLog};

/// Witness for exactly one caller identity.
#[derive(Debug, Clone, Copy)]
pub struct StaticWitness(pub ScriptHash);

impl CallerWitness for StaticWitness {
    fn is_caller(&self, identity: ScriptHash) -> bool {
        self.0 == identity
    }
}

/// One recorded call into the transfer primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
    pub token: ScriptHash,
    pub from: ScriptHash,
    pub to: ScriptHash,
    pub amount: u128,
}

/// Balance-tracking token gateway.
///
/// Keeps per-(token, holder) balances, records every call, and reports
/// failure on insufficient balance or when [`LedgerGateway::fail_all`] is
/// set. Zero-amount transfers succeed as no-ops without touching balances.
#[derive(Debug, Default)]
pub struct LedgerGateway {
    balances: HashMap<(ScriptHash, ScriptHash), u128>,
    /// Every transfer call in arrival order, including failed ones.
    pub calls: Vec<TransferCall>,
    /// Force every transfer to report failure.
    pub fail_all: bool,
}

impl LedgerGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `holder` with `amount` of `token`.
    pub fn fund(&mut self, token: ScriptHash, holder: ScriptHash, amount: u128) {
        *self.balances.entry((token, holder)).or_default() += amount;
    }

    /// Current balance of `holder` in `token`.
    #[must_use]
    pub fn balance(&self, token: ScriptHash, holder: ScriptHash) -> u128 {
        self.balances.get(&(token, holder)).copied().unwrap_or(0)
    }
}

impl TokenGateway for LedgerGateway {
    fn transfer(
        &mut self,
        token: ScriptHash,
        from: ScriptHash,
        to: ScriptHash,
        amount: u128,
        _data: Option<&Value>,
    ) -> bool {
        self.calls.push(TransferCall {
            token,
            from,
            to,
            amount,
        });
        if self.fail_all {
            return false;
        }
        if amount == 0 {
            return true;
        }
        let Some(src) = self.balances.get_mut(&(token, from)) else {
            return false;
        };
        if *src < amount {
            return false;
        }
        *src -= amount;
        *self.balances.entry((token, to)).or_default() += amount;
        true
    }
}

/// Transaction-scoped notification log.
#[derive(Debug, Default)]
pub struct TxLog {
    records: Vec<EventRecord>,
}

impl TxLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event emitted by `contract` in the current transaction.
    pub fn emit(&mut self, contract: ScriptHash, name: impl Into<String>, state: Vec<Value>) {
        self.records.push(EventRecord::new(contract, name, state));
    }
}

impl TransactionLog for TxLog {
    fn events_emitted_by(&self, contract: ScriptHash) -> Vec<EventRecord> {
        self.records
            .iter()
            .filter(|r| r.contract == contract)
            .cloned()
            .collect()
    }
}

/// Code host that records replacements instead of performing them.
#[derive(Debug, Default)]
pub struct NullCodeHost {
    /// `(code_len, manifest)` of each accepted replacement.
    pub replacements: Vec<(usize, String)>,
    /// Reject the next replacement with `CodeUpdateFailed`.
    pub reject: bool,
}

impl NullCodeHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeHost for NullCodeHost {
    fn replace_code(&mut self, code: &[u8], manifest: &str, _data: Option<&Value>) -> Result<()> {
        if self.reject {
            return Err(IdoPairError::CodeUpdateFailed {
                reason: "host rejected replacement".into(),
            });
        }
        self.replacements.push((code.len(), manifest.to_string()));
        Ok(())
    }
}
