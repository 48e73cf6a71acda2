//! Events emitted by the pair contract itself.
//!
//! Immutable, timestamped records appended by contract operations. The
//! engine keeps them in an append-only log; like storage writes, events
//! staged during an invocation are only appended if the whole invocation
//! succeeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ScriptHash;

/// Why an inbound payment was accepted without disbursement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptReason {
    /// No `SwapAsset` event of the authorizer in the current transaction.
    NoSwapEvent,
    /// The notification's originating contract is not the trusted asset.
    UntrustedAsset,
}

/// Which trusted-identity entry a configuration update touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustedEntry {
    Asset,
    Token,
    Authorizer,
}

/// One event in the contract's own append-only log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractEvent {
    pub at: DateTime<Utc>,
    pub kind: ContractEventKind,
}

impl ContractEvent {
    #[must_use]
    pub fn now(kind: ContractEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

/// Event taxonomy of the pair contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContractEventKind {
    /// Contract installed or upgraded; administrator (re-)seeded.
    Deployed { admin: ScriptHash, update: bool },
    /// A swap-authorized payment was settled: tokens disbursed to the payer.
    SettlementExecuted {
        payer: ScriptHash,
        amount_in: u128,
        tokens_out: u128,
        payload: Option<Value>,
    },
    /// A payment was kept without disbursement (silent accept).
    DepositAccepted {
        sender: ScriptHash,
        amount: u128,
        reason: AcceptReason,
    },
    /// Administrator withdrew custodial payment-asset balance.
    AssetWithdrawn { to: ScriptHash, amount: u128 },
    /// Administrator withdrew custodial sale-token balance.
    TokenWithdrawn { to: ScriptHash, amount: u128 },
    /// Administrative control handed over.
    OwnershipTransferred {
        previous: ScriptHash,
        new: ScriptHash,
    },
    /// One of the three trusted identities was re-pointed.
    TrustedHashUpdated {
        entry: TrustedEntry,
        value: ScriptHash,
    },
    /// Executing logic replaced in place.
    CodeUpdated { code_len: usize, manifest_len: usize },
}
