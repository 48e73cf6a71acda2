//! Inbound-payment and external-event records.
//!
//! A [`PaymentNotice`] exists only for the duration of one invocation and
//! triggers at most one settlement attempt. An [`EventRecord`] is one entry
//! of an external contract's notification log, scoped to the current
//! transaction and immutable within it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ScriptHash;

/// One inbound payment notification: the environment delivers this whenever
/// the contract receives a payment-asset transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentNotice {
    /// Contract whose transfer triggered this notification. Settlement only
    /// proceeds when this equals the trusted asset hash.
    pub origin: ScriptHash,
    /// The original payer — settlement disburses to this identity.
    pub sender: ScriptHash,
    /// Transferred amount in smallest units.
    pub amount: u128,
    /// Opaque payload attached by the payer. Never interpreted.
    pub payload: Option<Value>,
}

impl PaymentNotice {
    #[must_use]
    pub fn new(
        origin: ScriptHash,
        sender: ScriptHash,
        amount: u128,
        payload: Option<Value>,
    ) -> Self {
        Self {
            origin,
            sender,
            amount,
            payload,
        }
    }
}

/// One event emitted by an external contract within the current transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Contract that emitted the event.
    pub contract: ScriptHash,
    /// Event name, e.g. `"SwapAsset"`.
    pub name: String,
    /// Event fields, opaque to this component.
    pub state: Vec<Value>,
}

impl EventRecord {
    #[must_use]
    pub fn new(contract: ScriptHash, name: impl Into<String>, state: Vec<Value>) -> Self {
        Self {
            contract,
            name: name.into(),
            state,
        }
    }
}
