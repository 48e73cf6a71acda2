//! # idopair-engine
//!
//! Settlement engine for the idopair offering-sale escrow. The contract
//! custodies a payment asset and a sale token; when an inbound payment is
//! evidenced by a `SwapAsset` event of the configured authorizer contract
//! within the same transaction, it disburses `amount / PRICE` sale tokens
//! to the payer. Everything else is administrative plumbing around that
//! gate: anyone can send tokens to this contract, so the gate is the only
//! thing standing between the sale-token reserve and drainage.
//!
//! ## Architecture
//!
//! ```text
//! environment ──► PairContract::on_incoming_payment
//!                    1. TransactionLog: SwapAsset emitted by authorizer?   no ─► accept, keep
//!                    2. notice.origin == trusted asset hash?               no ─► accept, keep
//!                    3. tokens_out = amount / PRICE   (integer floor)
//!                    4. guarded transfer of tokens_out to the payer        fail ─► abort all
//! ```
//!
//! External collaborators are injected through the traits in [`collab`]:
//! caller witness, token transfer primitive, transaction-scoped event log,
//! and code host. Persistence goes through `idopair-store`; every mutating
//! operation stages its writes and commits only on full success.
//!
//! [`testkit`] provides in-memory collaborators for tests.

pub mod collab;
pub mod contract;
mod invocation;
pub mod settlement;
pub mod testkit;
mod withdraw;

pub use collab::{CallerWitness, CodeHost, Env, TokenGateway, TransactionLog};
pub use contract::PairContract;
pub use settlement::{tokens_for, SettlementOutcome};
