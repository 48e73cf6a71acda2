//! # idopair-types
//!
//! Shared types, errors, and constants for the **idopair** offering-sale
//! escrow component.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ScriptHash`], [`InvocationId`]
//! - **Notifications**: [`PaymentNotice`], [`EventRecord`]
//! - **Contract events**: [`ContractEvent`], [`ContractEventKind`], [`AcceptReason`]
//! - **Defaults**: [`PairDefaults`] (compiled-in trusted identities)
//! - **Errors**: [`IdoPairError`] with `IDO_ERR_` prefix codes
//! - **Constants**: price, event names, storage key layout

pub mod constants;
pub mod defaults;
pub mod error;
pub mod event;
pub mod ids;
pub mod notice;

// Re-export all primary types at crate root for ergonomic imports:
//   use idopair_types::{ScriptHash, PaymentNotice, IdoPairError, ...};

pub use defaults::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use notice::*;

// Constants are accessed via `idopair_types::constants::FOO`
// (not re-exported to avoid name collisions).
