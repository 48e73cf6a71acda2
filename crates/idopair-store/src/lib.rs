//! # idopair-store
//!
//! Persistence seam for the idopair escrow:
//!
//! 1. **[`KeyValue`]**: the byte-oriented mapping the surrounding
//!    environment provides — read/write by key with a notion of "absent".
//! 2. **[`MemoryStore`]**: infallible in-memory reference backend.
//! 3. **[`StagedStore`]**: write-staging overlay. Writes become visible to
//!    the backend only on [`StagedStore::commit`]; dropping the overlay
//!    discards them. This is how an invocation gets all-or-nothing
//!    semantics in an environment without automatic rollback.
//! 4. **[`ConfigAccess`]**: typed accessors for the four persisted entries
//!    (administrator plus the three trusted hashes), with compiled-in
//!    default fallback where the entry is absent.

pub mod config;
pub mod kv;
pub mod staged;

pub use config::ConfigAccess;
pub use kv::{KeyValue, MemoryStore};
pub use staged::StagedStore;
