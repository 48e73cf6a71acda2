//! Per-invocation staging of storage writes and contract events.
//!
//! An invocation either completes fully or aborts fully. Storage writes go
//! through a [`StagedStore`] overlay and contract events into a staging
//! buffer; both land only when the whole operation succeeded. An early
//! `Err` return drops the `Invocation`, discarding everything.

use idopair_store::{KeyValue, StagedStore};
use idopair_types::{ContractEvent, ContractEventKind, InvocationId, Result};

pub(crate) struct Invocation<'a, S: KeyValue> {
    pub id: InvocationId,
    pub store: StagedStore<'a, S>,
    staged_events: Vec<ContractEvent>,
}

impl<'a, S: KeyValue> Invocation<'a, S> {
    pub fn begin(store: &'a mut S) -> Self {
        let id = InvocationId::new();
        tracing::debug!(invocation = %id, "invocation begun");
        Self {
            id,
            store: StagedStore::new(store),
            staged_events: Vec::new(),
        }
    }

    /// Stage a contract event for emission on commit.
    pub fn emit(&mut self, kind: ContractEventKind) {
        self.staged_events.push(ContractEvent::now(kind));
    }

    /// Flush staged writes to the backend and append staged events to the
    /// contract's log.
    pub fn commit(self, event_log: &mut Vec<ContractEvent>) -> Result<()> {
        let id = self.id;
        let writes = self.store.staged_len();
        self.store.commit()?;
        event_log.extend(self.staged_events);
        tracing::debug!(invocation = %id, writes, "invocation committed");
        Ok(())
    }
}
