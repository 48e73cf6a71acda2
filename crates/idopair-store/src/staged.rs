//! Write-staging overlay over a [`KeyValue`] backend.
//!
//! One invocation of the contract is a single atomic unit: either every
//! storage write lands or none does. The overlay buffers writes, serves
//! reads through the buffer first, and flushes to the backend only on
//! [`StagedStore::commit`]. Dropping the overlay without committing
//! discards every staged write.

use std::collections::HashMap;

use idopair_types::Result;

use crate::kv::KeyValue;

/// Staging overlay: reads see staged writes, the backend does not until
/// commit.
pub struct StagedStore<'a, S: KeyValue> {
    inner: &'a mut S,
    staged: HashMap<Vec<u8>, Vec<u8>>,
}

impl<'a, S: KeyValue> StagedStore<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            staged: HashMap::new(),
        }
    }

    /// Number of staged (uncommitted) writes.
    #[must_use]
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Flush all staged writes into the backend.
    ///
    /// # Errors
    /// Propagates the first backend failure. Writes staged after the
    /// failing one are not attempted.
    pub fn commit(self) -> Result<()> {
        for (key, value) in self.staged {
            self.inner.put(&key, &value)?;
        }
        Ok(())
    }
}

impl<S: KeyValue> KeyValue for StagedStore<'_, S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        if let Some(value) = self.staged.get(key) {
            return Ok(Some(value.clone()));
        }
        self.inner.get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.staged.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
