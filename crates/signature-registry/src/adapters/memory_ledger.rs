//! # In-Memory Ledger
//!
//! `LedgerStore` over a `HashMap`, for tests and the local node.

use crate::domain::errors::LedgerError;
use crate::ports::outbound::LedgerStore;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

/// In-memory key-value ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::LockPoisoned` if a writer panicked.
    pub fn len(&self) -> Result<usize, LedgerError> {
        let entries = self.entries.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(entries.len())
    }

    /// Returns true if nothing has been written.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::LockPoisoned` if a writer panicked.
    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }

    /// Copy of every entry, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::LockPoisoned` if a writer panicked.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Vec<u8>>, LedgerError> {
        let entries = self.entries.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

impl LedgerStore for InMemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let entries = self.entries.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LedgerError::LockPoisoned)?;
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
