//! # Driven Ports (SPI - Outbound)
//!
//! The ledger is an external collaborator. The registry needs only a
//! single-key get and a single-key put from it; durability, ordering and
//! consensus belong to the host.

use crate::domain::errors::LedgerError;

/// Key-value access to the host ledger.
///
/// Implementations must keep "not found" distinct from a failure:
///
/// * `Ok(None)` - key has never been written
/// * `Err(_)` - storage or transport failure
pub trait LedgerStore: Send + Sync {
    /// Get the raw bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, fully replacing any prior value.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;
}

impl<L: LedgerStore + ?Sized> LedgerStore for &L {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        (**self).put(key, value)
    }
}

impl<L: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<L> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        (**self).put(key, value)
    }
}
