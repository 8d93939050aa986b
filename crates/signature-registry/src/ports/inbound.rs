//! # Driving Ports (API - Inbound)
//!
//! Typed operations exposed by the registry. The dispatcher reaches these
//! through positional string arguments; in-process callers can use them
//! directly.

use crate::domain::errors::RegistryError;

/// Primary API of the signature registry.
///
/// ## Usage
///
/// ```ignore
/// registry.initialize("seed")?;
/// registry.sign("HASH1", "alice@x.com")?;
/// let raw = registry.query("HASH1")?;
/// ```
pub trait SignatureRegistryApi {
    /// Store `value` under the configured init key.
    fn initialize(&self, value: &str) -> Result<(), RegistryError>;

    /// Record that `signer` signed `fingerprint`.
    ///
    /// Returns the signer list as stored after the merge.
    fn sign(&self, fingerprint: &str, signer: &str) -> Result<Vec<String>, RegistryError>;

    /// Raw bytes stored under `key`, undecoded.
    ///
    /// # Errors
    ///
    /// * `NotFound` - the key has never been written
    /// * `Ledger` - the ledger read failed
    fn query(&self, key: &str) -> Result<Vec<u8>, RegistryError>;

    /// Decoded signers of `fingerprint`, newest first.
    ///
    /// Absent or unreadable records yield an empty list.
    fn signers(&self, fingerprint: &str) -> Result<Vec<String>, RegistryError>;
}
