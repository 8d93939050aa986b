//! # Transaction Handler
//!
//! Validates positional arguments, runs the read-modify-write cycle for
//! signatures and exposes raw reads.
//!
//! ## Operations
//!
//! | Operation | Args | Ledger effect |
//! |-----------|------|---------------|
//! | `init` | `value` | `put(init_key, value)` |
//! | `write` | `fingerprint, signer` | `get(fingerprint)` → merge → `put(fingerprint, record)` |
//! | `read` | `key` | `get(key)` |
//!
//! Argument checks run before any ledger access, so a rejected call never
//! mutates state.

use crate::config::RegistryConfig;
use crate::domain::codec::{decode, encode};
use crate::domain::entities::SignatureRecord;
use crate::domain::errors::RegistryError;
use crate::domain::merge::{merge, MergeOutcome};
use crate::ports::inbound::SignatureRegistryApi;
use crate::ports::outbound::LedgerStore;

use tracing::{debug, info, instrument, warn};

/// Signature registry transaction handler.
///
/// Holds no state of its own between calls; everything lives in the ledger.
pub struct SignatureRegistry<L: LedgerStore> {
    /// Ledger accessor.
    ledger: L,
    /// Handler configuration.
    config: RegistryConfig,
}

impl<L: LedgerStore> SignatureRegistry<L> {
    /// Create a handler with the default configuration.
    pub fn new(ledger: L) -> Self {
        Self::with_config(ledger, RegistryConfig::default())
    }

    /// Create a handler with an explicit configuration.
    pub fn with_config(ledger: L, config: RegistryConfig) -> Self {
        Self { ledger, config }
    }

    /// Handler configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// `init(value)`: store the bootstrap value. Returns an empty payload.
    ///
    /// # Errors
    ///
    /// `Argument` unless exactly one argument is given; `Ledger` if the put fails.
    #[instrument(skip(self, args), fields(argc = args.len()))]
    pub fn init(&self, args: &[String]) -> Result<Vec<u8>, RegistryError> {
        self.expect_args("init", args, 1)?;
        self.initialize(&args[0])?;
        Ok(Vec::new())
    }

    /// `write(fingerprint, signer)`: merge `signer` into the record. Returns an
    /// empty payload.
    ///
    /// # Errors
    ///
    /// `Argument` unless exactly two arguments are given; `InvalidArgument` for
    /// an empty signer; `Ledger` if the read or the write fails; `Conflict` in
    /// strict mode on a foreign record.
    #[instrument(skip(self, args), fields(argc = args.len()))]
    pub fn write(&self, args: &[String]) -> Result<Vec<u8>, RegistryError> {
        self.expect_args("write", args, 2)?;
        self.sign(&args[0], &args[1])?;
        Ok(Vec::new())
    }

    /// `read(key)`: raw stored bytes, undecoded.
    ///
    /// # Errors
    ///
    /// `Argument` unless exactly one argument is given; `NotFound` if the key
    /// was never written; `Ledger` if the get fails.
    #[instrument(skip(self, args), fields(argc = args.len()))]
    pub fn read(&self, args: &[String]) -> Result<Vec<u8>, RegistryError> {
        self.expect_args("read", args, 1)?;
        self.query(&args[0])
    }

    /// Checks argument count, then argument length if configured.
    fn expect_args(
        &self,
        operation: &'static str,
        args: &[String],
        expected: usize,
    ) -> Result<(), RegistryError> {
        if args.len() != expected {
            warn!(operation, expected, actual = args.len(), "Rejecting call");
            return Err(RegistryError::Argument {
                operation,
                expected,
                actual: args.len(),
            });
        }
        if let Some(max) = self.config.max_argument_len {
            if let Some((index, arg)) = args.iter().enumerate().find(|(_, a)| a.len() > max) {
                return Err(RegistryError::InvalidArgument {
                    operation,
                    reason: format!("argument {index} is {} bytes, limit is {max}", arg.len()),
                });
            }
        }
        Ok(())
    }

    /// Current record under `fingerprint`. Absent reads as empty; a failed
    /// read is returned as an error.
    fn load_record(&self, fingerprint: &str) -> Result<SignatureRecord, RegistryError> {
        let bytes = self
            .ledger
            .get(fingerprint)
            .map_err(|e| RegistryError::ledger(fingerprint, e))?
            .unwrap_or_default();
        Ok(decode(&bytes))
    }
}

impl<L: LedgerStore> SignatureRegistryApi for SignatureRegistry<L> {
    fn initialize(&self, value: &str) -> Result<(), RegistryError> {
        let key = self.config.init_key.as_str();
        self.ledger
            .put(key, value.as_bytes().to_vec())
            .map_err(|e| RegistryError::ledger(key, e))?;
        info!(key, "Registry initialized");
        Ok(())
    }

    fn sign(&self, fingerprint: &str, signer: &str) -> Result<Vec<String>, RegistryError> {
        // Empty segments are dropped on decode.
        if signer.is_empty() {
            return Err(RegistryError::InvalidArgument {
                operation: "write",
                reason: "signer must not be empty".to_string(),
            });
        }

        let existing = self.load_record(fingerprint)?;

        match MergeOutcome::classify(&existing, fingerprint) {
            MergeOutcome::Replaced { stored } if self.config.strict_fingerprint_match => {
                warn!(fingerprint, stored = %stored, "Refusing to replace foreign record");
                return Err(RegistryError::Conflict {
                    key: fingerprint.to_owned(),
                    stored,
                });
            }
            MergeOutcome::Replaced { stored } => {
                warn!(fingerprint, stored = %stored, "Stored record names another fingerprint, resetting signers");
            }
            outcome => debug!(fingerprint, ?outcome, prior = existing.len(), "Merging signer"),
        }

        let record = SignatureRecord::new(fingerprint, merge(&existing, fingerprint, signer));
        let bytes = encode(&record)?;
        self.ledger
            .put(fingerprint, bytes)
            .map_err(|e| RegistryError::ledger(fingerprint, e))?;

        info!(fingerprint, signer, signers = record.len(), "Signature recorded");
        Ok(record.signers)
    }

    fn query(&self, key: &str) -> Result<Vec<u8>, RegistryError> {
        self.ledger
            .get(key)
            .map_err(|e| RegistryError::ledger(key, e))?
            .ok_or_else(|| RegistryError::NotFound {
                key: key.to_owned(),
            })
    }

    fn signers(&self, fingerprint: &str) -> Result<Vec<String>, RegistryError> {
        let record = self.load_record(fingerprint)?;
        if record.pertains_to(fingerprint) {
            Ok(record.signers)
        } else {
            Ok(Vec::new())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
