//! # Error Types
//!
//! Errors surfaced by the registry and by ledger backends.

use crate::events::status;
use thiserror::Error;

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Failures reported by a `LedgerStore` implementation.
///
/// "Key not found" is NOT an error; backends return `Ok(None)` for it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Ledger backend cannot be reached.
    #[error("ledger unavailable")]
    Unavailable,

    /// Lock guarding the backend was poisoned.
    #[error("ledger lock poisoned")]
    LockPoisoned,

    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by the transaction handler and dispatcher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Wrong number of positional arguments.
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    Argument {
        /// Operation being invoked.
        operation: &'static str,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// An argument failed validation.
    #[error("invalid argument for {operation}: {reason}")]
    InvalidArgument {
        /// Operation being invoked.
        operation: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Ledger get/put failed.
    #[error("failed to access state for {key}: {reason}")]
    Ledger {
        /// Key being read or written.
        key: String,
        /// Underlying ledger failure.
        reason: LedgerError,
    },

    /// Key has no stored value.
    #[error("no state stored for {key}")]
    NotFound {
        /// Key that was queried.
        key: String,
    },

    /// Function name not recognized by the dispatcher.
    #[error("received unknown function invocation: {0}")]
    UnknownOperation(String),

    /// Stored record belongs to another fingerprint (strict mode only).
    #[error("record under {key} belongs to fingerprint {stored}")]
    Conflict {
        /// Key being written.
        key: String,
        /// Fingerprint found in the stored record.
        stored: String,
    },

    /// Record could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RegistryError {
    /// Wraps a ledger failure with the key it concerned.
    pub fn ledger(key: impl Into<String>, reason: LedgerError) -> Self {
        Self::Ledger {
            key: key.into(),
            reason,
        }
    }

    /// Returns true if the caller can fix the failure by changing the call.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Argument { .. } | Self::InvalidArgument { .. } | Self::UnknownOperation(_)
        )
    }

    /// Host status code for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        status::ERROR
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
