//! # Core Domain Entities
//!
//! The signature record is the only domain entity. It is stored under its own
//! fingerprint as ledger key.

use crate::SIGNER_SEPARATOR;
use serde::{Deserialize, Serialize};

// =============================================================================
// SIGNATURE RECORD
// =============================================================================

/// Ordered, de-duplicated signers of one document.
///
/// The most recently merged signer comes first. An empty `fingerprint` means
/// "no usable prior record" (absent key or unreadable bytes).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureRecord {
    /// Document hash; also the ledger key.
    pub fingerprint: String,
    /// Signer email addresses, newest first.
    pub signers: Vec<String>,
}

impl SignatureRecord {
    /// Creates a record for `fingerprint` with the given signers.
    #[must_use]
    pub fn new(fingerprint: impl Into<String>, signers: Vec<String>) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            signers,
        }
    }

    /// Returns true if the record carries no fingerprint and no signers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingerprint.is_empty() && self.signers.is_empty()
    }

    /// Returns true if `signer` has signed (exact, case-sensitive match).
    #[must_use]
    pub fn contains(&self, signer: &str) -> bool {
        self.signers.iter().any(|s| s == signer)
    }

    /// Number of signers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signers.len()
    }

    /// Returns true if `fingerprint` identifies the same document as this record.
    #[must_use]
    pub fn pertains_to(&self, fingerprint: &str) -> bool {
        self.fingerprint == fingerprint
    }
}

// =============================================================================
// STORED SHAPE
// =============================================================================

/// Two-field object persisted under the fingerprint key.
///
/// Field order is fixed: `email` then `pdfhash`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSignature {
    /// Comma-joined signer list.
    #[serde(default)]
    pub email: String,
    /// Document fingerprint.
    #[serde(default)]
    pub pdfhash: String,
}

impl From<&SignatureRecord> for StoredSignature {
    fn from(record: &SignatureRecord) -> Self {
        Self {
            email: record.signers.join(SIGNER_SEPARATOR),
            pdfhash: record.fingerprint.clone(),
        }
    }
}

impl From<StoredSignature> for SignatureRecord {
    fn from(stored: StoredSignature) -> Self {
        let signers = stored
            .email
            .split(SIGNER_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Self {
            fingerprint: stored.pdfhash,
            signers,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
