//! # Signer-List Merger
//!
//! The only state transition in the registry. Given the record currently
//! stored under a fingerprint and a new signer, produce the next signer list:
//!
//! ```text
//! existing = {pdfhash: H, email: "b,a"}     write(H, a)  →  [a, b]
//! existing = {pdfhash: H, email: "b,a"}     write(H, c)  →  [c, b, a]
//! existing = {pdfhash: X, email: "b,a"}     write(H, c)  →  [c]
//! existing = <absent>                       write(H, c)  →  [c]
//! ```

use crate::domain::entities::SignatureRecord;

/// How the existing record relates to the fingerprint being written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No usable prior record (absent, empty or unreadable).
    Created,
    /// Prior record belongs to this fingerprint; its signers carry over.
    Continued,
    /// Prior record names another fingerprint; its signers are dropped.
    Replaced {
        /// Fingerprint found in the stored record.
        stored: String,
    },
}

impl MergeOutcome {
    /// Classifies `existing` against the fingerprint being written.
    #[must_use]
    pub fn classify(existing: &SignatureRecord, fingerprint: &str) -> Self {
        if existing.pertains_to(fingerprint) {
            Self::Continued
        } else if existing.fingerprint.is_empty() {
            Self::Created
        } else {
            Self::Replaced {
                stored: existing.fingerprint.clone(),
            }
        }
    }
}

/// Computes the signer list after `signer` signs `fingerprint`.
///
/// `signer` always ends up first and exactly once. Prior signers are kept, in
/// order, only when `existing.fingerprint == fingerprint`.
#[must_use]
pub fn merge(existing: &SignatureRecord, fingerprint: &str, signer: &str) -> Vec<String> {
    let mut signers = vec![signer.to_owned()];
    if existing.pertains_to(fingerprint) {
        signers.extend(
            existing
                .signers
                .iter()
                .filter(|s| s.as_str() != signer)
                .cloned(),
        );
    }
    signers
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fingerprint: &str, signers: &[&str]) -> SignatureRecord {
        SignatureRecord::new(
            fingerprint,
            signers.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    #[test]
    fn test_merge_into_empty() {
        let merged = merge(&SignatureRecord::default(), "H", "a@x.com");
        assert_eq!(merged, vec!["a@x.com"]);
    }

    #[test]
    fn test_new_signer_goes_first() {
        let merged = merge(&record("H", &["a@x.com"]), "H", "b@x.com");
        assert_eq!(merged, vec!["b@x.com", "a@x.com"]);
    }

    #[test]
    fn test_resign_moves_to_front() {
        let merged = merge(&record("H", &["b@x.com", "a@x.com"]), "H", "a@x.com");
        assert_eq!(merged, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_same_signer_is_idempotent() {
        let merged = merge(&record("H", &["a@x.com"]), "H", "a@x.com");
        assert_eq!(merged, vec!["a@x.com"]);
    }

    #[test]
    fn test_preserves_relative_order() {
        let merged = merge(&record("H", &["c", "b", "a"]), "H", "b");
        assert_eq!(merged, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let merged = merge(&record("H", &["A@x.com"]), "H", "a@x.com");
        assert_eq!(merged, vec!["a@x.com", "A@x.com"]);
    }

    #[test]
    fn test_foreign_fingerprint_resets() {
        let merged = merge(&record("OTHER", &["b", "a"]), "H", "c");
        assert_eq!(merged, vec!["c"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            MergeOutcome::classify(&SignatureRecord::default(), "H"),
            MergeOutcome::Created
        );
        assert_eq!(
            MergeOutcome::classify(&record("H", &["a"]), "H"),
            MergeOutcome::Continued
        );
        assert_eq!(
            MergeOutcome::classify(&record("X", &["a"]), "H"),
            MergeOutcome::Replaced {
                stored: "X".to_string()
            }
        );
    }
}
