//! # Registry Configuration

use crate::INIT_KEY;

/// Signature registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Ledger key written by `init`.
    pub init_key: String,
    /// Fail with `Conflict` instead of resetting when the stored record names
    /// a different fingerprint.
    pub strict_fingerprint_match: bool,
    /// Upper bound on the byte length of any argument.
    pub max_argument_len: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            init_key: INIT_KEY.to_string(),
            strict_fingerprint_match: false,
            max_argument_len: None,
        }
    }
}

impl RegistryConfig {
    /// Enable strict fingerprint matching.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict_fingerprint_match = true;
        self
    }

    /// Limit argument length.
    #[must_use]
    pub fn with_max_argument_len(mut self, max: usize) -> Self {
        self.max_argument_len = Some(max);
        self
    }
}
