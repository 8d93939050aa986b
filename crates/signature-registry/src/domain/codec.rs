//! # Record Codec
//!
//! Converts between `SignatureRecord` and the bytes stored in the ledger.
//!
//! Reads are tolerant: absent, empty or unparsable bytes decode to an empty
//! record so the merger treats them exactly like "no prior signers".

use crate::domain::entities::{SignatureRecord, StoredSignature};
use crate::domain::errors::RegistryError;
use tracing::warn;

/// Decodes stored bytes into a record.
///
/// Never fails. Anything that is not a JSON object with string `email` /
/// `pdfhash` fields yields `SignatureRecord::default()`.
#[must_use]
pub fn decode(bytes: &[u8]) -> SignatureRecord {
    if bytes.is_empty() {
        return SignatureRecord::default();
    }
    match serde_json::from_slice::<StoredSignature>(bytes) {
        Ok(stored) => stored.into(),
        Err(e) => {
            warn!(error = %e, len = bytes.len(), "Discarding unreadable signature record");
            SignatureRecord::default()
        }
    }
}

/// Encodes a record as `{"email":"...","pdfhash":"..."}`.
///
/// Field contents are JSON-escaped. Signers must not contain `,`; this is not
/// checked.
///
/// # Errors
///
/// Returns `RegistryError::Serialization` if the JSON encoder fails.
pub fn encode(record: &SignatureRecord) -> Result<Vec<u8>, RegistryError> {
    Ok(serde_json::to_vec(&StoredSignature::from(record))?)
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
    fn test_encode_wire_format() {
        let bytes = encode(&record("HASH1", &["bob@x.com", "alice@x.com"])).unwrap();
        assert_eq!(
            bytes,
            br#"{"email":"bob@x.com,alice@x.com","pdfhash":"HASH1"}"#
        );
    }

    #[test]
    fn test_encode_escapes_quotes() {
        let bytes = encode(&record(r#"H"1"#, &[r#"eve"@x.com"#])).unwrap();
        let decoded = decode(&bytes);
        assert_eq!(decoded.fingerprint, r#"H"1"#);
        assert_eq!(decoded.signers, vec![r#"eve"@x.com"#]);
    }

    #[test]
    fn test_decode_accepts_spaced_legacy_layout() {
        let decoded = decode(br#"{"email": "a@x.com,b@x.com", "pdfhash": "HASH1"}"#);
        assert_eq!(decoded, record("HASH1", &["a@x.com", "b@x.com"]));
    }

    #[test]
    fn test_decode_empty_is_default() {
        assert_eq!(decode(b""), SignatureRecord::default());
    }

    #[test]
    fn test_decode_garbage_is_default() {
        assert_eq!(decode(b"not json at all"), SignatureRecord::default());
        assert_eq!(decode(br#"{"email": 42}"#), SignatureRecord::default());
        assert_eq!(decode(b"[1,2,3]"), SignatureRecord::default());
    }

    #[test]
    fn test_decode_missing_fields() {
        let decoded = decode(br#"{"pdfhash":"HASH1"}"#);
        assert_eq!(decoded.fingerprint, "HASH1");
        assert!(decoded.signers.is_empty());

        assert_eq!(decode(b"{}"), SignatureRecord::default());
    }
}
