//! End-to-end signature flows through the dispatcher.

use signature_registry::prelude::*;
use std::sync::Arc;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn dispatcher() -> Dispatcher<Arc<InMemoryLedger>> {
    Dispatcher::new(SignatureRegistry::new(Arc::new(InMemoryLedger::new())))
}

fn write<L: LedgerStore>(d: &Dispatcher<L>, fingerprint: &str, signer: &str) {
    d.dispatch("write", &args(&[fingerprint, signer]))
        .expect("write should succeed");
}

fn signers<L: LedgerStore>(d: &Dispatcher<L>, fingerprint: &str) -> Vec<String> {
    let raw = d
        .dispatch("read", &args(&[fingerprint]))
        .expect("record should exist");
    decode(&raw).signers
}

#[test]
fn test_two_signers_newest_first() {
    let d = dispatcher();
    write(&d, "f", "a");
    write(&d, "f", "b");
    assert_eq!(signers(&d, "f"), vec!["b", "a"]);
}

#[test]
fn test_repeat_signature_is_idempotent() {
    let d = dispatcher();
    write(&d, "f", "a");
    write(&d, "f", "a");
    assert_eq!(signers(&d, "f"), vec!["a"]);
}

#[test]
fn test_resign_reorders_to_front() {
    let d = dispatcher();
    write(&d, "f", "a");
    write(&d, "f", "b");
    write(&d, "f", "a");
    assert_eq!(signers(&d, "f"), vec!["a", "b"]);
}

#[test]
fn test_fingerprints_are_isolated() {
    let d = dispatcher();
    write(&d, "f1", "a");
    write(&d, "f2", "b");
    write(&d, "f1", "c");

    assert_eq!(signers(&d, "f1"), vec!["c", "a"]);
    assert_eq!(signers(&d, "f2"), vec!["b"]);
}

#[test]
fn test_write_does_not_create_other_keys() {
    let d = dispatcher();
    write(&d, "f1", "a");

    let err = d.dispatch("read", &args(&["f2"])).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { ref key } if key == "f2"));
}

#[test]
fn test_malformed_value_reads_raw_and_merges_as_empty() {
    let ledger = Arc::new(InMemoryLedger::new());
    let d = Dispatcher::new(SignatureRegistry::new(Arc::clone(&ledger)));
    ledger.put("f", b"{broken".to_vec()).unwrap();

    assert_eq!(d.dispatch("read", &args(&["f"])).unwrap(), b"{broken");
    assert!(decode(b"{broken").is_empty());

    write(&d, "f", "a");
    assert_eq!(signers(&d, "f"), vec!["a"]);
}

#[test]
fn test_init_seed_is_stored_verbatim() {
    let ledger = Arc::new(InMemoryLedger::new());
    let d = Dispatcher::new(SignatureRegistry::new(Arc::clone(&ledger)));

    d.dispatch("init", &args(&["seed"])).unwrap();
    let state = ledger.snapshot().unwrap();
    assert_eq!(state.len(), 1);
    assert_eq!(state["initialize_var"], b"seed");
}

#[test]
fn test_write_arity_errors_leave_ledger_untouched() {
    let ledger = Arc::new(InMemoryLedger::new());
    let d = Dispatcher::new(SignatureRegistry::new(Arc::clone(&ledger)));

    for bad in [args(&["f"]), args(&["f", "a", "b"])] {
        let err = d.dispatch("write", &bad).unwrap_err();
        assert!(matches!(err, RegistryError::Argument { operation: "write", .. }));
    }
    assert!(ledger.snapshot().unwrap().is_empty());
}

#[test]
fn test_read_arity_error() {
    let d = dispatcher();
    let err = d.dispatch("read", &args(&[])).unwrap_err();
    assert!(err.is_caller_error());
}

#[test]
fn test_stored_bytes_end_to_end() {
    let d = dispatcher();

    write(&d, "HASH1", "alice@x.com");
    assert_eq!(
        d.dispatch("read", &args(&["HASH1"])).unwrap(),
        br#"{"email":"alice@x.com","pdfhash":"HASH1"}"#
    );

    write(&d, "HASH1", "bob@x.com");
    let raw = d.dispatch("read", &args(&["HASH1"])).unwrap();
    assert_eq!(raw, br#"{"email":"bob@x.com,alice@x.com","pdfhash":"HASH1"}"#);

    let record = decode(&raw);
    assert_eq!(record.fingerprint, "HASH1");
    assert_eq!(record.signers, vec!["bob@x.com", "alice@x.com"]);
}

#[test]
fn test_many_signers_stay_unique() {
    let d = dispatcher();
    let pool = ["a", "b", "c", "d"];
    for i in 0..40 {
        write(&d, "f", pool[(i * 7) % pool.len()]);
    }

    let list = signers(&d, "f");
    assert_eq!(list.len(), pool.len());
    for s in pool {
        assert_eq!(list.iter().filter(|x| x.as_str() == s).count(), 1);
    }
    // Signer written last ends up first.
    assert_eq!(list[0], "b");
}

#[test]
fn test_empty_signer_rejected_and_ledger_unchanged() {
    let ledger = Arc::new(InMemoryLedger::new());
    let d = Dispatcher::new(SignatureRegistry::new(Arc::clone(&ledger)));
    write(&d, "f", "a");
    let before = ledger.snapshot().unwrap();

    let err = d.dispatch("write", &args(&["f", ""])).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument { operation: "write", .. }));
    assert_eq!(ledger.snapshot().unwrap(), before);

    let reported = d.registry().sign("f", "b").unwrap();
    assert_eq!(signers(&d, "f"), reported);
}
