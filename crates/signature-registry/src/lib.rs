//! # Signature Registry - Document Countersignature Ledger
//!
//! Maintains, per document fingerprint, the de-duplicated list of signers who
//! have countersigned that exact document. All state lives in an external
//! key-value ledger; this crate only implements the read-modify-write rules.
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Record Codec | `domain/codec.rs` | `{email, pdfhash}` wire shape <-> `SignatureRecord` |
//! | Signer-List Merger | `domain/merge.rs` | Newest signer first, no duplicates |
//! | Ledger Accessor | `ports/outbound.rs` | `LedgerStore` get/put contract |
//! | Transaction Handler | `service.rs` | `init`, `write`, `read` |
//! | Dispatcher | `dispatcher.rs` | Function name -> handler operation |
//!
//! ## Control Flow
//!
//! ```text
//! Dispatcher ──→ SignatureRegistry ──get──→ LedgerStore
//!                        │
//!                   decode → merge → encode
//!                        │
//!                        └──────────put──→ LedgerStore
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | No signer appears twice in a record | `domain/merge.rs` - `merge()` |
//! | Newest signer is always first | `domain/merge.rs` - `merge()` |
//! | Missing or garbled record reads as empty | `domain/codec.rs` - `decode()` |
//! | Wrong argument count never touches the ledger | `service.rs` - `expect_args()` |
//!
//! ## Usage Example
//!
//! ```
//! use signature_registry::prelude::*;
//!
//! let dispatcher = Dispatcher::new(SignatureRegistry::new(InMemoryLedger::new()));
//!
//! let response = dispatcher.invoke(&Invocation::new("write", ["HASH1", "alice@x.com"]));
//! assert!(response.is_ok());
//!
//! let response = dispatcher.invoke(&Invocation::new("read", ["HASH1"]));
//! assert_eq!(response.payload, br#"{"email":"alice@x.com","pdfhash":"HASH1"}"#);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::codec::{decode, encode};
    pub use crate::domain::entities::{SignatureRecord, StoredSignature};
    pub use crate::domain::errors::{LedgerError, RegistryError};
    pub use crate::domain::merge::{merge, MergeOutcome};

    // Ports
    pub use crate::ports::inbound::SignatureRegistryApi;
    pub use crate::ports::outbound::LedgerStore;

    // Adapters
    pub use crate::adapters::InMemoryLedger;

    // Service, dispatch and configuration
    pub use crate::config::RegistryConfig;
    pub use crate::dispatcher::{Dispatcher, Operation};
    pub use crate::events::{status, Invocation, Response};
    pub use crate::service::SignatureRegistry;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ledger key written by `init`.
pub const INIT_KEY: &str = "initialize_var";

/// Separator used to join signers inside the stored `email` field.
pub const SIGNER_SEPARATOR: &str = ",";

// =============================================================================
// TESTS
// =============================================================================
