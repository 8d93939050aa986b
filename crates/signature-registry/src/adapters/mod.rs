//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete `LedgerStore` implementations. Production deployments provide
//! their own adapter over the host ledger.

pub mod memory_ledger;

pub use memory_ledger::*;
