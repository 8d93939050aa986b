//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the signature registry.
//!
//! - **Driving Port (Inbound)**: `SignatureRegistryApi`
//! - **Driven Port (Outbound)**: `LedgerStore`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
