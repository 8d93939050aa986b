//! # Domain Layer (Inner Hexagon)
//!
//! Pure signature aggregation logic.
//! NO I/O, NO ledger access.
//!
//! - `entities`: the signature record and its stored shape
//! - `codec`: tolerant decode, escaped encode
//! - `merge`: the signer-list transition rule
//! - `errors`: registry and ledger error types

pub mod codec;
pub mod entities;
pub mod errors;
pub mod merge;

pub use codec::*;
pub use entities::*;
pub use errors::*;
pub use merge::*;
