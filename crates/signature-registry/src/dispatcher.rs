//! # Dispatcher
//!
//! Stateless router from a function name to a handler operation. This is the
//! entry point seen by the host runtime.
//!
//! | Function | Operation |
//! |----------|-----------|
//! | `init`, `initialize` | `Operation::Init` |
//! | `write` | `Operation::Write` |
//! | `read`, `query` | `Operation::Read` |
//!
//! The older split between separate invoke and query entry points is served by
//! the same table: every name is accepted through `dispatch`.

use crate::domain::errors::RegistryError;
use crate::events::{Invocation, Response};
use crate::ports::outbound::LedgerStore;
use crate::service::SignatureRegistry;

use std::fmt;
use tracing::{debug, error, instrument, warn};

/// Operations the handler exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Store the bootstrap value.
    Init,
    /// Merge a signer into a fingerprint's record.
    Write,
    /// Return raw stored bytes.
    Read,
}

impl Operation {
    /// Resolve a function name. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(function: &str) -> Option<Self> {
        match function {
            "init" | "initialize" => Some(Self::Init),
            "write" => Some(Self::Write),
            "read" | "query" => Some(Self::Read),
            _ => None,
        }
    }

    /// Canonical function name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Write => "write",
            Self::Read => "read",
        }
    }

    /// Returns true if the operation writes to the ledger.
    #[must_use]
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Read)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Routes invocations to a `SignatureRegistry`.
pub struct Dispatcher<L: LedgerStore> {
    registry: SignatureRegistry<L>,
}

impl<L: LedgerStore> Dispatcher<L> {
    /// Wrap a handler.
    pub fn new(registry: SignatureRegistry<L>) -> Self {
        Self { registry }
    }

    /// The wrapped handler.
    pub fn registry(&self) -> &SignatureRegistry<L> {
        &self.registry
    }

    /// Run `function` with `args` and return its payload.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` for unrecognized names; otherwise whatever the
    /// handler operation returns.
    #[instrument(skip(self, args), fields(argc = args.len()))]
    pub fn dispatch(&self, function: &str, args: &[String]) -> Result<Vec<u8>, RegistryError> {
        let Some(operation) = Operation::parse(function) else {
            warn!(function, "Dispatcher did not find function");
            return Err(RegistryError::UnknownOperation(function.to_owned()));
        };
        debug!(%operation, mutating = operation.is_mutating(), "Dispatching");

        match operation {
            Operation::Init => self.registry.init(args),
            Operation::Write => self.registry.write(args),
            Operation::Read => self.registry.read(args),
        }
    }

    /// Run an invocation and wrap the outcome for the host.
    pub fn invoke(&self, invocation: &Invocation) -> Response {
        match self.dispatch(&invocation.function, &invocation.args) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                error!(function = %invocation.function, error = %e, "Invocation failed");
                Response::failure(&e)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
