//! # Invocation Contract
//!
//! Messages exchanged with the host runtime: a function name plus positional
//! string arguments in, a status-coded response out.

use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};

/// Host status codes.
pub mod status {
    /// Invocation succeeded.
    pub const OK: u16 = 200;
    /// Invocation failed.
    pub const ERROR: u16 = 500;
}

// =============================================================================
// INBOUND
// =============================================================================

/// A single call from the host runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Requested function name.
    pub function: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation from a function name and arguments.
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Unified entry point: the first argument is the function name.
    ///
    /// An empty argument list yields an empty function name, which the
    /// dispatcher rejects as unknown.
    #[must_use]
    pub fn from_args(mut args: Vec<String>) -> Self {
        if args.is_empty() {
            return Self::default();
        }
        let function = args.remove(0);
        Self { function, args }
    }
}

// =============================================================================
// OUTBOUND
// =============================================================================

/// Result returned to the host runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// `status::OK` or `status::ERROR`.
    pub status: u16,
    /// Human-readable failure message; empty on success.
    #[serde(default)]
    pub message: String,
    /// Success payload; possibly empty.
    #[serde(default)]
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: status::OK,
            message: String::new(),
            payload,
        }
    }

    /// Failed response with a message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: status::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Failed response for a registry error, using its status code.
    #[must_use]
    pub fn failure(err: &RegistryError) -> Self {
        Self {
            status: err.status_code(),
            message: err.to_string(),
            payload: Vec::new(),
        }
    }

    /// Returns true on `status::OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == status::OK
    }
}

// =============================================================================
// TESTS
// =============================================================================
