//! # Node Configuration
//!
//! Loaded from environment variables; every setting has a default.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `SIG_REGISTRY_INIT_VALUE` | Run `init` with this value at startup |
//! | `SIG_REGISTRY_STRICT` | `1`/`true` enables, `0`/`false` disables strict fingerprint matching (case-insensitive) |
//! | `SIG_REGISTRY_MAX_ARG_LEN` | Byte limit per argument |

use signature_registry::config::RegistryConfig;
use tracing::{info, warn};

/// Environment variable holding the bootstrap value.
pub const ENV_INIT_VALUE: &str = "SIG_REGISTRY_INIT_VALUE";
/// Environment variable enabling strict fingerprint matching.
pub const ENV_STRICT: &str = "SIG_REGISTRY_STRICT";
/// Environment variable limiting argument length.
pub const ENV_MAX_ARG_LEN: &str = "SIG_REGISTRY_MAX_ARG_LEN";

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Registry handler configuration.
    pub registry: RegistryConfig,
    /// Value passed to `init` at startup.
    pub init_value: Option<String>,
}

impl NodeConfig {
    /// Load configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`. Unparsable values are logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_INIT_VALUE) {
            config.init_value = Some(value);
        }

        if let Some(flag) = lookup(ENV_STRICT) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => config.registry.strict_fingerprint_match = true,
                "0" | "false" | "" => {}
                other => warn!(value = other, "{ENV_STRICT} is not a boolean, ignoring"),
            }
        }

        if let Some(limit) = lookup(ENV_MAX_ARG_LEN) {
            match limit.trim().parse() {
                Ok(max) => config.registry.max_argument_len = Some(max),
                Err(_) => warn!(value = %limit, "{ENV_MAX_ARG_LEN} must be a byte count, ignoring"),
            }
        }

        info!(
            strict = config.registry.strict_fingerprint_match,
            max_argument_len = ?config.registry.max_argument_len,
            bootstrap = config.init_value.is_some(),
            "Configuration loaded"
        );
        config
    }
}
