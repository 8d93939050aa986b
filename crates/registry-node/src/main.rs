//! # Registry Node
//!
//! Entry point for the local signature registry host.
//!
//! ## Startup Sequence
//!
//! 1. Install the log subscriber (stderr, `RUST_LOG`, default `info`)
//! 2. Load configuration from the environment
//! 3. Build the dispatcher, running the bootstrap `init` if configured
//! 4. Serve JSON-line invocations from stdin until EOF or Ctrl+C

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use registry_node::{build_dispatcher, serve, NodeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Signature registry node v{}", signature_registry::VERSION);

    let config = NodeConfig::from_env();
    let dispatcher = build_dispatcher(&config)?;

    tokio::select! {
        handled = serve(&dispatcher, tokio::io::stdin(), tokio::io::stdout()) => {
            info!(requests = handled?, "Input closed, shutting down");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
