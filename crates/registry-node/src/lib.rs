//! # Registry Node
//!
//! Local host for the signature registry. Stands in for the ledger runtime:
//! owns an in-memory ledger, applies configuration from the environment and
//! serves one JSON invocation per line.
//!
//! ## Line Protocol
//!
//! ```text
//! stdin:  {"function":"write","args":["HASH1","alice@x.com"]}
//! stdout: {"status":200,"message":"","payload":""}
//!
//! stdin:  ["read","HASH1"]
//! stdout: {"status":200,"message":"","payload":"{\"email\":\"alice@x.com\",\"pdfhash\":\"HASH1\"}"}
//! ```
//!
//! A line may be an invocation object or a bare array whose first element is
//! the function name. Payloads are rendered as UTF-8 (lossy).

pub mod config;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use signature_registry::prelude::*;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

pub use config::NodeConfig;

/// Dispatcher over the node's in-memory ledger.
pub type NodeDispatcher = Dispatcher<Arc<InMemoryLedger>>;

/// Build the dispatcher and run the bootstrap `init` if configured.
///
/// # Errors
///
/// Fails if the bootstrap `init` is rejected.
pub fn build_dispatcher(config: &NodeConfig) -> Result<NodeDispatcher> {
    let ledger = Arc::new(InMemoryLedger::new());
    let dispatcher = Dispatcher::new(SignatureRegistry::with_config(
        ledger,
        config.registry.clone(),
    ));
    let registry_config = dispatcher.registry().config();
    info!(
        init_key = %registry_config.init_key,
        strict = registry_config.strict_fingerprint_match,
        "Dispatcher ready"
    );

    if let Some(value) = &config.init_value {
        dispatcher
            .dispatch("init", std::slice::from_ref(value))
            .context("bootstrap init failed")?;
        info!("Bootstrap value written");
    }

    Ok(dispatcher)
}

/// Parse one request line.
///
/// # Errors
///
/// Fails if the line is neither an invocation object nor a string array.
pub fn parse_invocation(line: &str) -> Result<Invocation> {
    let value: Value = serde_json::from_str(line).context("request is not valid JSON")?;
    if value.is_array() {
        let args: Vec<String> =
            serde_json::from_value(value).context("request array must contain strings")?;
        return Ok(Invocation::from_args(args));
    }
    serde_json::from_value(value).context("request is not an invocation object")
}

/// Render a response as a single JSON line.
#[must_use]
pub fn render_response(response: &Response) -> String {
    json!({
        "status": response.status,
        "message": response.message,
        "payload": String::from_utf8_lossy(&response.payload),
    })
    .to_string()
}

/// Handle one request line and produce one response line.
pub fn process_line(dispatcher: &NodeDispatcher, line: &str) -> String {
    let response = match parse_invocation(line) {
        Ok(invocation) => {
            debug!(function = %invocation.function, "Request received");
            dispatcher.invoke(&invocation)
        }
        Err(e) => {
            warn!(error = %e, "Malformed request");
            Response::error(format!("{e:#}"))
        }
    };
    render_response(&response)
}

/// Serve requests from `input` until EOF, writing responses to `output`.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Fails on I/O errors.
pub async fn serve<R, W>(dispatcher: &NodeDispatcher, input: R, mut output: W) -> Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut handled = 0u64;

    while let Some(line) = lines.next_line().await.context("failed to read request")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let reply = process_line(dispatcher, line);
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        handled += 1;
    }

    Ok(handled)
}

// =============================================================================
// TESTS
// =============================================================================
