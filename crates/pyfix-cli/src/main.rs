//! pyfix: format Python source with black and isort for an editor
//!
//! # Usage
//!
//! ```bash
//! echo '{"cmd":"fix","source":"import b\nimport a\n"}' | pyfix
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `warn`)
//!
//! # Protocol
//!
//! The whole of stdin is one JSON request; one JSON reply is written to
//! stdout. Logs go to stderr. The exit status is always 0: failures are
//! reported in the reply.

use std::path::PathBuf;
use std::process::ExitCode;

use pyfix_core::{Session, logging, serve};
use pyfix_engine::EngineManager;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("pyfix: failed to initialize logging: {e}");
    }

    let manager = EngineManager::discover();
    let health = manager.health_check();
    for message in &health.messages {
        tracing::debug!(available = health.available, "{message}");
    }

    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Cannot read the working directory");
        PathBuf::from(".")
    });

    let session = Session::start(manager.engines(), cwd);
    if let Err(e) = serve(session, std::io::stdin().lock(), std::io::stdout().lock()) {
        tracing::error!(error = %e, "Failed to write reply");
    }

    ExitCode::SUCCESS
}
