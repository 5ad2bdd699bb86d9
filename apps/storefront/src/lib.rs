//! # Sockshop Storefront Library
//!
//! The presentation adapter for the sockshop product card. It owns the
//! session state and turns each input line into a call on the model.
//!
//! ## Module Organization
//! ```text
//! sockshop_storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration from env + catalog file
//! │   └── storefront.rs ◄─ The Storefront aggregate
//! ├── commands/
//! │   ├── mod.rs      ◄─── Line parsing and dispatch
//! │   ├── product.rs  ◄─── Product card / swatch commands
//! │   ├── cart.rs     ◄─── Cart button commands
//! │   └── review.rs   ◄─── Review form commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::Command;
use error::ApiError;
use state::{ConfigError, ConfigState, Storefront};

/// Fatal startup or I/O failures. Command failures are never fatal.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("session I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// One JSON line written back for every input line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Reply {
    Ok { ok: bool, data: Value },
    Err { ok: bool, error: ApiError },
}

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ──► stderr, RUST_LOG or "info,sockshop=debug"    │
/// │  2. Load Config ─────────► SOCKSHOP_PREMIUM, SOCKSHOP_CATALOG, ...      │
/// │  3. Build Storefront ────► catalog + empty carts + no reviews           │
/// │  4. Session Loop ────────► one command per line until quit or EOF       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), RunError> {
    init_tracing();

    info!("Starting Sockshop storefront");

    let config = ConfigState::from_env();
    let mut store = Storefront::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut store, stdin.lock(), stdout.lock())?;

    info!("Storefront session ended");
    Ok(())
}

/// Reads commands from `input` and writes one JSON reply per line to
/// `output`. Blank lines are skipped; `quit` or end of input stops.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut Storefront,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = Command::parse(&line).and_then(|command| {
            if command == Command::Quit {
                return Ok(None);
            }
            commands::dispatch(store, command).map(Some)
        });

        let reply = match result {
            Ok(None) => break,
            Ok(Some(data)) => Reply::Ok { ok: true, data },
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "command failed");
                Reply::Err {
                    ok: false,
                    error: err,
                }
            }
        };

        serde_json::to_writer(&mut output, &reply)?;
        writeln!(output)?;
        output.flush()?;
    }

    debug!("input closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sockshop_core=trace` - Trace the model only
/// - Default: INFO, DEBUG for sockshop crates
///
/// Logs go to stderr; stdout carries replies only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sockshop_core=debug,sockshop_storefront_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies(script: &str) -> Vec<Value> {
        let mut store = Storefront::from_config(&ConfigState::default()).unwrap();
        let mut out = Vec::new();
        run_session(&mut store, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_session_end_to_end() {
        let out = replies(
            "product\nadd\nselect 1\nadd\nname Ada\nreview Warm\nrecommend yes\nsubmit\nrating 5\nsubmit\nreviews\n",
        );

        assert_eq!(out.len(), 11);
        assert_eq!(out[0]["data"]["stockTier"], "low");
        assert_eq!(out[1]["data"]["counter"], 1);
        assert_eq!(out[2]["data"]["inStock"], false);
        assert_eq!(out[3]["ok"], false);
        assert_eq!(out[3]["error"]["code"], "CART_ERROR");
        assert_eq!(out[7]["error"]["details"][0], "Rating required.");
        assert_eq!(out[9]["ok"], true);
        assert_eq!(out[10]["data"]["reviews"][0]["name"], "Ada");
    }

    #[test]
    fn test_session_stops_at_quit_and_skips_blank_lines() {
        let out = replies("\n   \ncart\nquit\nproduct\n");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["data"]["totalQuantity"], 0);
    }

    #[test]
    fn test_bad_command_does_not_end_session() {
        let out = replies("dance\nselect 9\ncart\n");
        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["error"]["code"], "BAD_COMMAND");
        assert_eq!(out[1]["error"]["code"], "NOT_FOUND");
        assert_eq!(out[2]["ok"], true);
    }
}
