//! college-info: read-only college information service.
//!
//! This crate wires the two workspace libraries together so the binary,
//! integration tests and benchmarks share one assembly path.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Catalog::embedded ──► AppState ──► axum Router
//!                                      │
//!                                      └──► query engine (per request)
//! ```
//!
//! Request handling is fully synchronous once inside a handler; the only
//! async work is the socket I/O driven by axum.

pub use college_api::{router, AppState, Envelope, COLLEGES_PATH};
pub use college_core::config::Config;
pub use college_core::Catalog;

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Build the application router over `catalog` with the limits in `config`.
pub fn app(catalog: Catalog, config: &Config) -> axum::Router {
    router(AppState::new(catalog, config))
}

/// Install the global `tracing` subscriber. `RUST_LOG` takes precedence over
/// `level`. With `debug_log` set, output goes to that file instead of stderr.
pub fn init_tracing(level: &str, debug_log: Option<&Path>) -> anyhow::Result<()> {
    match debug_log {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(env_filter("debug"))
                .init();
            tracing::info!("college-info debug log started, tail -f {}", path.display());
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .init();
        }
    }
    Ok(())
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default))
}
