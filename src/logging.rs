//! Subscriber setup for binaries and tests.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to whoever links it.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{GraphError, Result};

/// Install a stderr `fmt` subscriber filtered by `level`.
///
/// `level` takes `EnvFilter` syntax (`"info"`, `"dgraph=debug"`). A set
/// `RUST_LOG` wins over it.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| GraphError::InvalidConfig(format!("invalid log filter: {e}")))?,
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| GraphError::InvalidConfig("logging already initialized".into()))
}
