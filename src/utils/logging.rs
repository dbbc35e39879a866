//! Logging setup
//!
//! Installs a `tracing` subscriber for binaries and tests that want one.
//! `RUST_LOG` wins over the directive passed in.

use tracing_subscriber::EnvFilter;

use crate::utils::error::{FilterError, Result};

/// Initialize the global tracing subscriber.
///
/// `directive` is a default filter such as `"obscenity_rs=debug"`, used when
/// `RUST_LOG` is not set. Calling this twice returns an error, so libraries
/// embedding the filter should leave initialization to the host application.
pub fn init_logging(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .map_err(|err| FilterError::config(format!("invalid log filter {directive:?}: {err}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| FilterError::internal(format!("failed to set tracing subscriber: {err}")))?;

    Ok(())
}
