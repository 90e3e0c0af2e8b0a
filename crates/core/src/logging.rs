//! # Logging
//!
//! The session programs print their demonstration to stdout, so diagnostics
//! go through `tracing` to stderr and stay out of the way. Verbosity comes
//! from `RUST_LOG`, e.g. `RUST_LOG=fluent_core=debug`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::CoreError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber.
///
/// Safe to call more than once: only the first call installs anything,
/// later calls return `Ok(())`.
pub fn init() -> Result<(), CoreError> {
    init_with(DEFAULT_FILTER)
}

/// Install the global fmt subscriber with an explicit fallback filter.
pub fn init_with(default_filter: &str) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| CoreError::Logging {
            reason: e.to_string(),
        })?;

    // An already-installed global subscriber is not an error for us.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();

    Ok(())
}
