//! Tracing subscriber registration for development and embedding hosts.

use cinemuse_error::{CinemuseResult, TelemetryError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with a human-readable fmt layer.
///
/// The subscriber respects the `RUST_LOG` environment variable. Generation
/// itself never logs above debug level, so a host that skips this call
/// simply sees no output.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_telemetry() -> CinemuseResult<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::new(e.to_string()))?;

    Ok(())
}
