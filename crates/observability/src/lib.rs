//! Tracing and logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// Fails only on a malformed `LOG_FORMAT`. Once configured, repeated calls
/// are no-ops.
pub fn init() -> Result<(), TracingConfigError> {
    tracing::init(&tracing::TracingConfig::from_env()?);
    Ok(())
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig, TracingConfigError};
