//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber for engine hosts.
///
/// Filtering follows the `RUST_LOG` environment variable, defaulting to
/// `info` when unset. Calling this twice panics; hosts embedding the engine
/// in a larger binary should install their own subscriber instead.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
