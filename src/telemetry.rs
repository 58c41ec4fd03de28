use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing human-readable events to stderr.
///
/// Verbosity comes from `RUST_LOG`, falling back to `default_level`.
pub fn init_tracing(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
