use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber with a standard `fmt` layer.
///
/// Respects the `RUST_LOG` environment variable and falls back to `info`
/// when it is not set. Call this once, at the very start of `main`.
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Like [`init_tracing`], with a custom fallback filter such as
/// `"info,waypoint_core=debug"`.
pub fn init_tracing_with(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber installed earlier (e.g. by a test harness) wins.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
