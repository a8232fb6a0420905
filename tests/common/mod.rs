use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per test binary.
/// Set `RUST_LOG=rowgeom=debug` to see engine events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
