// Common test utilities for integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test log subscriber once per process. Level comes from
/// RUST_LOG, defaulting to warn.
pub fn init_logs() {
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
