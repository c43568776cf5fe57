//! Test harness for vkprofiles.
//!
//! Provides a scripted driver that stands in for a physical device, so the
//! support and device-creation engines can be exercised without a GPU.

pub mod fake;

pub use fake::{FakeDevice, FakeDriver};

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static LOGGING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `debug` for the library.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,vkprofiles=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}
