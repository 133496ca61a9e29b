//! Shared fixtures for the coincrypt integration tests

pub mod vectors;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Install a test-friendly subscriber once; `RUST_LOG` overrides the
/// default `warn` level.
pub fn setup_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Decode a hex fixture into a fixed-size array
pub fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    let bytes = hex::decode(s).expect("fixture must be valid hex");
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    out
}
