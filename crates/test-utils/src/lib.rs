//! Shared helpers for `rmmkit` integration tests.

pub mod builders;
pub mod fake_backend;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use rmmkit::logging::{build_filter, LOG_ENV_VAR};
use tracing_subscriber::fmt;

/// Upper bound for a test that waits on a real interpreter.
pub const CHILD_TIMEOUT: Duration = Duration::from_secs(10);

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary.
///
/// Uses the same filter rules as the binary, so `RMMKIT_LOG=rmmkit::exec=debug`
/// works for tests too. Output goes through the test writer and is only shown
/// for failing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_value = std::env::var(LOG_ENV_VAR).ok();
        fmt()
            .with_env_filter(build_filter(None, env_value.as_deref()))
            .with_test_writer()
            .init();
    });
}

/// Await `f`, panicking if it takes longer than [`CHILD_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(CHILD_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test did not finish within {CHILD_TIMEOUT:?}"),
    }
}
