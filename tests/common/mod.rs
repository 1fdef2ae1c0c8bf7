#![allow(dead_code, unused_imports)]

pub use rmmkit_test_utils::builders;
pub use rmmkit_test_utils::fake_backend::FakeBackend;
pub use rmmkit_test_utils::{init_tracing, with_timeout};
