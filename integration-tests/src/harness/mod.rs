pub mod mock_loki;
pub mod server;
pub mod tracing;

pub use mock_loki::{MockLoki, MockSettings};
pub use server::TestServer;
pub use self::tracing::{CapturedEvent, init_test_tracing};
