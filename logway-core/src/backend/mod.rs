mod error;
mod loki;
mod probe;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use error::BackendError;
pub use loki::LokiClient;
pub use probe::{HealthProbe, HttpProbe};
pub use store::*;
pub use types::*;
