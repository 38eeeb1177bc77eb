mod setup;
mod shutdown;

pub use setup::{build_service, run, serve};
