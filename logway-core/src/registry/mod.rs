mod error;
mod registry;


pub use error::LookupError;
pub use registry::*;
