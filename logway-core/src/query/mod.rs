mod builder;
pub mod constraints;
mod error;
mod window;

#[cfg(test)]
mod tests;

pub use builder::*;
pub use error::ParamError;
pub use window::*;
