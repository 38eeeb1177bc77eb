mod error;
mod log_service;
mod requests;
mod responses;

#[cfg(test)]
pub(crate) mod tests;

pub use error::RequestError;
pub use log_service::*;
pub use requests::*;
pub use responses::*;
