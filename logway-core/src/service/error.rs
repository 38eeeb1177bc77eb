use crate::backend::BackendError;
use crate::query::ParamError;
use crate::registry::LookupError;
use thiserror::Error;

/// Why a single request could not be answered.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
