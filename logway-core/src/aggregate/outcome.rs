use crate::backend::BackendError;
use crate::registry::ServiceRef;
use serde::Serialize;

/// Per-service slot in a multi-service report: either the value or an
/// inline error marker. A failed slot never hides the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceOutcome<T> {
    Ok(T),
    Failed(ServiceFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceFailure {
    pub container: String,
    pub error: String,
}

impl<T> ServiceOutcome<T> {
    pub fn ok(&self) -> Option<&T> {
        match self {
            ServiceOutcome::Ok(v) => Some(v),
            ServiceOutcome::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ServiceOutcome::Failed(_))
    }
}

/// The raw result of fetching something for one registered service.
#[derive(Debug, Clone)]
pub struct Fetched<'a, T> {
    pub service: ServiceRef<'a>,
    pub result: Result<T, BackendError>,
}

impl<'a, T> Fetched<'a, T> {
    pub fn new(service: ServiceRef<'a>, result: Result<T, BackendError>) -> Self {
        Self { service, result }
    }
}
