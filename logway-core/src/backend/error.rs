use std::time::Duration;
use thiserror::Error;

/// Failure talking to the log store (or one of the probed dashboards).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("log store request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Loki query failed: {status} {detail}")]
    Status { status: u16, detail: String },

    #[error("log store unreachable: {0}")]
    Unreachable(String),

    #[error("invalid log store response: {0}")]
    Decode(String),
}

impl BackendError {
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            BackendError::Timeout(timeout)
        } else if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Unreachable(err.to_string())
        }
    }
}
