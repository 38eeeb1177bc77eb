use crate::backend::BackendError;
use crate::service::RequestError;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// JSON error body: `{"detail": ..., "valid": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum ApiError {
    Request(RequestError),
    /// The query string did not deserialize (e.g. `hours=abc`).
    InvalidQuery(String),
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::Request(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::InvalidQuery(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    detail: detail.clone(),
                    valid: None,
                },
            ),
            ApiError::Request(RequestError::Lookup(e)) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    detail: e.to_string(),
                    valid: Some(e.valid_keys().to_vec()),
                },
            ),
            ApiError::Request(RequestError::Param(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    detail: e.to_string(),
                    valid: None,
                },
            ),
            ApiError::Request(RequestError::Backend(e)) => backend_status(e),
        }
    }
}

fn backend_status(err: &BackendError) -> (StatusCode, ErrorBody) {
    let (status, detail) = match err {
        BackendError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, err.to_string()),
        BackendError::Status { status, .. } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            err.to_string(),
        ),
        BackendError::Unreachable(_) | BackendError::Decode(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error querying log store".to_string(),
        ),
    };

    (status, ErrorBody {
        detail,
        valid: None,
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if let ApiError::Request(RequestError::Backend(e)) = &self {
            tracing::warn!(error = %e, status = status.as_u16(), "log store request failed");
        }

        (status, Json(body)).into_response()
    }
}
