use crate::aggregate::{SummaryReport, VolumeReport};
use crate::api::{
    ApiError, AppState, ErrorsParams, LogsParams, SearchParams, SummaryParams,
};
use crate::query::ParamError;
use crate::service::{
    DEFAULT_ERRORS_HOURS, DEFAULT_ERRORS_LIMIT, DEFAULT_LOGS_HOURS, DEFAULT_LOGS_LIMIT,
    DEFAULT_SEARCH_HOURS, DEFAULT_SEARCH_LIMIT, DEFAULT_SUMMARY_HOURS, ErrorsRequest, LogsRequest,
    RequestError, SearchRequest, SearchResults, ServiceErrors, ServiceLogs,
};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use http::StatusCode;

type QueryParams<T> = Result<Query<T>, QueryRejection>;

pub(crate) async fn root(State(state): State<AppState>) -> Response {
    Json(state.service.catalog()).into_response()
}

pub(crate) async fn health(State(state): State<AppState>) -> Response {
    let report = state.service.health().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report)).into_response()
}

pub(crate) async fn logs(
    State(state): State<AppState>,
    Path((stack, service)): Path<(String, String)>,
    params: QueryParams<LogsParams>,
) -> Result<Json<ServiceLogs>, ApiError> {
    let Query(params) = params?;

    let req = LogsRequest {
        stack,
        service,
        hours: params.hours.unwrap_or(DEFAULT_LOGS_HOURS),
        limit: params.limit.unwrap_or(DEFAULT_LOGS_LIMIT),
        level: params.level,
        search: params.search,
    };

    Ok(Json(state.service.logs(req).await?))
}

pub(crate) async fn errors(
    State(state): State<AppState>,
    Path((stack, service)): Path<(String, String)>,
    params: QueryParams<ErrorsParams>,
) -> Result<Json<ServiceErrors>, ApiError> {
    let Query(params) = params?;

    let req = ErrorsRequest {
        stack,
        service,
        hours: params.hours.unwrap_or(DEFAULT_ERRORS_HOURS),
        limit: params.limit.unwrap_or(DEFAULT_ERRORS_LIMIT),
    };

    Ok(Json(state.service.errors(req).await?))
}

pub(crate) async fn search(
    State(state): State<AppState>,
    params: QueryParams<SearchParams>,
) -> Result<Json<SearchResults>, ApiError> {
    let Query(params) = params?;

    let query = params
        .query
        .ok_or(RequestError::Param(ParamError::Missing { name: "query" }))?;

    let req = SearchRequest {
        query,
        stack: params.stack,
        hours: params.hours.unwrap_or(DEFAULT_SEARCH_HOURS),
        limit: params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
    };

    Ok(Json(state.service.search(req).await?))
}

pub(crate) async fn summary(
    State(state): State<AppState>,
    params: QueryParams<SummaryParams>,
) -> Result<Json<SummaryReport>, ApiError> {
    let Query(params) = params?;
    let hours = params.hours.unwrap_or(DEFAULT_SUMMARY_HOURS);

    Ok(Json(state.service.summary(hours).await?))
}

pub(crate) async fn metrics(State(state): State<AppState>) -> Result<Json<VolumeReport>, ApiError> {
    Ok(Json(state.service.metrics().await?))
}
