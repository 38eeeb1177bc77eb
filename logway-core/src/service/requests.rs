use crate::backend::RangeQuery;
use crate::query::TimeWindow;

pub const DEFAULT_LOGS_HOURS: i64 = 1;
pub const DEFAULT_LOGS_LIMIT: i64 = 100;
pub const DEFAULT_ERRORS_HOURS: i64 = 24;
pub const DEFAULT_ERRORS_LIMIT: i64 = 50;
pub const DEFAULT_SEARCH_HOURS: i64 = 1;
pub const DEFAULT_SEARCH_LIMIT: i64 = 100;
pub const DEFAULT_SUMMARY_HOURS: i64 = 1;
/// `/metrics` always covers the last hour.
pub const METRICS_HOURS: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogsRequest {
    pub stack: String,
    pub service: String,
    pub hours: i64,
    pub limit: i64,
    pub level: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorsRequest {
    pub stack: String,
    pub service: String,
    pub hours: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub stack: Option<String>,
    pub hours: i64,
    pub limit: i64,
}

/// A validated request, ready to send to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// Container the query is scoped to, when it targets a single service.
    pub container: Option<String>,
    pub window: TimeWindow,
    pub range: RangeQuery,
    /// Per-stream cap applied to the response.
    pub limit: usize,
}
