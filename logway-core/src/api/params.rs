use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LogsParams {
    pub hours: Option<i64>,
    pub limit: Option<i64>,
    pub level: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorsParams {
    pub hours: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Required; absence is reported as a validation error, not a 400.
    pub query: Option<String>,
    pub stack: Option<String>,
    pub hours: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub hours: Option<i64>,
}
