use crate::backend::probe::join_url;
use crate::backend::{BackendError, LogStore, QueryRangeResponse, RangeQuery};
use async_trait::async_trait;
use std::time::Duration;

const QUERY_RANGE_PATH: &str = "/loki/api/v1/query_range";

/// `LogStore` backed by the Loki HTTP API.
pub struct LokiClient {
    client: reqwest::Client,
    query_url: String,
    timeout: Duration,
}

impl LokiClient {
    pub fn new(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            query_url: join_url(base_url, QUERY_RANGE_PATH),
            timeout,
        }
    }
}

#[async_trait]
impl LogStore for LokiClient {
    async fn query_range(&self, query: &RangeQuery) -> Result<QueryRangeResponse, BackendError> {
        let limit = query.limit.to_string();
        let params = [
            ("query", query.query.as_str()),
            ("start", query.start.as_str()),
            ("end", query.end.as_str()),
            ("limit", limit.as_str()),
            ("direction", query.direction.as_str()),
        ];

        tracing::debug!(query = %query.query, limit = query.limit, "loki query_range");

        let resp = self
            .client
            .get(&self.query_url)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(e, self.timeout))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail: detail.trim().to_string(),
            });
        }

        resp.json::<QueryRangeResponse>()
            .await
            .map_err(|e| BackendError::from_reqwest(e, self.timeout))
    }
}
