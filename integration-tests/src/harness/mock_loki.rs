use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the fake Loki/Grafana pair behaves.
#[derive(Debug, Clone)]
pub struct MockSettings {
    /// Samples returned per `query_range` call.
    pub lines: usize,
    /// Queries mentioning one of these containers get the paired status.
    pub failing: Vec<(String, u16)>,
    /// Queries mentioning one of these containers stall before answering.
    pub slow: Vec<String>,
    pub slow_delay: Duration,
    pub loki_ready: bool,
    pub grafana_healthy: bool,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            lines: 3,
            failing: Vec::new(),
            slow: Vec::new(),
            slow_delay: Duration::from_secs(3),
            loki_ready: true,
            grafana_healthy: true,
        }
    }
}

/// Recorder shared between the mock and the test.
#[derive(Clone, Default)]
pub struct MockLoki {
    pub queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

#[derive(Clone)]
struct MockState {
    settings: Arc<MockSettings>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockLoki {
    /// Loki and Grafana endpoints served by one router.
    pub fn router(&self, settings: MockSettings) -> Router {
        let state = MockState {
            settings: Arc::new(settings),
            queries: self.queries.clone(),
        };

        Router::new()
            .route("/loki/api/v1/query_range", get(query_range))
            .route("/ready", get(ready))
            .route("/api/health", get(grafana_health))
            .with_state(state)
    }

    /// Every `query` parameter received so far.
    pub fn logql(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .filter_map(|q| q.get("query").cloned())
            .collect()
    }

    pub fn received(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }
}

async fn query_range(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.queries.lock().unwrap().push(params.clone());

    let query = params.get("query").cloned().unwrap_or_default();
    let settings = &state.settings;

    if settings.slow.iter().any(|c| query.contains(c.as_str())) {
        tokio::time::sleep(settings.slow_delay).await;
    }

    if let Some((_, status)) = settings.failing.iter().find(|(c, _)| query.contains(c.as_str())) {
        let status = StatusCode::from_u16(*status).unwrap();
        return (status, "parse error : syntax error: unexpected IDENTIFIER").into_response();
    }

    let values: Vec<_> = (0..settings.lines)
        .map(|i| {
            json!([
                format!("{}", 1_700_000_000_000_000_000u64 + i as u64 * 1_000_000_000),
                format!("{{\"level\":\"info\",\"msg\":\"line {i}\"}}"),
            ])
        })
        .collect();

    Json(json!({
        "status": "success",
        "data": {
            "resultType": "streams",
            "result": [
                {
                    "stream": { "container_name": "mock", "stack": "template" },
                    "values": values,
                }
            ]
        }
    }))
    .into_response()
}

async fn ready(State(state): State<MockState>) -> StatusCode {
    if state.settings.loki_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn grafana_health(State(state): State<MockState>) -> StatusCode {
    if state.settings.grafana_healthy {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
