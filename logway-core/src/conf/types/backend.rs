use crate::backend::Direction;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the Loki HTTP API.
    pub loki_url: String,

    /// Base URL of Grafana. Only used for `/health`.
    pub grafana_url: String,

    /// Ceiling for a single `query_range` call.
    pub request_timeout_seconds: u32,

    /// Ceiling for a single liveness probe.
    pub probe_timeout_seconds: u32,

    pub direction: Direction,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            loki_url: "http://loki:3100".to_string(),
            grafana_url: "http://grafana:3000".to_string(),
            request_timeout_seconds: 30,
            probe_timeout_seconds: 5,
            direction: Direction::Backward,
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_seconds))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.probe_timeout_seconds))
    }
}
