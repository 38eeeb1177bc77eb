use crate::aggregate::{LogEntry, OrderedMap};
use crate::registry::ServiceRegistry;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceLogs {
    pub stack: String,
    pub service: String,
    pub container: String,
    pub logql: String,
    pub start: String,
    pub end: String,
    pub count: usize,
    pub total_seen: usize,
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceErrors {
    pub stack: String,
    pub service: String,
    pub container: String,
    pub logql: String,
    pub start: String,
    pub end: String,
    pub error_count: usize,
    pub errors: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub stack_filter: Option<String>,
    pub logql: String,
    pub start: String,
    pub end: String,
    pub match_count: usize,
    pub matches: Vec<LogEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl From<bool> for HealthStatus {
    fn from(healthy: bool) -> Self {
        if healthy {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub loki: HealthStatus,
    pub grafana: HealthStatus,
}

impl HealthReport {
    pub fn new(loki: bool, grafana: bool) -> Self {
        Self {
            status: (loki && grafana).into(),
            loki: loki.into(),
            grafana: grafana.into(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Catalog<'a> {
    pub message: &'static str,
    pub services: &'a ServiceRegistry,
    pub endpoints: OrderedMap<&'static str>,
}

impl<'a> Catalog<'a> {
    pub fn new(registry: &'a ServiceRegistry) -> Self {
        let mut endpoints = OrderedMap::new();
        endpoints.insert("logs", "/logs/{stack}/{service}");
        endpoints.insert("errors", "/errors/{stack}/{service}");
        endpoints.insert("search", "/search");
        endpoints.insert("summary", "/summary");
        endpoints.insert("metrics", "/metrics");
        endpoints.insert("health", "/health");

        Self {
            message: "Centralized Log API",
            services: registry,
            endpoints,
        }
    }
}
