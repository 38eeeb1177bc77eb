use async_trait::async_trait;
use http::StatusCode;
use std::time::Duration;

/// A liveness check against one external dependency.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn is_healthy(&self) -> bool;
}

/// Healthy when a GET to `url` answers `200 OK` within `timeout`.
pub struct HttpProbe {
    name: &'static str,
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(name: &'static str, client: reqwest::Client, url: String, timeout: Duration) -> Self {
        Self {
            name,
            client,
            url,
            timeout,
        }
    }

    /// `{loki_url}/ready`
    pub fn loki(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self::new("loki", client, join_url(base_url, "/ready"), timeout)
    }

    /// `{grafana_url}/api/health`
    pub fn grafana(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self::new("grafana", client, join_url(base_url, "/api/health"), timeout)
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn is_healthy(&self) -> bool {
        match self.client.get(&self.url).timeout(self.timeout).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => true,
            Ok(resp) => {
                tracing::warn!(probe = self.name, status = %resp.status(), "probe unhealthy");
                false
            }
            Err(e) => {
                tracing::warn!(probe = self.name, error = %e, "probe failed");
                false
            }
        }
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
