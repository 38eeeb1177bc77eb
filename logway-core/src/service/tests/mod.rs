
use crate::backend::{
    BackendError, HealthProbe, Labels, LogStore, QueryRangeResponse, RangeQuery, Sample, Stream,
};
use crate::registry::ServiceRegistry;
use crate::service::{LogService, Probes, QuerySettings};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Store that answers from a closure and remembers every query it saw.
pub(crate) struct FakeStore {
    respond: Box<dyn Fn(&RangeQuery) -> Result<QueryRangeResponse, BackendError> + Send + Sync>,
    pub seen: Mutex<Vec<RangeQuery>>,
}

impl FakeStore {
    pub fn new<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&RangeQuery) -> Result<QueryRangeResponse, BackendError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            respond: Box::new(respond),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.query.clone())
            .collect()
    }
}

#[async_trait]
impl LogStore for FakeStore {
    async fn query_range(&self, query: &RangeQuery) -> Result<QueryRangeResponse, BackendError> {
        self.seen.lock().unwrap().push(query.clone());
        (self.respond)(query)
    }
}

pub(crate) struct FixedProbe(pub bool);

#[async_trait]
impl HealthProbe for FixedProbe {
    async fn is_healthy(&self) -> bool {
        self.0
    }
}

pub(crate) fn lines(container: &str, count: usize) -> Stream {
    let mut labels = Labels::new();
    labels.insert("container_name".to_string(), container.to_string());
    Stream {
        stream: labels,
        values: (0..count)
            .map(|i| Sample(format!("17000000000{i:08}"), format!("line {i}")))
            .collect(),
    }
}

pub(crate) fn service_with(store: Arc<FakeStore>, loki: bool, grafana: bool) -> LogService {
    LogService::new(
        Arc::new(ServiceRegistry::builtin()),
        store,
        Probes {
            loki: Arc::new(FixedProbe(loki)),
            grafana: Arc::new(FixedProbe(grafana)),
        },
        QuerySettings::default(),
    )
}
