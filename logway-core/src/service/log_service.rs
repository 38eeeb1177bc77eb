use crate::aggregate::{
    Fetched, ServiceCounts, SummaryReport, VolumeReport, count_entries, fold_volume,
    normalize_entries, summarize,
};
use crate::backend::{BackendError, Direction, HealthProbe, LogStore, RangeQuery};
use crate::conf::LogwayConfig;
use crate::query::constraints::{ERRORS_LIMIT, LOGS_LIMIT, RangeConstraint, SEARCH_LIMIT};
use crate::query::{ParamError, QueryBuilder, SearchScope, TimeWindow};
use crate::registry::{ServiceRef, ServiceRegistry};
use crate::service::{
    Catalog, ErrorsRequest, HealthReport, LogsRequest, METRICS_HOURS, QueryPlan, RequestError,
    SearchRequest, SearchResults, ServiceErrors, ServiceLogs,
};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Query policy shared by every request.
#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub builder: QueryBuilder,
    pub direction: Direction,
    pub max_hours: i64,
    /// Services fetched concurrently by the multi-service reports.
    pub max_concurrency: usize,
    pub count_limit: u32,
}

impl QuerySettings {
    pub fn from_config(cfg: &LogwayConfig) -> Self {
        Self {
            builder: QueryBuilder::new(cfg.query.filter_escaping),
            direction: cfg.backend.direction,
            max_hours: i64::from(cfg.query.max_hours),
            max_concurrency: cfg.query.max_concurrency.max(1) as usize,
            count_limit: cfg.query.count_limit,
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self::from_config(&LogwayConfig::default())
    }
}

#[derive(Clone)]
pub struct Probes {
    pub loki: Arc<dyn HealthProbe>,
    pub grafana: Arc<dyn HealthProbe>,
}

/// Answers every endpoint: resolves the service, builds the query, calls
/// the store and folds the result.
#[derive(Clone)]
pub struct LogService {
    registry: Arc<ServiceRegistry>,
    store: Arc<dyn LogStore>,
    probes: Probes,
    settings: QuerySettings,
}

impl LogService {
    pub fn new(
        registry: Arc<ServiceRegistry>,
        store: Arc<dyn LogStore>,
        probes: Probes,
        settings: QuerySettings,
    ) -> Self {
        Self {
            registry,
            store,
            probes,
            settings,
        }
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.registry)
    }

    //-------------------------------------------------------------------------
    // Planning (no I/O)
    //-------------------------------------------------------------------------

    pub fn plan_logs(&self, req: &LogsRequest, now: DateTime<Utc>) -> Result<QueryPlan, RequestError> {
        let container = self.registry.resolve(&req.stack, &req.service)?;
        let query = self.settings.builder.log_query(
            container,
            req.level.as_deref(),
            req.search.as_deref(),
        );
        self.plan(Some(container), query, now, req.hours, req.limit, &LOGS_LIMIT)
    }

    pub fn plan_errors(
        &self,
        req: &ErrorsRequest,
        now: DateTime<Utc>,
    ) -> Result<QueryPlan, RequestError> {
        let container = self.registry.resolve(&req.stack, &req.service)?;
        let query = self.settings.builder.error_query(container);
        self.plan(Some(container), query, now, req.hours, req.limit, &ERRORS_LIMIT)
    }

    pub fn plan_search(
        &self,
        req: &SearchRequest,
        now: DateTime<Utc>,
    ) -> Result<QueryPlan, RequestError> {
        if req.query.is_empty() {
            return Err(ParamError::Invalid {
                name: "query".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        // An empty `stack` means every stack, like an absent one.
        let scope = match req.stack.as_deref().filter(|s| !s.is_empty()) {
            Some(stack) => SearchScope::Stack(&self.registry.stack(stack)?.name),
            None => SearchScope::AnyOf(self.registry.stack_names()),
        };
        let query = self.settings.builder.search_query(&scope, &req.query);
        self.plan(None, query, now, req.hours, req.limit, &SEARCH_LIMIT)
    }

    fn plan(
        &self,
        container: Option<&str>,
        query: String,
        now: DateTime<Utc>,
        hours: i64,
        limit: i64,
        limit_range: &RangeConstraint<i64>,
    ) -> Result<QueryPlan, RequestError> {
        let window = self.window_at(now, hours)?;
        let limit = limit_range.check(limit)?;

        Ok(QueryPlan {
            container: container.map(String::from),
            range: self.range(query, &window, limit as u32),
            window,
            limit: limit as usize,
        })
    }

    fn window_at(&self, now: DateTime<Utc>, hours: i64) -> Result<TimeWindow, ParamError> {
        TimeWindow::ending_at(now, hours, self.settings.max_hours)
    }

    fn range(&self, query: String, window: &TimeWindow, limit: u32) -> RangeQuery {
        RangeQuery {
            query,
            start: window.start_param(),
            end: window.end_param(),
            limit,
            direction: self.settings.direction,
        }
    }

    //-------------------------------------------------------------------------
    // Single-query endpoints
    //-------------------------------------------------------------------------

    pub async fn logs(&self, req: LogsRequest) -> Result<ServiceLogs, RequestError> {
        let plan = self.plan_logs(&req, Utc::now())?;
        let payload = self.store.query_range(&plan.range).await?;
        let page = normalize_entries(&payload, plan.limit);

        Ok(ServiceLogs {
            stack: req.stack,
            service: req.service,
            container: plan.container.unwrap_or_default(),
            logql: plan.range.query,
            start: plan.range.start,
            end: plan.range.end,
            count: page.entries.len(),
            total_seen: page.total_seen,
            logs: page.entries,
        })
    }

    pub async fn errors(&self, req: ErrorsRequest) -> Result<ServiceErrors, RequestError> {
        let plan = self.plan_errors(&req, Utc::now())?;
        let payload = self.store.query_range(&plan.range).await?;
        let page = normalize_entries(&payload, plan.limit);

        Ok(ServiceErrors {
            stack: req.stack,
            service: req.service,
            container: plan.container.unwrap_or_default(),
            logql: plan.range.query,
            start: plan.range.start,
            end: plan.range.end,
            error_count: page.entries.len(),
            errors: page.entries,
        })
    }

    pub async fn search(&self, req: SearchRequest) -> Result<SearchResults, RequestError> {
        let plan = self.plan_search(&req, Utc::now())?;
        let payload = self.store.query_range(&plan.range).await?;
        let page = normalize_entries(&payload, plan.limit);

        Ok(SearchResults {
            query: req.query,
            stack_filter: req.stack.filter(|s| !s.is_empty()),
            logql: plan.range.query,
            start: plan.range.start,
            end: plan.range.end,
            match_count: page.entries.len(),
            matches: page.entries,
        })
    }

    //-------------------------------------------------------------------------
    // Multi-service endpoints
    //-------------------------------------------------------------------------

    /// Log and error counts for every registered service.
    pub async fn summary(&self, hours: i64) -> Result<SummaryReport, RequestError> {
        let window = self.window_at(Utc::now(), hours)?;

        let tasks: Vec<_> = self
            .registry
            .services()
            .map(|svc| self.fetch_counts(svc, &window))
            .collect();
        let results: Vec<_> = stream::iter(tasks)
            .buffered(self.settings.max_concurrency)
            .collect()
            .await;

        Ok(summarize(&window, results))
    }

    /// Log volume over the last hour for every registered service.
    pub async fn metrics(&self) -> Result<VolumeReport, RequestError> {
        let window = self.window_at(Utc::now(), METRICS_HOURS)?;

        let tasks: Vec<_> = self
            .registry
            .services()
            .map(|svc| self.fetch_volume(svc, &window))
            .collect();
        let results: Vec<_> = stream::iter(tasks)
            .buffered(self.settings.max_concurrency)
            .collect()
            .await;

        Ok(fold_volume(&window, results))
    }

    pub async fn health(&self) -> HealthReport {
        let (loki, grafana) = tokio::join!(
            self.probes.loki.is_healthy(),
            self.probes.grafana.is_healthy()
        );
        HealthReport::new(loki, grafana)
    }

    async fn fetch_counts<'a>(
        &'a self,
        svc: ServiceRef<'a>,
        window: &'a TimeWindow,
    ) -> Fetched<'a, ServiceCounts> {
        let limit = self.settings.count_limit;
        let logs = self.range(self.settings.builder.log_query(svc.container, None, None), window, limit);
        let errors = self.range(self.settings.builder.error_query(svc.container), window, limit);

        let (logs, errors) = tokio::join!(
            self.store.query_range(&logs),
            self.store.query_range(&errors)
        );

        let result = match (logs, errors) {
            (Ok(logs), Ok(errors)) => Ok(ServiceCounts {
                log_count: count_entries(&logs),
                error_count: count_entries(&errors),
            }),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };

        log_failure(&svc, &result);
        Fetched::new(svc, result)
    }

    async fn fetch_volume<'a>(
        &'a self,
        svc: ServiceRef<'a>,
        window: &'a TimeWindow,
    ) -> Fetched<'a, u64> {
        let query = self.range(
            self.settings.builder.log_query(svc.container, None, None),
            window,
            self.settings.count_limit,
        );

        let result = self
            .store
            .query_range(&query)
            .await
            .map(|payload| count_entries(&payload));

        log_failure(&svc, &result);
        Fetched::new(svc, result)
    }
}

fn log_failure<T>(svc: &ServiceRef<'_>, result: &Result<T, BackendError>) {
    if let Err(e) = result {
        tracing::warn!(
            stack = svc.stack,
            service = svc.role,
            container = svc.container,
            error = %e,
            "count query failed"
        );
    }
}
