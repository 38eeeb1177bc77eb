use crate::aggregate::{Fetched, OrderedMap, ServiceFailure, ServiceOutcome};
use crate::query::TimeWindow;
use serde::Serialize;

/// Log and error-pattern counts for one service over one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceCounts {
    pub log_count: u64,
    pub error_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSummary {
    pub container: String,
    pub log_count: u64,
    pub error_count: u64,
    pub error_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StackSummary {
    pub services: OrderedMap<ServiceOutcome<ServiceSummary>>,
    pub total_logs: u64,
    pub total_errors: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub period: String,
    pub start: String,
    pub end: String,
    pub stacks: OrderedMap<StackSummary>,
}

/// `errors / logs` as a percentage rounded to two decimals; `0` without logs.
pub fn error_rate(log_count: u64, error_count: u64) -> f64 {
    if log_count == 0 {
        return 0.0;
    }
    round2(error_count as f64 / log_count as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fold per-service counts into per-stack summaries.
///
/// Stacks and services appear in the order the results arrive. Failed
/// services keep their slot as an error marker and add nothing to the
/// stack totals.
pub fn summarize<'a, I>(window: &TimeWindow, results: I) -> SummaryReport
where
    I: IntoIterator<Item = Fetched<'a, ServiceCounts>>,
{
    let mut stacks: OrderedMap<StackSummary> = OrderedMap::new();

    for fetched in results {
        let service = fetched.service;
        let stack = stacks.entry_or_insert_with(service.stack, StackSummary::default);

        let outcome = match fetched.result {
            Ok(counts) => {
                stack.total_logs += counts.log_count;
                stack.total_errors += counts.error_count;
                ServiceOutcome::Ok(ServiceSummary {
                    container: service.container.to_string(),
                    log_count: counts.log_count,
                    error_count: counts.error_count,
                    error_rate: error_rate(counts.log_count, counts.error_count),
                })
            }
            Err(e) => ServiceOutcome::Failed(ServiceFailure {
                container: service.container.to_string(),
                error: e.to_string(),
            }),
        };

        stack.services.insert(service.role, outcome);
    }

    SummaryReport {
        period: window.period_label(),
        start: window.start_param(),
        end: window.end_param(),
        stacks,
    }
}
