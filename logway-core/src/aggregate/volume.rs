use crate::aggregate::summary::round2;
use crate::aggregate::{Fetched, OrderedMap, ServiceFailure, ServiceOutcome};
use crate::query::TimeWindow;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceVolume {
    pub container: String,
    pub log_count: u64,
}

/// Log volume across every service over one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeReport {
    pub period: String,
    pub start: String,
    pub end: String,
    pub total_logs: u64,
    pub logs_per_minute: f64,
    pub services: OrderedMap<OrderedMap<ServiceOutcome<ServiceVolume>>>,
}

/// `total / minutes`, rounded to two decimals.
pub fn logs_per_minute(total_logs: u64, minutes: i64) -> f64 {
    if minutes <= 0 {
        return 0.0;
    }
    round2(total_logs as f64 / minutes as f64)
}

pub fn fold_volume<'a, I>(window: &TimeWindow, results: I) -> VolumeReport
where
    I: IntoIterator<Item = Fetched<'a, u64>>,
{
    let mut services: OrderedMap<OrderedMap<ServiceOutcome<ServiceVolume>>> = OrderedMap::new();
    let mut total_logs = 0;

    for fetched in results {
        let service = fetched.service;
        let outcome = match fetched.result {
            Ok(log_count) => {
                total_logs += log_count;
                ServiceOutcome::Ok(ServiceVolume {
                    container: service.container.to_string(),
                    log_count,
                })
            }
            Err(e) => ServiceOutcome::Failed(ServiceFailure {
                container: service.container.to_string(),
                error: e.to_string(),
            }),
        };

        services
            .entry_or_insert_with(service.stack, OrderedMap::new)
            .insert(service.role, outcome);
    }

    VolumeReport {
        period: window.period_label(),
        start: window.start_param(),
        end: window.end_param(),
        total_logs,
        logs_per_minute: logs_per_minute(total_logs, window.minutes()),
        services,
    }
}
