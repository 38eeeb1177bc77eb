use crate::aggregate::{
    Fetched, ServiceCounts, ServiceOutcome, ServiceSummary, error_rate, summarize,
};
use crate::backend::BackendError;
use crate::query::TimeWindow;
use crate::registry::{ServiceEntry, ServiceRegistry, Stack};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn window() -> TimeWindow {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    TimeWindow::ending_at(now, 3, 168).unwrap()
}

fn registry() -> ServiceRegistry {
    ServiceRegistry::new(vec![
        Stack::new(
            "template",
            vec![
                ServiceEntry::new("api", "template-api"),
                ServiceEntry::new("redis", "template-redis"),
            ],
        ),
        Stack::new("tabular", vec![ServiceEntry::new("api", "tabular-api")]),
    ])
}

#[test]
fn error_rate_is_percentage_to_two_decimals() {
    assert_eq!(error_rate(100, 5), 5.0);
    assert_eq!(error_rate(3, 1), 33.33);
    assert_eq!(error_rate(3, 2), 66.67);
}

#[test]
fn error_rate_without_logs_is_zero() {
    assert_eq!(error_rate(0, 0), 0.0);
    assert_eq!(error_rate(0, 4), 0.0);
}

#[test]
fn summarize_totals_per_stack() {
    // Arrange
    let registry = registry();
    let counts = [(100, 5), (20, 0), (40, 10)];
    let results = registry.services().zip(counts).map(|(svc, (logs, errors))| {
        Fetched::new(
            svc,
            Ok(ServiceCounts {
                log_count: logs,
                error_count: errors,
            }),
        )
    });

    // Act
    let report = summarize(&window(), results);

    // Assert
    assert_eq!(report.period, "Last 3 hours");
    assert_eq!(report.stacks.keys().collect::<Vec<_>>(), ["template", "tabular"]);

    let template = report.stacks.get("template").unwrap();
    assert_eq!(template.total_logs, 120);
    assert_eq!(template.total_errors, 5);
    assert_eq!(
        template.services.get("api"),
        Some(&ServiceOutcome::Ok(ServiceSummary {
            container: "template-api".to_string(),
            log_count: 100,
            error_count: 5,
            error_rate: 5.0,
        }))
    );

    let tabular = report.stacks.get("tabular").unwrap();
    assert_eq!(tabular.total_logs, 40);
    assert_eq!(tabular.total_errors, 10);
}

#[test]
fn one_failed_service_does_not_hide_the_rest() {
    // Arrange
    let registry = registry();
    let results = registry.services().map(|svc| {
        let result = if svc.role == "redis" {
            Err(BackendError::Status {
                status: 502,
                detail: "bad gateway".to_string(),
            })
        } else {
            Ok(ServiceCounts {
                log_count: 10,
                error_count: 1,
            })
        };
        Fetched::new(svc, result)
    });

    // Act
    let report = summarize(&window(), results);

    // Assert
    let template = report.stacks.get("template").unwrap();
    assert!(template.services.get("redis").unwrap().is_failed());
    assert!(template.services.get("api").unwrap().ok().is_some());
    assert_eq!(template.total_logs, 10);
    assert_eq!(report.stacks.get("tabular").unwrap().total_logs, 10);
}

#[test]
fn failed_service_serializes_as_error_marker() {
    // Arrange
    let registry = registry();
    let results = registry
        .services()
        .filter(|svc| svc.stack == "tabular")
        .map(|svc| Fetched::new(svc, Err(BackendError::Unreachable("refused".to_string()))));

    // Act
    let report = summarize(&window(), results);
    let json = serde_json::to_value(&report).unwrap();

    // Assert
    assert_eq!(
        json["stacks"]["tabular"]["services"]["api"],
        serde_json::json!({
            "container": "tabular-api",
            "error": "log store unreachable: refused",
        })
    );
    assert_eq!(json["stacks"]["tabular"]["total_logs"], 0);
}
