use integration_tests::harness::{MockSettings, TestServer};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn metrics_reports_volume_over_the_last_hour() {
    // Arrange
    let server = TestServer::start(MockSettings {
        lines: 6,
        ..MockSettings::default()
    });

    // Act
    let res = server.get("/metrics").send().unwrap();

    // Assert
    assert_eq!(res.status(), 200);
    let body: Value = res.json().unwrap();
    assert_eq!(body["period"], "Last 1 hour");
    assert_eq!(body["total_logs"], 60);
    assert_eq!(body["logs_per_minute"], 1.0);
    assert_eq!(body["services"]["template"]["nginx"]["log_count"], 6);
    assert_eq!(server.loki.received().len(), 10);
}

#[test]
fn metrics_excludes_failed_services_from_totals() {
    let server = TestServer::start(MockSettings {
        lines: 6,
        failing: vec![("template-backend-api".to_string(), 502)],
        ..MockSettings::default()
    });

    let body: Value = server.get("/metrics").send().unwrap().json().unwrap();

    assert_eq!(body["total_logs"], 54);
    assert!(body["services"]["template"]["api"]["error"].is_string());
}
