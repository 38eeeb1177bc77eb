use integration_tests::harness::{MockSettings, TestServer};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn logs_returns_normalized_entries_from_loki() {
    // Arrange
    let server = TestServer::start(MockSettings::default());

    // Act
    let res = server
        .get("/logs/template/api?hours=2&limit=2&level=error&search=timeout")
        .send()
        .expect("request failed");

    // Assert
    assert_eq!(res.status(), 200);
    let body: Value = res.json().unwrap();
    assert_eq!(body["container"], "template-backend-api");
    assert_eq!(
        body["logql"],
        r#"{container_name="template-backend-api"} | json | level="error" |~ "(?i)timeout""#
    );
    assert_eq!(body["count"], 2);
    assert_eq!(body["total_seen"], 3);
    assert_eq!(body["logs"][0]["timestamp"], "2023-11-14T22:13:20Z");
    assert_eq!(body["logs"][1]["timestamp"], "2023-11-14T22:13:21Z");
    assert_eq!(body["logs"][0]["labels"]["stack"], "template");
}

#[test]
fn logs_forwards_window_and_limit_to_loki() {
    let server = TestServer::start(MockSettings::default());

    let res = server.get("/logs/tabular/redis?limit=7").send().unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().unwrap();

    let received = server.loki.received();
    assert_eq!(received.len(), 1);
    let params = &received[0];
    assert_eq!(params["limit"], "7");
    assert_eq!(params["direction"], "backward");
    assert_eq!(params["start"], body["start"].as_str().unwrap());
    assert_eq!(params["end"], body["end"].as_str().unwrap());
    assert!(params["end"].ends_with('Z'));
}

#[test]
fn unknown_service_lists_valid_roles() {
    let server = TestServer::start(MockSettings::default());

    let res = server.get("/logs/template/postgres").send().unwrap();

    assert_eq!(res.status(), 404);
    let body: Value = res.json().unwrap();
    assert_eq!(
        body["valid"],
        serde_json::json!(["api", "celery-worker", "celery-beat", "nginx", "redis"])
    );
    assert!(server.loki.received().is_empty());
}

#[test]
fn loki_rejection_is_forwarded() {
    let server = TestServer::start(MockSettings {
        failing: vec![("template-backend-api".to_string(), 400)],
        ..MockSettings::default()
    });

    let res = server.get("/logs/template/api").send().unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Loki query failed: 400"), "{detail}");
    assert!(detail.contains("syntax error"), "{detail}");
}

#[test]
fn slow_loki_times_out() {
    let server = TestServer::start(MockSettings {
        slow: vec!["template-backend-api".to_string()],
        ..MockSettings::default()
    });

    let res = server.get("/logs/template/api").send().unwrap();

    assert_eq!(res.status(), 504);
}

#[test]
fn quoted_escaping_is_applied_end_to_end() {
    let server = TestServer::start_with(MockSettings::default(), |cfg| {
        cfg.query.filter_escaping = logway_core::query::FilterEscaping::Quoted;
    });

    let res = server
        .get("/logs/template/api?search=say%20%22hi%22")
        .send()
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        server.loki.logql(),
        vec![r#"{container_name="template-backend-api"} |~ "(?i)say \"hi\"""#.to_string()]
    );
}
