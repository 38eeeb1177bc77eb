use integration_tests::harness::{MockSettings, TestServer};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn errors_uses_token_alternation_and_defaults() {
    // Arrange
    let server = TestServer::start(MockSettings::default());

    // Act
    let res = server.get("/errors/tabular/api").send().unwrap();

    // Assert
    assert_eq!(res.status(), 200);
    let body: Value = res.json().unwrap();
    assert_eq!(body["container"], "tabular-bakcend-backend");
    assert_eq!(body["error_count"], 3);

    let received = server.loki.received();
    assert_eq!(received[0]["limit"], "50");
    let logql = &received[0]["query"];
    assert!(logql.starts_with(r#"{container_name="tabular-bakcend-backend"} |~ "(?i)("#));
    assert!(logql.contains("traceback"));
}

#[test]
fn errors_limit_above_range_is_rejected() {
    let server = TestServer::start(MockSettings::default());

    let res = server.get("/errors/tabular/api?limit=1001").send().unwrap();

    assert_eq!(res.status(), 422);
    assert!(server.loki.received().is_empty());
}
