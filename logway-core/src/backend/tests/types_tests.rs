use crate::backend::{BackendError, Direction, QueryRangeResponse, Sample};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn parses_streams_and_samples() {
    // Arrange
    let body = r#"{
        "status": "success",
        "data": {
            "resultType": "streams",
            "result": [
                {
                    "stream": {"container_name": "svc", "stack": "template"},
                    "values": [["1700000000000000000", "hello"], ["1700000001000000000", "world"]]
                }
            ]
        }
    }"#;

    // Act
    let resp: QueryRangeResponse = serde_json::from_str(body).unwrap();

    // Assert
    let streams = resp.streams();
    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].stream["container_name"], "svc");
    assert_eq!(
        streams[0].values,
        vec![
            Sample("1700000000000000000".into(), "hello".into()),
            Sample("1700000001000000000".into(), "world".into()),
        ]
    );
}

#[test]
fn missing_data_or_result_is_empty() {
    for body in [r#"{}"#, r#"{"data": {}}"#, r#"{"data": null}"#, r#"{"data": {"result": null}}"#] {
        let resp: QueryRangeResponse = serde_json::from_str(body).unwrap();

        assert!(resp.streams().is_empty(), "body {body} should be empty");
    }
}

#[test]
fn sample_skips_structured_metadata() {
    let sample: Sample =
        serde_json::from_str(r#"["1700000000000000000", "line", {"trace_id": "abc"}]"#).unwrap();

    assert_eq!(sample, Sample("1700000000000000000".into(), "line".into()));
}

#[test]
fn sample_requires_timestamp_and_line() {
    let err = serde_json::from_str::<Sample>(r#"["1700000000000000000"]"#);

    assert!(err.is_err());
}

#[test]
fn direction_serializes_lowercase() {
    assert_eq!(Direction::default().as_str(), "backward");
    assert_eq!(
        serde_json::to_string(&Direction::Forward).unwrap(),
        r#""forward""#
    );
}

#[test]
fn timeout_message_names_duration() {
    let err = BackendError::Timeout(Duration::from_secs(30));

    assert_eq!(err.to_string(), "log store request timed out after 30s");
}
