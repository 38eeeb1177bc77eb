use super::{payload, stream};
use crate::aggregate::{count_entries, normalize_entries, normalize_timestamp};
use crate::backend::QueryRangeResponse;
use pretty_assertions::assert_eq;

#[test]
fn empty_payload_yields_no_entries() {
    // Arrange
    let missing = QueryRangeResponse::default();
    let empty = payload(vec![]);

    // Act
    let from_missing = normalize_entries(&missing, 100);
    let from_empty = normalize_entries(&empty, 100);

    // Assert
    assert!(from_missing.entries.is_empty());
    assert_eq!(from_missing.total_seen, 0);
    assert!(from_empty.entries.is_empty());
    assert_eq!(count_entries(&missing), 0);
}

#[test]
fn limit_applies_to_each_stream() {
    // Arrange
    let payload = payload(vec![stream("a", 10), stream("b", 5)]);

    // Act
    let page = normalize_entries(&payload, 3);

    // Assert
    assert_eq!(page.entries.len(), 6);
    assert_eq!(page.total_seen, 15);
}

#[test]
fn entries_keep_stream_then_sample_order() {
    // Arrange
    let payload = payload(vec![stream("a", 2), stream("b", 2)]);

    // Act
    let page = normalize_entries(&payload, 10);

    // Assert
    let messages: Vec<_> = page.entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["a line 0", "a line 1", "b line 0", "b line 1"]);
    assert_eq!(page.entries[2].labels["container_name"], "b");
}

#[test]
fn entries_carry_normalized_timestamps() {
    let page = normalize_entries(&payload(vec![stream("a", 2)]), 10);

    assert_eq!(page.entries[0].timestamp, "2023-11-14T22:13:20Z");
    assert_eq!(page.entries[1].timestamp, "2023-11-14T22:13:21Z");
}

#[test]
fn timestamp_converts_nanosecond_epoch() {
    assert_eq!(normalize_timestamp("1700000000000000000"), "2023-11-14T22:13:20Z");
}

#[test]
fn timestamp_keeps_sub_second_precision() {
    assert_eq!(
        normalize_timestamp("1700000000123456789"),
        "2023-11-14T22:13:20.123456789Z"
    );
}

#[test]
fn timestamp_passes_through_unparseable_text() {
    assert_eq!(normalize_timestamp("not-a-number"), "not-a-number");
    assert_eq!(normalize_timestamp(""), "");
    // Does not fit in i64.
    assert_eq!(
        normalize_timestamp("99999999999999999999999"),
        "99999999999999999999999"
    );
}

#[test]
fn count_sums_all_streams() {
    let payload = payload(vec![stream("a", 7), stream("b", 0), stream("c", 4)]);

    assert_eq!(count_entries(&payload), 11);
}
