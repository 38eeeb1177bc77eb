use crate::backend::{Labels, QueryRangeResponse};
use chrono::{DateTime, SecondsFormat};
use serde::Serialize;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// One log line, flattened out of its stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub labels: Labels,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPage {
    pub entries: Vec<LogEntry>,
    /// Samples in the payload before any truncation.
    pub total_seen: usize,
}

/// Flatten every stream into one list, keeping payload order.
///
/// `limit` caps each stream on its own, so `n` streams can yield up to
/// `n * limit` entries.
pub fn normalize_entries(payload: &QueryRangeResponse, limit: usize) -> EntryPage {
    let streams = payload.streams();
    let mut page = EntryPage {
        entries: Vec::new(),
        total_seen: 0,
    };

    for stream in streams {
        page.total_seen += stream.values.len();
        page.entries
            .extend(stream.values.iter().take(limit).map(|sample| LogEntry {
                timestamp: normalize_timestamp(&sample.0),
                message: sample.1.clone(),
                labels: stream.stream.clone(),
            }));
    }

    page
}

/// Nanosecond epoch text to an RFC 3339 UTC timestamp.
///
/// Anything that does not convert is returned as-is.
pub fn normalize_timestamp(raw: &str) -> String {
    let Ok(nanos) = raw.trim().parse::<i64>() else {
        return raw.to_string();
    };

    let secs = nanos.div_euclid(NANOS_PER_SECOND);
    let sub = nanos.rem_euclid(NANOS_PER_SECOND) as u32;

    match DateTime::from_timestamp(secs, sub) {
        Some(ts) => ts.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        None => raw.to_string(),
    }
}

/// Total samples across all streams.
pub fn count_entries(payload: &QueryRangeResponse) -> u64 {
    payload
        .streams()
        .iter()
        .map(|s| s.values.len() as u64)
        .sum()
}
