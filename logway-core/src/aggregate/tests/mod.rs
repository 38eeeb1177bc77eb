mod entries_tests;
mod summary_tests;

use crate::backend::{Labels, QueryRangeResponse, Sample, Stream};

pub(crate) fn stream(container: &str, count: usize) -> Stream {
    let mut labels = Labels::new();
    labels.insert("container_name".to_string(), container.to_string());

    Stream {
        stream: labels,
        values: (0..count)
            .map(|i| {
                Sample(
                    (1_700_000_000_000_000_000i64 + i as i64 * 1_000_000_000).to_string(),
                    format!("{container} line {i}"),
                )
            })
            .collect(),
    }
}

pub(crate) fn payload(streams: Vec<Stream>) -> QueryRangeResponse {
    QueryRangeResponse::from_streams(streams)
}
