use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type Labels = BTreeMap<String, String>;

/// Body of a `query_range` response.
///
/// Only the parts that are read are modelled; a body without `data` or
/// without `data.result` means no stream matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryRangeResponse {
    #[serde(default)]
    pub data: Option<QueryData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryData {
    #[serde(default)]
    pub result: Option<Vec<Stream>>,
}

/// One label set and its ordered samples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stream {
    #[serde(default)]
    pub stream: Labels,
    #[serde(default)]
    pub values: Vec<Sample>,
}

/// `[timestamp_ns, line]`. Any trailing elements (structured metadata) are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample(pub String, pub String);

impl QueryRangeResponse {
    pub fn streams(&self) -> &[Stream] {
        self.data
            .as_ref()
            .and_then(|d| d.result.as_deref())
            .unwrap_or_default()
    }

    pub fn from_streams(streams: Vec<Stream>) -> Self {
        Self {
            data: Some(QueryData {
                result: Some(streams),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SampleVisitor;

        impl<'de> Visitor<'de> for SampleVisitor {
            type Value = Sample;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [timestamp, line] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Sample, A::Error> {
                let ts: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let line: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Sample(ts, line))
            }
        }

        deserializer.deserialize_seq(SampleVisitor)
    }
}
