use crate::backend::{BackendError, QueryRangeResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result ordering requested from the log store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Newest first.
    #[default]
    Backward,
    Forward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Backward => "backward",
            Direction::Forward => "forward",
        }
    }
}

/// One `query_range` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    pub query: String,
    pub start: String,
    pub end: String,
    pub limit: u32,
    pub direction: Direction,
}

/// A time-indexed log store that answers LogQL range queries.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn query_range(&self, query: &RangeQuery) -> Result<QueryRangeResponse, BackendError>;
}
