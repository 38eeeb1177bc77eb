use crate::query::FilterEscaping;
use crate::query::constraints::MAX_HOURS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Widest window a request may ask for. Never above one week.
    pub max_hours: u32,

    pub filter_escaping: FilterEscaping,

    /// Services fetched at once for `/summary` and `/metrics`. A summary
    /// fetch makes two backend calls, so up to twice this many may be in flight.
    pub max_concurrency: u32,

    /// `limit` sent with count queries. Counts saturate at this value.
    pub count_limit: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_hours: MAX_HOURS as u32,
            filter_escaping: FilterEscaping::Raw,
            max_concurrency: 8,
            count_limit: 5000,
        }
    }
}
