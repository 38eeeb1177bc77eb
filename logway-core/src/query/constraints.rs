use crate::query::ParamError;

#[derive(Debug, Clone)]
pub struct RangeConstraint<T> {
    pub min: T,
    pub max: T,
    pub label: &'static str,
    pub units: Option<&'static str>,
}

impl<T> RangeConstraint<T>
where
    T: PartialOrd + Copy + Into<i64>,
{
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Return the value unchanged when it is inside the range.
    pub fn check(&self, value: T) -> Result<T, ParamError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ParamError::OutOfRange {
                name: self.label,
                value: value.into(),
                min: self.min.into(),
                max: self.max.into(),
            })
        }
    }
}

//-----------------------------------------------------------------------------
// Request parameters
//-----------------------------------------------------------------------------

/// Upper bound on any time window, in hours (one week).
pub const MAX_HOURS: i64 = 168;

pub const HOURS: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: MAX_HOURS,
    label: "hours",
    units: Some("h"),
};

pub const LOGS_LIMIT: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: 5000,
    label: "limit",
    units: None,
};

pub const ERRORS_LIMIT: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: 1000,
    label: "limit",
    units: None,
};

pub const SEARCH_LIMIT: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: 1000,
    label: "limit",
    units: None,
};

//-----------------------------------------------------------------------------
// Configuration
//-----------------------------------------------------------------------------

pub const CONFIG_MAX_HOURS: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: MAX_HOURS,
    label: "query.max_hours",
    units: Some("h"),
};

pub const REQUEST_TIMEOUT_SECONDS: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: 600,
    label: "backend.request_timeout_seconds",
    units: Some("s"),
};

pub const PROBE_TIMEOUT_SECONDS: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: 60,
    label: "backend.probe_timeout_seconds",
    units: Some("s"),
};

pub const MAX_CONCURRENCY: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: 64,
    label: "query.max_concurrency",
    units: None,
};

pub const COUNT_LIMIT: RangeConstraint<i64> = RangeConstraint {
    min: 1,
    max: 100_000,
    label: "query.count_limit",
    units: None,
};
