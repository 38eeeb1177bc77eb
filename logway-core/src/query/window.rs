use crate::query::ParamError;
use crate::query::constraints::{HOURS, RangeConstraint};
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// A closed `[start, end]` interval ending at the moment it was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub hours: i64,
}

impl TimeWindow {
    /// The window covering the `hours` hours before `now`.
    ///
    /// `max_hours` is the configured ceiling and may only tighten the
    /// request range, never widen it.
    pub fn ending_at(now: DateTime<Utc>, hours: i64, max_hours: i64) -> Result<Self, ParamError> {
        let constraint = RangeConstraint {
            max: max_hours.min(HOURS.max),
            ..HOURS
        };
        let hours = constraint.check(hours)?;

        Ok(Self {
            start: now - Duration::hours(hours),
            end: now,
            hours,
        })
    }

    pub fn start_param(&self) -> String {
        format_instant(self.start)
    }

    pub fn end_param(&self) -> String {
        format_instant(self.end)
    }

    pub fn minutes(&self) -> i64 {
        self.hours * 60
    }

    pub fn period_label(&self) -> String {
        if self.hours == 1 {
            "Last 1 hour".to_string()
        } else {
            format!("Last {} hours", self.hours)
        }
    }
}

/// `(now - hours, now)` in UTC, with `hours` in `[1, 168]`.
pub fn compute_window(hours: i64) -> Result<TimeWindow, ParamError> {
    TimeWindow::ending_at(Utc::now(), hours, HOURS.max)
}

/// RFC 3339, microsecond precision, `Z` suffix. Both window bounds use it.
pub fn format_instant(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}
