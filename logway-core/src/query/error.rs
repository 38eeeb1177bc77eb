use thiserror::Error;

/// A request parameter that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("invalid {name}: {value} (must be between {min} and {max})")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("invalid {name}: {reason}")]
    Invalid { name: String, reason: String },

    #[error("missing required parameter '{name}'")]
    Missing { name: &'static str },
}
