use thiserror::Error;

/// A stack or service role that is not part of the registry.
///
/// Both variants carry the keys that *are* valid at the failing level so
/// callers can show them back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Stack '{stack}' not found")]
    UnknownStack { stack: String, valid: Vec<String> },

    #[error("Service '{service}' not found in stack '{stack}'")]
    UnknownService {
        stack: String,
        service: String,
        valid: Vec<String>,
    },
}

impl LookupError {
    pub fn valid_keys(&self) -> &[String] {
        match self {
            LookupError::UnknownStack { valid, .. } => valid,
            LookupError::UnknownService { valid, .. } => valid,
        }
    }
}
