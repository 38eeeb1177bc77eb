mod error;
mod loader;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, load_config_with_env};
pub use types::LogwayConfig;
pub use validation::{ValidatedConfig, ValidationReport};
