use crate::conf::types::LogwayConfig;
use crate::conf::validation::{ValidatedConfig, validate_config};
use crate::conf::ConfigError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/logway.toml";

/// Environment variables that override file settings.
const ENV_LOKI_URL: &str = "LOKI_URL";
const ENV_GRAFANA_URL: &str = "GRAFANA_URL";
const ENV_LISTEN: &str = "LOGWAY_LISTEN";

/// Load, override from the process environment, and validate.
///
/// `None` reads [`DEFAULT_CONFIG_PATH`] if it exists and falls back to
/// defaults otherwise. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<ValidatedConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

pub fn load_config_with_env<F>(path: Option<&Path>, env: F) -> Result<ValidatedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => match read_config(Path::new(DEFAULT_CONFIG_PATH)) {
            Err(ConfigError::ReadFile { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = DEFAULT_CONFIG_PATH,
                    "no config file found; using defaults"
                );
                LogwayConfig::default()
            }
            other => other?,
        },
    };

    apply_env_overrides(&mut config, env);

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all issues)
    //--------------------------------------------------------------------------
    let report = validate_config(&config);
    if report.has_errors() {
        return Err(ConfigError::Validation { report });
    }

    let registry = config.registry();

    Ok(ValidatedConfig {
        config,
        registry,
        report,
    })
}

fn read_config(path: &Path) -> Result<LogwayConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
}

fn apply_env_overrides<F>(config: &mut LogwayConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env(ENV_LOKI_URL) {
        config.backend.loki_url = url;
    }
    if let Some(url) = env(ENV_GRAFANA_URL) {
        config.backend.grafana_url = url;
    }
    if let Some(listen) = env(ENV_LISTEN) {
        config.server.listen = listen;
    }
}
