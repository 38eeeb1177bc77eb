use crate::backend::Direction;
use crate::conf::{ConfigError, load_config_with_env};
use crate::query::FilterEscaping;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn parses_full_config() {
    // Arrange
    let file = write_config(
        r#"
[server]
listen = "127.0.0.1:9000"

[backend]
loki_url = "http://localhost:3100"
grafana_url = "http://localhost:3000"
request_timeout_seconds = 10
probe_timeout_seconds = 2
direction = "forward"

[query]
max_hours = 24
filter_escaping = "quoted"
max_concurrency = 4
count_limit = 1000

[[stacks]]
name = "alpha"
services = [
  { role = "api", container = "alpha-api" },
  { role = "worker", container = "alpha-worker" },
]
"#,
    );

    // Act
    let validated = load_config_with_env(Some(file.path()), no_env).expect("valid config");

    // Assert
    let cfg = &validated.config;
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
    assert_eq!(cfg.backend.direction, Direction::Forward);
    assert_eq!(cfg.backend.request_timeout().as_secs(), 10);
    assert_eq!(cfg.query.filter_escaping, FilterEscaping::Quoted);
    assert_eq!(cfg.query.max_hours, 24);
    assert_eq!(validated.registry.stack_names(), ["alpha"]);
    assert_eq!(validated.registry.resolve("alpha", "worker"), Ok("alpha-worker"));
    assert!(!validated.report.has_violations());
}

#[test]
fn empty_file_uses_defaults_and_builtin_registry() {
    // Arrange
    let file = write_config("");

    // Act
    let validated = load_config_with_env(Some(file.path()), no_env).expect("valid config");

    // Assert
    assert_eq!(validated.config.server.listen, "0.0.0.0:8000");
    assert_eq!(validated.config.backend.loki_url, "http://loki:3100");
    assert_eq!(validated.config.query.max_hours, 168);
    assert_eq!(validated.registry.stack_names(), ["template", "tabular"]);
}

#[test]
fn environment_overrides_file() {
    // Arrange
    let file = write_config(
        r#"
[backend]
loki_url = "http://from-file:3100"
"#,
    );
    let env = |key: &str| match key {
        "LOKI_URL" => Some("http://from-env:3100".to_string()),
        "LOGWAY_LISTEN" => Some("127.0.0.1:7000".to_string()),
        _ => None,
    };

    // Act
    let validated = load_config_with_env(Some(file.path()), env).expect("valid config");

    // Assert
    assert_eq!(validated.config.backend.loki_url, "http://from-env:3100");
    assert_eq!(validated.config.backend.grafana_url, "http://grafana:3000");
    assert_eq!(validated.config.server.listen, "127.0.0.1:7000");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = load_config_with_env(
        Some(std::path::Path::new("/definitely/not/here/logway.toml")),
        no_env,
    );

    assert!(matches!(err, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn unknown_key_is_a_parse_error() {
    let file = write_config(
        r#"
[server]
listen = "0.0.0.0:8000"
threads = 4
"#,
    );

    let err = load_config_with_env(Some(file.path()), no_env);

    assert!(matches!(err, Err(ConfigError::Parse { .. })));
}

#[test]
fn invalid_values_fail_validation() {
    // Arrange
    let file = write_config(
        r#"
[query]
max_hours = 500
"#,
    );

    // Act
    let err = load_config_with_env(Some(file.path()), no_env);

    // Assert
    let Err(ConfigError::Validation { report }) = err else {
        panic!("expected validation error");
    };
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].message.contains("invalid query.max_hours: 500h"));
}
