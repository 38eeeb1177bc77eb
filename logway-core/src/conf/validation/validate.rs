use crate::conf::types::{BackendConfig, LogwayConfig, QueryConfig, StackConfig};
use crate::conf::validation::ValidationReport;
use crate::query::constraints::{
    CONFIG_MAX_HOURS, COUNT_LIMIT, MAX_CONCURRENCY, PROBE_TIMEOUT_SECONDS, RangeConstraint,
    REQUEST_TIMEOUT_SECONDS,
};
use std::collections::HashSet;
use std::net::SocketAddr;
use url::Url;

/// Validate everything in a parsed config, collecting every issue.
pub fn validate_config(cfg: &LogwayConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if cfg.server.listen.parse::<SocketAddr>().is_err() {
        report.invalid_listen_addr(&cfg.server.listen);
    }

    validate_backend(&cfg.backend, &mut report);
    validate_query(&cfg.query, &mut report);
    validate_stacks(&cfg.stacks, &mut report);

    report
}

fn validate_backend(backend: &BackendConfig, report: &mut ValidationReport) {
    validate_url("backend.loki_url", &backend.loki_url, report);
    validate_url("backend.grafana_url", &backend.grafana_url, report);

    validate_range(
        i64::from(backend.request_timeout_seconds),
        &REQUEST_TIMEOUT_SECONDS,
        report,
    );
    validate_range(
        i64::from(backend.probe_timeout_seconds),
        &PROBE_TIMEOUT_SECONDS,
        report,
    );
}

fn validate_query(query: &QueryConfig, report: &mut ValidationReport) {
    validate_range(i64::from(query.max_hours), &CONFIG_MAX_HOURS, report);
    validate_range(i64::from(query.max_concurrency), &MAX_CONCURRENCY, report);
    validate_range(i64::from(query.count_limit), &COUNT_LIMIT, report);
}

fn validate_url(field: &'static str, value: &str, report: &mut ValidationReport) {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => report.invalid_backend_url(
            field,
            value,
            &format!("unsupported scheme '{}'", url.scheme()),
        ),
        Err(e) => report.invalid_backend_url(field, value, &e.to_string()),
    }
}

fn validate_range(value: i64, constraint: &RangeConstraint<i64>, report: &mut ValidationReport) {
    if !constraint.contains(value) {
        let units = constraint.units.unwrap_or("");
        report.error(
            format!(
                "invalid {}: {}{} (must be between {}{} and {}{})",
                constraint.label, value, units, constraint.min, units, constraint.max, units
            ),
            constraint.label,
            None,
        );
    }
}

/// An empty list is allowed and selects the built-in registry.
fn validate_stacks(stacks: &[StackConfig], report: &mut ValidationReport) {
    let mut seen_stacks = HashSet::new();

    for (i, stack) in stacks.iter().enumerate() {
        let field = format!("stacks[{i}]");

        if stack.name.trim().is_empty() {
            report.blank_name("stack name", format!("{field}.name"));
        } else if !seen_stacks.insert(stack.name.as_str()) {
            report.duplicate_stack(&stack.name, format!("{field}.name"));
        }

        if stack.services.is_empty() {
            report.empty_stack(&stack.name, format!("{field}.services"));
        }

        let mut seen_roles = HashSet::new();
        for (j, svc) in stack.services.iter().enumerate() {
            let svc_field = format!("{field}.services[{j}]");

            if svc.role.trim().is_empty() {
                report.blank_name("service role", format!("{svc_field}.role"));
            } else if !seen_roles.insert(svc.role.as_str()) {
                report.duplicate_role(&stack.name, &svc.role, format!("{svc_field}.role"));
            }

            if svc.container.trim().is_empty() {
                report.blank_name("container", format!("{svc_field}.container"));
            }
        }
    }

    let Some(reference) = stacks.first() else {
        return;
    };
    let reference_roles: HashSet<&str> = reference.services.iter().map(|s| s.role.as_str()).collect();

    for (i, stack) in stacks.iter().enumerate().skip(1) {
        let roles: HashSet<&str> = stack.services.iter().map(|s| s.role.as_str()).collect();
        if roles != reference_roles {
            report.role_set_mismatch(&stack.name, &reference.name, format!("stacks[{i}].services"));
        }
    }
}
