use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    /// Dotted path of the offending setting, e.g. `backend.loki_url`.
    pub field: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub(crate) fn error(&mut self, message: String, field: impl Into<String>, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            field: field.into(),
            help,
        });
    }

    pub(crate) fn warning(
        &mut self,
        message: String,
        field: impl Into<String>,
        help: Option<String>,
    ) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            field: field.into(),
            help,
        });
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let json = ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };
        serde_json::to_string_pretty(&json)
    }

    pub fn render_plain(&self) {
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            println!("{}: {}: {}", issue.field, severity, issue.message);

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        if self.has_violations() {
            println!(
                "configuration validation found {} errors, {} warnings\n",
                self.errors.len(),
                self.warnings.len()
            );
        }

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            match issue.severity {
                Severity::Error => {
                    println!("  {} {}: {}", "error".red().bold(), issue.field, issue.message);
                }
                Severity::Warning => {
                    println!(
                        "  {} {}: {}",
                        "warning".yellow().bold(),
                        issue.field,
                        issue.message
                    );
                }
            }

            if let Some(help) = &issue.help {
                println!("    {}", help.dimmed());
            }
        }
    }
}

/// Server / backend validation
impl ValidationReport {
    pub fn invalid_listen_addr(&mut self, addr: &str) {
        self.error(
            format!("invalid listen address: {}", addr),
            "server.listen",
            Some("Use host:port, e.g. \"0.0.0.0:8000\".".to_string()),
        );
    }

    pub fn invalid_backend_url(&mut self, field: &'static str, url: &str, reason: &str) {
        self.error(
            format!("invalid URL '{}': {}", url, reason),
            field,
            Some("Use an absolute http:// or https:// URL.".to_string()),
        );
    }
}

/// Registry validation
impl ValidationReport {
    pub fn empty_stack(&mut self, stack: &str, field: String) {
        self.error(format!("stack '{}' has no services", stack), field, None);
    }

    pub fn duplicate_stack(&mut self, stack: &str, field: String) {
        self.error(format!("duplicate stack: {}", stack), field, None);
    }

    pub fn duplicate_role(&mut self, stack: &str, role: &str, field: String) {
        self.error(
            format!("duplicate service role '{}' in stack '{}'", role, stack),
            field,
            None,
        );
    }

    pub fn blank_name(&mut self, what: &str, field: String) {
        self.error(format!("{} must not be empty", what), field, None);
    }

    pub fn role_set_mismatch(&mut self, stack: &str, reference: &str, field: String) {
        self.warning(
            format!(
                "stack '{}' does not declare the same service roles as '{}'",
                stack, reference
            ),
            field,
            Some("Summaries compare stacks role by role; keep the role sets aligned.".to_string()),
        );
    }
}
