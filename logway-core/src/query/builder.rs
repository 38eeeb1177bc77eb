use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Line tokens that classify a log line as an error. Matched case-insensitively.
///
/// Changing this list changes what `/errors`, `/summary` and the error rates
/// report.
pub const ERROR_TOKENS: &[&str] = &[
    "error",
    "exception",
    "failed",
    "critical",
    "fatal",
    "traceback",
    "stacktrace",
];

/// Label that carries the container identifier on every stream.
pub const CONTAINER_LABEL: &str = "container_name";

/// Label that carries the stack name on every stream.
pub const STACK_LABEL: &str = "stack";

/// How caller supplied text is placed inside LogQL string literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterEscaping {
    /// Interpolate verbatim. A `"` in the text ends the literal early.
    #[default]
    Raw,
    /// Backslash-escape `\` and `"` so the text always stays inside the
    /// literal. Regex metacharacters keep their meaning.
    Quoted,
}

/// Which streams a cross-service search covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope<'a> {
    Stack(&'a str),
    AnyOf(Vec<&'a str>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder {
    escaping: FilterEscaping,
}

impl QueryBuilder {
    pub fn new(escaping: FilterEscaping) -> Self {
        Self { escaping }
    }

    /// `{container_name="c"}` plus optional level and free-text filters.
    pub fn log_query(&self, container: &str, level: Option<&str>, search: Option<&str>) -> String {
        let mut query = container_selector(container);

        if let Some(level) = non_empty(level) {
            query.push_str(&format!(r#" | json | level="{}""#, self.embed(level)));
        }

        if let Some(search) = non_empty(search) {
            query.push(' ');
            query.push_str(&self.line_filter(search));
        }

        query
    }

    pub fn error_query(&self, container: &str) -> String {
        format!(
            r#"{} |~ "(?i)({})""#,
            container_selector(container),
            ERROR_TOKENS.join("|")
        )
    }

    pub fn search_query(&self, scope: &SearchScope<'_>, term: &str) -> String {
        let selector = match scope {
            SearchScope::Stack(stack) => format!(r#"{{{STACK_LABEL}="{stack}"}}"#),
            SearchScope::AnyOf(stacks) => {
                format!(r#"{{{STACK_LABEL}=~"{}"}}"#, stacks.join("|"))
            }
        };

        format!("{selector} {}", self.line_filter(term))
    }

    fn line_filter(&self, term: &str) -> String {
        format!(r#"|~ "(?i){}""#, self.embed(term))
    }

    fn embed<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.escaping {
            FilterEscaping::Raw => Cow::Borrowed(text),
            FilterEscaping::Quoted => escape_literal(text),
        }
    }
}

fn container_selector(container: &str) -> String {
    format!(r#"{{{CONTAINER_LABEL}="{container}"}}"#)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn escape_literal(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '"']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}
