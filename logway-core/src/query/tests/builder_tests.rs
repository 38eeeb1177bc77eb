use crate::query::{ERROR_TOKENS, FilterEscaping, QueryBuilder, SearchScope};
use pretty_assertions::assert_eq;

#[test]
fn log_query_scopes_by_container() {
    let builder = QueryBuilder::default();

    let query = builder.log_query("template-backend-api", None, None);

    assert_eq!(query, r#"{container_name="template-backend-api"}"#);
}

#[test]
fn log_query_appends_level_then_search() {
    // Arrange
    let builder = QueryBuilder::default();

    // Act
    let query = builder.log_query("svc", Some("warning"), Some("timeout"));

    // Assert
    assert_eq!(
        query,
        r#"{container_name="svc"} | json | level="warning" |~ "(?i)timeout""#
    );
}

#[test]
fn log_query_ignores_empty_filters() {
    let builder = QueryBuilder::default();

    let query = builder.log_query("svc", Some(""), Some(""));

    assert_eq!(query, r#"{container_name="svc"}"#);
}

#[test]
fn error_query_contains_token_alternation_and_selector() {
    // Arrange
    let builder = QueryBuilder::default();

    // Act
    let query = builder.error_query("tabular-review-redis");

    // Assert
    assert_eq!(
        query,
        r#"{container_name="tabular-review-redis"} |~ "(?i)(error|exception|failed|critical|fatal|traceback|stacktrace)""#
    );
}

#[test]
fn error_tokens_are_fixed() {
    assert_eq!(
        ERROR_TOKENS,
        [
            "error",
            "exception",
            "failed",
            "critical",
            "fatal",
            "traceback",
            "stacktrace"
        ]
    );
}

#[test]
fn search_query_without_stack_spans_every_stack() {
    // Arrange
    let builder = QueryBuilder::default();
    let scope = SearchScope::AnyOf(vec!["template", "tabular"]);

    // Act
    let query = builder.search_query(&scope, "user_id=42");

    // Assert
    assert_eq!(query, r#"{stack=~"template|tabular"} |~ "(?i)user_id=42""#);
}

#[test]
fn search_query_with_stack_uses_equality() {
    let builder = QueryBuilder::default();

    let query = builder.search_query(&SearchScope::Stack("template"), "boom");

    assert_eq!(query, r#"{stack="template"} |~ "(?i)boom""#);
}

#[test]
fn raw_escaping_interpolates_text_verbatim() {
    // Arrange
    let builder = QueryBuilder::new(FilterEscaping::Raw);

    // Act
    let query = builder.log_query("svc", None, Some(r#"a" or "b"#));

    // Assert
    assert_eq!(query, r#"{container_name="svc"} |~ "(?i)a" or "b""#);
}

#[test]
fn quoted_escaping_keeps_text_inside_literal() {
    // Arrange
    let builder = QueryBuilder::new(FilterEscaping::Quoted);

    // Act
    let search = builder.log_query("svc", Some(r#"in"fo"#), Some(r#"path\to "x""#));

    // Assert
    assert_eq!(
        search,
        r#"{container_name="svc"} | json | level="in\"fo" |~ "(?i)path\\to \"x\"""#
    );
}

#[test]
fn quoted_escaping_leaves_regex_metacharacters() {
    let builder = QueryBuilder::new(FilterEscaping::Quoted);

    let query = builder.search_query(&SearchScope::Stack("template"), "(foo|bar).*");

    assert_eq!(query, r#"{stack="template"} |~ "(?i)(foo|bar).*""#);
}
