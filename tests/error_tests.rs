//! Error handling tests.
//!
//! These tests verify error variants, their display text and classification,
//! and how errors propagate out of nested operations.

use catalog_canon::error::{CanonError, CanonResult};
use catalog_canon::pattern::{compile, contains_any_word, MatchSpec};
use std::error::Error as StdError;

#[test]
fn test_configuration_error_display() {
    let err = CanonError::configuration("[A.M, DO]", "duplicate key 'DO'");
    let display = err.to_string();
    assert!(display.contains("Configuration error"));
    assert!(display.contains("[A.M, DO]"));
    assert!(display.contains("duplicate key 'DO'"));
}

#[test]
fn test_invalid_input_error_display() {
    let err = CanonError::invalid_input("a, b", "similarity of two empty strings is undefined");
    assert_eq!(
        err.to_string(),
        "Invalid input for 'a, b': similarity of two empty strings is undefined"
    );
    assert!(!err.is_configuration());
}

#[test]
fn test_pipeline_error_chains_source() {
    let err = CanonError::Pipeline {
        rule: "#2 token-replace".to_string(),
        source: Box::new(CanonError::configuration("[A.M]", "no key")),
    };
    assert!(err.to_string().contains("#2 token-replace"));
    assert!(err.to_string().contains("no key"));

    let source = err.source().expect("pipeline errors carry a source");
    assert!(source.to_string().contains("[A.M]"));
    assert!(err.is_configuration());
}

#[test]
fn test_nested_invalid_input_is_not_configuration() {
    let err = CanonError::Pipeline {
        rule: "#0 custom".to_string(),
        source: Box::new(CanonError::invalid_input("s", "too long")),
    };
    assert!(!err.is_configuration());
}

#[test]
fn test_regex_error_converts_to_configuration() {
    let regex_err = fancy_regex::Regex::new("(unclosed").unwrap_err();
    let err: CanonError = regex_err.into();
    assert!(err.is_configuration());
}

#[test]
fn test_compile_error_names_pattern() {
    let err = compile(r"\b(FOO|[BAR)\b").unwrap_err();
    assert!(matches!(err, CanonError::Configuration { ref keys, .. } if keys.contains("[BAR")));
}

#[test]
fn test_bad_fragment_surfaces_from_predicate() {
    let spec = MatchSpec::regexes(["FOO", "(BAR"]);
    let result: CanonResult<bool> = contains_any_word("FOO", &spec);
    assert!(result.unwrap_err().is_configuration());
}

#[test]
fn test_no_match_is_not_an_error() {
    let spec = MatchSpec::literals(["NOTHING"]);
    assert!(!contains_any_word("FOO", &spec).unwrap());
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<CanonError>();
}

#[test]
fn test_error_into_anyhow() {
    fn fails() -> anyhow::Result<()> {
        Err(CanonError::invalid_input("a, b", "empty"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(err.downcast_ref::<CanonError>().is_some());
}
