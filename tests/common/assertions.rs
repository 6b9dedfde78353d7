//! Custom assertions for canonicalization testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use catalog_canon::{CanonError, CanonResult, Pipeline};

/// Asserts that the pipeline turns `input` into `expected`.
///
/// # Panics
/// Panics if the pipeline fails or produces a different string.
pub fn assert_canonical(pipeline: &Pipeline, input: &str, expected: &str) {
    let report = pipeline
        .run(input)
        .unwrap_or_else(|e| panic!("Pipeline failed on '{}': {}", input, e));
    assert_eq!(
        report.output, expected,
        "Canonical form of '{}' is wrong; rules that changed it: {:?}",
        input, report.stages_changed
    );
}

/// Asserts that applying `f` to its own output changes nothing.
///
/// # Panics
/// Panics if the second application differs from the first.
pub fn assert_idempotent<F>(f: F, input: &str)
where
    F: Fn(&str) -> String,
{
    let once = f(input);
    let twice = f(&once);
    assert_eq!(
        once, twice,
        "Not idempotent for '{}': first pass '{}', second pass '{}'",
        input, once, twice
    );
}

/// Asserts that a result failed with a configuration error, directly or
/// wrapped by a pipeline stage.
///
/// # Panics
/// Panics if the result is `Ok` or a different error class.
pub fn assert_configuration_error<T: std::fmt::Debug>(result: CanonResult<T>) -> CanonError {
    match result {
        Err(err) if err.is_configuration() => err,
        Err(err) => panic!("Expected a configuration error, got: {}", err),
        Ok(value) => panic!("Expected a configuration error, got Ok({:?})", value),
    }
}

/// Asserts that `needle` occurs in `haystack` as a contiguous substring.
///
/// # Panics
/// Panics if it does not.
pub fn assert_substring_of(needle: &str, haystack: &str) {
    assert!(
        haystack.contains(needle),
        "'{}' should be a substring of '{}'",
        needle,
        haystack
    );
}
