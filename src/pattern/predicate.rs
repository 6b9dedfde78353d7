//! Containment, equality and boundary predicates.
//!
//! Plain predicates compare raw text. The `*_word` predicates build a
//! word-bounded alternation from a [`MatchSpec`] and can therefore fail with
//! a configuration error when a fragment does not compile.

use super::{full_match, MatchSpec};
use crate::error::CanonResult;

/// Returns true if `s` contains any value as a raw substring.
pub fn contains_any<S: AsRef<str>>(s: &str, values: &[S]) -> bool {
    values.iter().any(|v| s.contains(v.as_ref()))
}

/// Returns true if `s` contains any pattern of `spec` as a whole word.
pub fn contains_any_word(s: &str, spec: &MatchSpec) -> CanonResult<bool> {
    if spec.is_empty() {
        return Ok(false);
    }
    full_match(&spec.contains_any_regex(), s)
}

/// Returns true if `s` equals any value exactly.
pub fn equals_any<S: AsRef<str>>(s: &str, values: &[S]) -> bool {
    values.iter().any(|v| s == v.as_ref())
}

/// Returns true if the whole of `s` matches one pattern of `spec`.
pub fn equals_any_word(s: &str, spec: &MatchSpec) -> CanonResult<bool> {
    if spec.is_empty() {
        return Ok(false);
    }
    full_match(&spec.equals_any_regex(), s)
}

/// Returns true if the leading token of `s` is one of `values`.
///
/// Only whole tokens count: `FOOL AND BOO` does not start with `FOO`.
pub fn starts_with_any<S: AsRef<str>>(s: &str, values: &[S]) -> bool {
    values.iter().any(|v| {
        let v = v.as_ref();
        !v.is_empty()
            && s.strip_prefix(v)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
    })
}

/// Returns true if the trailing token of `s` is one of `values`.
pub fn ends_with_any<S: AsRef<str>>(s: &str, values: &[S]) -> bool {
    values.iter().any(|v| {
        let v = v.as_ref();
        !v.is_empty()
            && s.strip_suffix(v)
                .is_some_and(|rest| rest.is_empty() || rest.ends_with(' '))
    })
}

/// Returns true if any string in `list` contains `s`.
pub fn any_contains<S: AsRef<str>>(list: &[S], s: &str) -> bool {
    list.iter().any(|item| item.as_ref().contains(s))
}

/// Returns the first value contained in `s`, in list order.
pub fn find_first_contained<'a, S: AsRef<str>>(s: &str, values: &'a [S]) -> Option<&'a str> {
    values.iter().map(AsRef::as_ref).find(|v| s.contains(v))
}
