//! Marker and bracket content removal.
//!
//! Titles carry decorations between markers: `(LIVE)`, `[REMASTERED]`,
//! `'REMIX'`. Each remover deletes a delimited span when its content passes
//! a test, and returns the input unchanged when nothing qualifies.

use crate::error::{CanonError, CanonResult};
use crate::pattern::{compile, contains_any_word, equals_any, escape_literal, MatchSpec};
use crate::replace::fix_multi_spaces;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Bracket families understood by the bracket rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` and `)`
    Round,
    /// `[` and `]`
    Square,
    /// `{` and `}`
    Curly,
}

impl Bracket {
    pub fn open(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }

    /// Resolves a pair of marker strings to a bracket family.
    pub fn from_markers(open: &str, close: &str) -> Option<Self> {
        [Self::Round, Self::Square, Self::Curly].into_iter().find(|b| {
            open.chars().eq(std::iter::once(b.open()))
                && close.chars().eq(std::iter::once(b.close()))
        })
    }

    /// Greedy pattern spanning from the first opening to the last closing
    /// bracket on a line.
    fn greedy_span(self) -> &'static Regex {
        static ROUND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*\)").expect("Valid regex"));
        static SQUARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*\]").expect("Valid regex"));
        static CURLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{.*\}").expect("Valid regex"));
        match self {
            Self::Round => &ROUND,
            Self::Square => &SQUARE,
            Self::Curly => &CURLY,
        }
    }
}

/// Removes every `from…to` span whose content equals one of `spec`'s
/// patterns. Empty spans (`()`) are removed as well.
///
/// # Examples
///
/// ```
/// use catalog_canon::markers::remove_content_between_markers_if_equals_any;
/// use catalog_canon::pattern::MatchSpec;
///
/// let spec = MatchSpec::literals(["LIVE", "MIX"]);
/// let out = remove_content_between_markers_if_equals_any("(MIX) FOO (LIVE)", "(", ")", &spec).unwrap();
/// assert_eq!(out, "FOO");
/// ```
pub fn remove_content_between_markers_if_equals_any(
    s: &str,
    from: &str,
    to: &str,
    spec: &MatchSpec,
) -> CanonResult<String> {
    let pattern = format!(
        "(?s){}(?:{})??{}",
        escape_literal(from),
        spec.alternation(),
        escape_literal(to)
    );
    let re = compile(&pattern)?;
    let removed = re
        .try_replacen(s, 0, "")
        .map_err(|e| CanonError::configuration(spec.describe(), e.to_string()))?;
    Ok(fix_multi_spaces(&removed))
}

/// Removes every `from…to` span whose content begins with one of `spec`'s
/// patterns; the rest of the content is not inspected.
pub fn remove_content_between_markers_if_content_starts_with_any(
    s: &str,
    from: &str,
    to: &str,
    spec: &MatchSpec,
) -> CanonResult<String> {
    if spec.is_empty() {
        return Ok(s.to_string());
    }
    let pattern = format!(
        "{}(?:{}).*?{}",
        escape_literal(from),
        spec.alternation(),
        escape_literal(to)
    );
    let re = compile(&pattern)?;
    let removed = re
        .try_replacen(s, 0, "")
        .map_err(|e| CanonError::configuration(spec.describe(), e.to_string()))?;
    Ok(fix_multi_spaces(&removed))
}

/// Removes the trailing span opened by the last `from` when its content
/// contains one of `words` as a whole word.
///
/// Two shapes qualify: a string ending with `to` (the span runs from the
/// last `from` to the end), and a string whose last `from` is never closed
/// (`YOU WEAR IT WELL (LIVE - LEICESTER`). A closed span that is not at the
/// end of the string is left alone.
pub fn remove_content_between_last_markers_if_contains_word(
    s: &str,
    from: &str,
    to: &str,
    words: &MatchSpec,
) -> CanonResult<String> {
    if from.is_empty() || to.is_empty() {
        return Ok(s.to_string());
    }

    if let Some(body) = s.strip_suffix(to) {
        if let Some(last) = body.rfind(from) {
            let content_start = last + from.len();
            let content_end = s[content_start..]
                .find(to)
                .map_or(body.len(), |i| content_start + i);
            if contains_any_word(s[content_start..content_end].trim(), words)? {
                return Ok(s[..last].trim().to_string());
            }
        }
    } else if let Some(last) = s.rfind(from) {
        let rest = &s[last + from.len()..];
        if !rest.contains(to) && contains_any_word(rest.trim(), words)? {
            return Ok(s[..last].trim().to_string());
        }
    }

    Ok(s.to_string())
}

/// Removes everything from the last `from` marker.
///
/// Without a closing marker the cut runs to the end of the string. With one,
/// the cut only happens when the string ends with it; a balanced span in the
/// middle of the string is never touched.
pub fn remove_content_between_markers(s: &str, from: &str, to: Option<&str>) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    match (s.rfind(from), to) {
        (None, _) => s.to_string(),
        (Some(_), Some(to)) if !s.ends_with(to) => s.to_string(),
        (Some(last), _) => s[..last].trim().to_string(),
    }
}

/// Removes the content after the first `marker` if it equals one of
/// `values`.
pub fn remove_content_after_marker_if_equals_any<S: AsRef<str>>(
    s: &str,
    marker: &str,
    values: &[S],
) -> String {
    match s.find(marker) {
        Some(index) if !marker.is_empty() => {
            let content = s[index + marker.len()..].trim();
            if equals_any(content, values) {
                s[..index].trim().to_string()
            } else {
                s.to_string()
            }
        }
        _ => s.to_string(),
    }
}

/// Removes the content after the first `marker` if it contains one of
/// `words` as a whole word.
pub fn remove_content_after_marker_if_contains_word(
    s: &str,
    marker: &str,
    words: &MatchSpec,
) -> CanonResult<String> {
    match s.find(marker) {
        Some(index) if !marker.is_empty() => {
            let content = s[index + marker.len()..].trim();
            if contains_any_word(content, words)? {
                Ok(s[..index].trim().to_string())
            } else {
                Ok(s.to_string())
            }
        }
        _ => Ok(s.to_string()),
    }
}

/// Removes bracketed content for each enabled bracket family.
///
/// The match is greedy: everything from the first opening bracket to the
/// last closing bracket of a family is removed in one cut. The span does not
/// cross line breaks, so multi-line input loses one span per line.
pub fn remove_bracketed_content(s: &str, round: bool, square: bool, curly: bool) -> String {
    let enabled = [(Bracket::Round, round), (Bracket::Square, square), (Bracket::Curly, curly)];
    let result = enabled
        .iter()
        .filter(|(_, on)| *on)
        .fold(s.trim().to_string(), |acc, (bracket, _)| {
            bracket.greedy_span().replace_all(&acc, " ").into_owned()
        });
    fix_multi_spaces(&result)
}

/// Strips every bracket character of one family when the opening and
/// closing counts differ. The content between them is kept.
pub fn remove_all_brackets_if_unmatched(s: &str, bracket: Bracket) -> String {
    let opened = s.chars().filter(|&c| c == bracket.open()).count();
    let closed = s.chars().filter(|&c| c == bracket.close()).count();
    if opened == closed {
        return s.to_string();
    }
    let stripped: String = s
        .chars()
        .filter(|&c| c != bracket.open() && c != bracket.close())
        .collect();
    fix_multi_spaces(&stripped)
}

/// Replaces all bracket characters with spaces.
pub fn remove_braces(s: &str) -> String {
    static BRACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\[\{\(\)\}\]]").expect("Valid regex"));
    fix_multi_spaces(&BRACES.replace_all(s, " "))
}

/// Replaces round brackets with `replacement`.
pub fn replace_parentheses(s: &str, replacement: &str) -> String {
    fix_multi_spaces(&s.replace('(', replacement).replace(')', replacement))
}

/// Removes surrounding quotes.
///
/// Single quotes are only removed around text without spaces, so names
/// like `WE'VE GOT A FUZZBOX AND WE'RE GONNA USE IT` survive. Double quotes
/// are removed around anything.
pub fn remove_surrounding_quotes(s: &str) -> String {
    static SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'(\S+)'").expect("Valid regex"));
    static DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""(.*)""#).expect("Valid regex"));

    let unquoted: Cow<'_, str> = SINGLE.replace_all(s, "$1");
    let unquoted = fix_multi_spaces(&unquoted);
    fix_multi_spaces(&DOUBLE.replace_all(&unquoted, "$1"))
}
