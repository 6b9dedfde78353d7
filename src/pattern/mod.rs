//! Match specifications and regex construction.
//!
//! Every dynamically built regex in the crate goes through this module:
//! caller-supplied values are wrapped in a [`MatchSpec`], which knows which
//! entries are literals (escaped on the way in) and which are regex
//! fragments (used verbatim). Compilation failures surface as
//! [`CanonError::Configuration`] naming the offending pattern.

pub mod predicate;

pub use predicate::{
    any_contains, contains_any, contains_any_word, ends_with_any, equals_any, equals_any_word,
    find_first_contained, starts_with_any,
};

use crate::error::{CanonError, CanonResult};
use fancy_regex::Regex;
use std::borrow::Cow;

/// Characters escaped in literal patterns.
///
/// These are the metacharacters that show up verbatim in catalog titles
/// (`C+C MUSIC FACTORY`, `(R&B)`, `WHY?`); other metacharacters are left to
/// the caller.
pub const REGEX_SPECIAL_CHARS: [char; 8] = ['(', ')', '[', ']', '{', '}', '+', '?'];

/// A single entry of a match specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Literal text; bracket and quantifier characters are escaped.
    Literal(String),

    /// Regex fragment used as-is.
    Regex(String),
}

impl Pattern {
    /// Returns the regex source for this entry.
    pub fn as_regex(&self) -> Cow<'_, str> {
        match self {
            Self::Literal(text) => escape_if_contains_regex(text),
            Self::Regex(fragment) => Cow::Borrowed(fragment.as_str()),
        }
    }

    /// Returns the text as the caller supplied it.
    pub fn source(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Regex(text) => text,
        }
    }
}

/// Ordered set of distinct patterns used to build alternation regexes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSpec {
    patterns: Vec<Pattern>,
}

impl MatchSpec {
    /// Creates a specification from patterns, dropping repeats but keeping
    /// first-seen order.
    pub fn new(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        patterns
            .into_iter()
            .fold(Self::default(), |spec, pattern| spec.with_pattern(pattern))
    }

    /// Creates a specification where every value is literal text.
    pub fn literals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(|v| Pattern::Literal(v.into())))
    }

    /// Creates a specification where every value is already a regex fragment.
    pub fn regexes<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(|v| Pattern::Regex(v.into())))
    }

    /// Appends a pattern unless an identical one is already present.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
        self
    }

    pub fn with_literal(self, text: impl Into<String>) -> Self {
        self.with_pattern(Pattern::Literal(text.into()))
    }

    pub fn with_regex(self, fragment: impl Into<String>) -> Self {
        self.with_pattern(Pattern::Regex(fragment.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Bare alternation `p1|p2|...` without grouping.
    pub fn alternation(&self) -> String {
        self.patterns
            .iter()
            .map(|p| p.as_regex().into_owned())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Word-bounded alternation: `\b(p1|p2|...)\b`.
    pub fn equals_any_regex(&self) -> String {
        format!(r"\b({})\b", self.alternation())
    }

    /// Containment regex: `^.*?\b(p1|p2|...)\b.*$`.
    pub fn contains_any_regex(&self) -> String {
        format!("^.*?{}.*$", self.equals_any_regex())
    }

    /// Compact description of the patterns, used in error messages.
    pub fn describe(&self) -> String {
        let sources: Vec<&str> = self.patterns.iter().map(Pattern::source).collect();
        format!("[{}]", sources.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for MatchSpec {
    /// Collects values as regex fragments, matching how pattern lists are
    /// written in rule vocabularies (`.*THEME.*`, `VOL\s*\d`).
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::regexes(iter)
    }
}

/// Compiles a regex, reporting failures as configuration errors.
pub fn compile(pattern: &str) -> CanonResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        CanonError::configuration(format!("pattern '{}'", pattern), e.to_string())
    })
}

/// Returns true if `pattern` matches the whole of `s`.
pub fn full_match(pattern: &str, s: &str) -> CanonResult<bool> {
    let anchored = format!("^(?:{})$", pattern);
    let re = compile(&anchored)?;
    re.is_match(s).map_err(|e| {
        CanonError::configuration(format!("pattern '{}'", pattern), e.to_string())
    })
}

/// Replaces every match of `pattern` in `s`; `$1` style group references in
/// `replacement` are expanded.
pub fn replace_all_regex(s: &str, pattern: &str, replacement: &str) -> CanonResult<String> {
    let re = compile(pattern)?;
    re.try_replacen(s, 0, replacement)
        .map(Cow::into_owned)
        .map_err(|e| CanonError::configuration(format!("pattern '{}'", pattern), e.to_string()))
}

/// Escapes all regex syntax in `s`; used for markers and separators, which
/// are always literal.
pub fn escape_literal(s: &str) -> Cow<'_, str> {
    fancy_regex::escape(s)
}

/// Escapes `s` if it is exactly one regex special character.
pub fn escape_if_regex(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if REGEX_SPECIAL_CHARS.contains(&c) => Cow::Owned(format!("\\{}", c)),
        _ => Cow::Borrowed(s),
    }
}

/// Escapes every regex special character contained in `s`.
pub fn escape_if_contains_regex(s: &str) -> Cow<'_, str> {
    if !s.contains(REGEX_SPECIAL_CHARS) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if REGEX_SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
