//! Canonicalization rules and the transform abstraction.
//!
//! A [`Rule`] is one stateless `string → string` step carrying its own
//! immutable parameters. The set of rules is closed; pipelines are ordered
//! lists of them.

use crate::error::{CanonError, CanonResult};
use crate::markers::{
    remove_all_brackets_if_unmatched, remove_bracketed_content,
    remove_content_between_last_markers_if_contains_word, remove_content_between_markers,
    remove_content_between_markers_if_content_starts_with_any,
    remove_content_between_markers_if_equals_any, remove_surrounding_quotes, Bracket,
};
use crate::pattern::{compile, MatchSpec};
use crate::replace::{
    fix_multi_chars, fix_multi_spaces, remove_accents_and_convert_to_upper,
    remove_char_attached_to_word, remove_chars, remove_from_start_or_end_if_match, remove_if_ends_with, remove_sequential_dupes, replace_all,
    token_replace,
};

/// Something that rewrites a string.
///
/// Implementations must be pure: the output depends only on the input and
/// the implementation's own parameters.
pub trait Transform: Send + Sync {
    /// Rewrites `s`. "No match" returns `s` unchanged, never an error.
    fn apply(&self, s: &str) -> CanonResult<String>;

    /// Returns a short, stable name used in logs and errors.
    fn name(&self) -> &str;
}

/// Test applied to the content between two markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTest {
    /// Content equals one of the patterns; every occurrence is removed.
    EqualsAny(MatchSpec),

    /// Content starts with one of the patterns; every occurrence is removed.
    StartsWithAny(MatchSpec),

    /// The span opened by the last marker contains one of the words.
    ContainsWordLast(MatchSpec),

    /// Always remove from the last opening marker.
    Unconditional,
}

impl ContentTest {
    fn remove(&self, s: &str, open: &str, close: Option<&str>) -> CanonResult<String> {
        match (self, close) {
            (Self::Unconditional, close) => Ok(remove_content_between_markers(s, open, close)),
            (_, None) => Err(missing_close_marker(open)),
            (Self::EqualsAny(spec), Some(close)) => {
                remove_content_between_markers_if_equals_any(s, open, close, spec)
            }
            (Self::StartsWithAny(spec), Some(close)) => {
                remove_content_between_markers_if_content_starts_with_any(s, open, close, spec)
            }
            (Self::ContainsWordLast(spec), Some(close)) => {
                remove_content_between_last_markers_if_contains_word(s, open, close, spec)
            }
        }
    }

    fn validate(&self) -> CanonResult<()> {
        match self {
            Self::EqualsAny(spec) | Self::StartsWithAny(spec) => {
                compile(&format!("(?:{})", spec.alternation())).map(drop)
            }
            Self::ContainsWordLast(spec) if !spec.is_empty() => {
                compile(&spec.contains_any_regex()).map(drop)
            }
            Self::ContainsWordLast(_) | Self::Unconditional => Ok(()),
        }
    }
}

fn missing_close_marker(open: &str) -> CanonError {
    CanonError::configuration(
        format!("marker '{}'", open),
        "a closing marker is required unless removal is unconditional",
    )
}

/// A single canonicalization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Deletes every match of the regex, then collapses spaces.
    CharFilter(String),

    /// Deletes the literal where it is glued to either end of a word.
    AttachedCharStrip(String),

    /// Deletes delimited spans whose content passes `test`.
    ///
    /// `close` may only be omitted with [`ContentTest::Unconditional`],
    /// which then cuts from the last `open` to the end.
    MarkerRemoval {
        open: String,
        close: Option<String>,
        test: ContentTest,
    },

    /// Greedy removal of bracketed content per enabled family.
    BracketStrip { round: bool, square: bool, curly: bool },

    /// Strips one bracket family's characters when they are unbalanced.
    UnmatchedBracketGuard(Bracket),

    /// Single-scan whole-word replacement from a fixed mapping.
    TokenReplace(Vec<(String, String)>),

    /// Sequential regex replacement; later pairs see earlier output.
    ReplaceAll(Vec<(String, String)>),

    /// Collapses immediately repeated words.
    DuplicateCollapse,

    /// Removes a listed leading token, then a listed trailing token.
    BoundaryTrim(Vec<String>),

    /// Collapses runs of a repeated character class.
    FixMultiChars(String),

    /// Collapses space runs and trims.
    FixMultiSpaces,

    /// Strips diacritics and upper-cases.
    AccentFold,

    /// Removes surrounding single and double quotes.
    SurroundingQuotes,

    /// Removes a trailing regex match (`\s'\d\d` for `FOO '98`).
    TrailingPattern(String),
}

impl Rule {
    /// Marker removal between `open` and `close`.
    pub fn markers(open: impl Into<String>, close: impl Into<String>, test: ContentTest) -> Self {
        Self::MarkerRemoval {
            open: open.into(),
            close: Some(close.into()),
            test,
        }
    }

    /// Marker removal between a bracket pair.
    pub fn brackets(bracket: Bracket, test: ContentTest) -> Self {
        Self::markers(bracket.open().to_string(), bracket.close().to_string(), test)
    }

    /// Unconditional cut from the last `open` to the end of the string.
    pub fn cut_from_last(open: impl Into<String>) -> Self {
        Self::MarkerRemoval {
            open: open.into(),
            close: None,
            test: ContentTest::Unconditional,
        }
    }

    /// Token replacement from `(key, value)` pairs.
    pub fn token_replace<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::TokenReplace(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Sequential replacement from ordered `(pattern, replacement)` pairs.
    pub fn replace_all<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::ReplaceAll(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Boundary trim over the given tokens.
    pub fn boundary_trim<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BoundaryTrim(tokens.into_iter().map(Into::into).collect())
    }

    /// Checks that every pattern the rule carries compiles and that its
    /// parameters are consistent, without needing an input string.
    pub fn validate(&self) -> CanonResult<()> {
        match self {
            Self::CharFilter(pattern) => compile(pattern).map(drop),
            Self::AttachedCharStrip(ch) if ch.is_empty() => Err(CanonError::configuration(
                "attached-char-strip",
                "the character to strip must not be empty",
            )),
            Self::MarkerRemoval { open, close, test } => {
                if close.is_none() && !matches!(test, ContentTest::Unconditional) {
                    return Err(missing_close_marker(open));
                }
                test.validate()
            }
            // Key checks and compilation happen before any scanning.
            Self::TokenReplace(map) => token_replace("", map).map(drop),
            Self::ReplaceAll(pairs) => pairs
                .iter()
                .try_for_each(|(pattern, _)| compile(pattern).map(drop)),
            Self::FixMultiChars(class) => compile(&format!(r"(?s)({})\1+", class)).map(drop),
            Self::TrailingPattern(pattern) => {
                compile(&format!("^(.*)(?:{})$", pattern)).map(drop)
            }
            Self::AttachedCharStrip(_)
            | Self::BracketStrip { .. }
            | Self::UnmatchedBracketGuard(_)
            | Self::DuplicateCollapse
            | Self::BoundaryTrim(_)
            | Self::FixMultiSpaces
            | Self::AccentFold
            | Self::SurroundingQuotes => Ok(()),
        }
    }
}

impl Transform for Rule {
    fn apply(&self, s: &str) -> CanonResult<String> {
        match self {
            Self::CharFilter(pattern) => remove_chars(s, pattern),
            Self::AttachedCharStrip(ch) => remove_char_attached_to_word(s, ch),
            Self::MarkerRemoval { open, close, test } => test.remove(s, open, close.as_deref()),
            Self::BracketStrip {
                round,
                square,
                curly,
            } => Ok(remove_bracketed_content(s, *round, *square, *curly)),
            Self::UnmatchedBracketGuard(bracket) => Ok(remove_all_brackets_if_unmatched(s, *bracket)),
            Self::TokenReplace(map) => token_replace(s, map),
            Self::ReplaceAll(pairs) => replace_all(s, pairs),
            Self::DuplicateCollapse => Ok(remove_sequential_dupes(s)),
            Self::BoundaryTrim(tokens) => Ok(remove_from_start_or_end_if_match(s, tokens)),
            Self::FixMultiChars(class) => fix_multi_chars(s, class),
            Self::FixMultiSpaces => Ok(fix_multi_spaces(s)),
            Self::AccentFold => Ok(remove_accents_and_convert_to_upper(s)),
            Self::SurroundingQuotes => Ok(remove_surrounding_quotes(s)),
            Self::TrailingPattern(pattern) => remove_if_ends_with(s, pattern),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::CharFilter(_) => "char-filter",
            Self::AttachedCharStrip(_) => "attached-char-strip",
            Self::MarkerRemoval { test, .. } => match test {
                ContentTest::EqualsAny(_) => "marker-equals-any",
                ContentTest::StartsWithAny(_) => "marker-starts-with-any",
                ContentTest::ContainsWordLast(_) => "marker-contains-word-last",
                ContentTest::Unconditional => "marker-cut-from-last",
            },
            Self::BracketStrip { .. } => "bracket-strip",
            Self::UnmatchedBracketGuard(_) => "unmatched-bracket-guard",
            Self::TokenReplace(_) => "token-replace",
            Self::ReplaceAll(_) => "replace-all",
            Self::DuplicateCollapse => "duplicate-collapse",
            Self::BoundaryTrim(_) => "boundary-trim",
            Self::FixMultiChars(_) => "fix-multi-chars",
            Self::FixMultiSpaces => "fix-multi-spaces",
            Self::AccentFold => "accent-fold",
            Self::SurroundingQuotes => "surrounding-quotes",
            Self::TrailingPattern(_) => "trailing-pattern",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_rule_equals_any() {
        let rule = Rule::brackets(
            Bracket::Round,
            ContentTest::EqualsAny(MatchSpec::literals(["LIVE", "MIX"])),
        );
        assert_eq!(rule.apply("(MIX) FOO (MIX)").unwrap(), "FOO");
        assert_eq!(rule.name(), "marker-equals-any");
    }

    #[test]
    fn test_cut_from_last() {
        let rule = Rule::cut_from_last(" - ");
        assert_eq!(rule.apply("EXODUS - LIVE - 1977").unwrap(), "EXODUS - LIVE");
        assert_eq!(rule.apply("EXODUS").unwrap(), "EXODUS");
    }

    #[test]
    fn test_missing_close_marker_is_configuration_error() {
        let rule = Rule::MarkerRemoval {
            open: "(".to_string(),
            close: None,
            test: ContentTest::EqualsAny(MatchSpec::literals(["LIVE"])),
        };
        assert!(rule.validate().unwrap_err().is_configuration());
        assert!(rule.apply("FOO (LIVE)").unwrap_err().is_configuration());
    }

    #[test]
    fn test_validate_reports_bad_patterns() {
        assert!(Rule::CharFilter("[unclosed".to_string()).validate().is_err());
        assert!(Rule::FixMultiChars("(".to_string()).validate().is_err());
        assert!(Rule::token_replace([("A", "1"), ("A", "2")]).validate().is_err());
        assert!(Rule::FixMultiChars(r"[!?]".to_string()).validate().is_ok());
        assert!(Rule::DuplicateCollapse.validate().is_ok());
    }

    #[test]
    fn test_boundary_trim_rule() {
        let rule = Rule::boundary_trim(["&", "AND"]);
        assert_eq!(rule.apply("& FOO &").unwrap(), "FOO");
        // One token per end per application.
        assert_eq!(rule.apply("& AND FOO").unwrap(), "AND FOO");
    }

    #[test]
    fn test_attached_char_strip() {
        let rule = Rule::AttachedCharStrip("'".to_string());
        assert_eq!(rule.apply("BLOWIN' IN THE WIND").unwrap(), "BLOWIN IN THE WIND");
        assert_eq!(rule.apply("ROCK 'N' ROLL").unwrap(), "ROCK N ROLL");
        assert_eq!(rule.apply("WHAT'S GOING ON").unwrap(), "WHAT'S GOING ON");
        assert_eq!(rule.name(), "attached-char-strip");
        assert!(Rule::AttachedCharStrip(String::new()).validate().unwrap_err().is_configuration());
    }
}
