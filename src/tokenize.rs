//! Tokenizer and word helpers.
//!
//! Splitting on a caller-supplied separator regex is used to break credits
//! like `SOME BAND FT. BOO` into their parts; the whitespace helpers work on
//! already-canonicalized titles.

use crate::error::{CanonError, CanonResult};
use crate::pattern::compile;

/// Splits `s` on every match of `separator`, dropping blank fragments.
///
/// A fragment that begins with `.` loses that first dot, which cleans up
/// abbreviation separators (`FT.`, `FEAT.`) that leave `. BOO` behind.
///
/// # Examples
///
/// ```
/// use catalog_canon::tokenize::tokenize;
///
/// let parts = tokenize("SOME BAND FT. BOO", r"\b(FT|FEAT)\b").unwrap();
/// assert_eq!(parts, vec!["SOME BAND", "BOO"]);
/// ```
pub fn tokenize(s: &str, separator: &str) -> CanonResult<Vec<String>> {
    Ok(split_fragments(s, separator)?
        .into_iter()
        .filter(|fragment| !fragment.trim().is_empty())
        .map(strip_leading_dot)
        .map(|fragment| fragment.trim().to_string())
        .collect())
}

fn strip_leading_dot(fragment: &str) -> &str {
    if fragment.len() > 1 {
        fragment.strip_prefix('.').unwrap_or(fragment)
    } else {
        fragment
    }
}

/// Raw fragments between separator matches, blanks included.
fn split_fragments<'a>(s: &'a str, separator: &str) -> CanonResult<Vec<&'a str>> {
    let re = compile(separator)?;
    let mut fragments = Vec::new();
    let mut last = 0;
    for found in re.find_iter(s) {
        let found = found.map_err(|e| {
            CanonError::configuration(format!("pattern '{}'", separator), e.to_string())
        })?;
        fragments.push(&s[last..found.start()]);
        last = found.end();
    }
    fragments.push(&s[last..]);
    Ok(fragments)
}

/// Splits `s` on runs of whitespace.
pub fn break_by_space(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Joins tokens with single spaces; a lone token is returned trimmed.
pub fn join_as_string<S: AsRef<str>>(tokens: &[S]) -> String {
    match tokens {
        [single] => single.as_ref().trim().to_string(),
        _ => tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Number of whitespace-delimited words; zero for blank input.
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}

/// First word of `s`, if any.
pub fn first_word(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

/// Last word of `s`, if any.
pub fn last_word(s: &str) -> Option<&str> {
    s.split_whitespace().next_back()
}

/// The first `count` words of `s`.
pub fn first_words_list(s: &str, count: usize) -> Vec<&str> {
    s.split_whitespace().take(count).collect()
}

/// The first `count` words of `s` joined by spaces, or `s` itself when it
/// has no more than `count` words.
pub fn first_words(s: &str, count: usize) -> String {
    if count >= count_words(s) {
        s.to_string()
    } else {
        first_words_list(s, count).join(" ")
    }
}

/// The first fragment of `s` split on `separator`, trimmed.
///
/// Returns `s` trimmed when every fragment is empty.
pub fn first_token(s: &str, separator: &str) -> CanonResult<String> {
    let fragments = split_fragments(s, separator)?;
    if fragments.iter().all(|f| f.is_empty()) {
        return Ok(s.trim().to_string());
    }
    Ok(fragments[0].trim().to_string())
}
