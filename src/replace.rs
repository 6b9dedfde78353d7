//! Token and character replacement, whitespace and accent normalization.

use crate::error::{CanonError, CanonResult};
use crate::pattern::{
    compile, ends_with_any, escape_literal, full_match, replace_all_regex, starts_with_any,
    MatchSpec,
};
use crate::tokenize::last_word;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collapses runs of spaces to one space and trims both ends.
///
/// Only the space character is collapsed; tabs and newlines inside the
/// string are kept.
pub fn fix_multi_spaces(s: &str) -> String {
    static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(" +").expect("Valid regex"));
    SPACES.replace_all(s, " ").trim().to_string()
}

/// Collapses runs of two or more identical matches of `class` to one.
///
/// A string made up (almost) entirely of the repeated character is left
/// alone, so `???` stays `???` while `FOO???` becomes `FOO?`.
///
/// # Examples
///
/// ```
/// use catalog_canon::replace::fix_multi_chars;
///
/// assert_eq!(fix_multi_chars("FOO????", r"\?").unwrap(), "FOO?");
/// assert_eq!(fix_multi_chars("???", r"\?").unwrap(), "???");
/// ```
pub fn fix_multi_chars(s: &str, class: &str) -> CanonResult<String> {
    if s.chars().count() <= 1 {
        return Ok(s.to_string());
    }
    let remainder = replace_all_regex(s, class, "")?;
    if remainder.trim().chars().count() <= 1 {
        return Ok(s.to_string());
    }
    replace_all_regex(s, &format!(r"(?s)({})\1+", class), "${1}")
}

/// Deletes every match of `pattern`, then collapses spaces.
pub fn remove_chars(s: &str, pattern: &str) -> CanonResult<String> {
    Ok(fix_multi_spaces(&replace_all_regex(s, pattern, "")?))
}

/// Deletes everything but ASCII letters and digits.
pub fn remove_non_alphanumeric(s: &str) -> String {
    static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-zA-Z0-9]").expect("Valid regex"));
    NON_ALNUM.replace_all(s, "").into_owned()
}

/// Deletes everything but ASCII letters, digits and spaces.
pub fn remove_non_alphanumeric_keep_spaces(s: &str) -> String {
    static NON_ALNUM_SPACE: Lazy<Regex> =
        Lazy::new(|| Regex::new("[^a-zA-Z0-9 ]").expect("Valid regex"));
    fix_multi_spaces(&NON_ALNUM_SPACE.replace_all(s, ""))
}

/// Deletes everything but ASCII letters, digits and the characters listed
/// in `keep` (written as character class members, e.g. `:'` or `\-`).
pub fn remove_non_alphanumeric_except(s: &str, keep: &str) -> CanonResult<String> {
    replace_all_regex(s, &format!("[^a-zA-Z0-9{}]", keep), "")
}

/// Replaces whole-word occurrences of the map's keys in one left-to-right
/// scan.
///
/// Keys are literals (bracket and quantifier characters are escaped) and
/// are tried longest first, so `BLOWIN'` wins over `BLOWIN` at the same
/// position. Replaced text is never re-scanned.
///
/// # Errors
///
/// Returns [`CanonError::Configuration`] when the map has an empty or
/// duplicate key, or when a matched token is not itself a key, which
/// happens when a key carries unescaped regex syntax such as `.`.
///
/// # Examples
///
/// ```
/// use catalog_canon::replace::token_replace;
///
/// let map = [("BREAK-A-WAY", "BREAKAWAY"), (" & ", " AND ")];
/// assert_eq!(token_replace("BREAK-A-WAY", &map).unwrap(), "BREAKAWAY");
/// assert_eq!(token_replace("BREAK A WAY", &map).unwrap(), "BREAK A WAY");
/// ```
pub fn token_replace<K, V>(s: &str, map: &[(K, V)]) -> CanonResult<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if map.is_empty() {
        return Ok(s.to_string());
    }

    let mut keys: Vec<&str> = Vec::with_capacity(map.len());
    let mut seen = HashSet::with_capacity(map.len());
    for (key, _) in map {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(CanonError::configuration(describe_keys(map), "empty key"));
        }
        if !seen.insert(key) {
            return Err(CanonError::configuration(
                describe_keys(map),
                format!("duplicate key '{}'", key),
            ));
        }
        keys.push(key);
    }
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let spec = MatchSpec::literals(keys);
    let re = compile(&spec.equals_any_regex())?;

    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for found in re.find_iter(s) {
        let found = found.map_err(|e| CanonError::configuration(describe_keys(map), e.to_string()))?;
        let token = found.as_str();
        let value = map
            .iter()
            .find(|(key, _)| key.as_ref() == token)
            .map(|(_, value)| value.as_ref())
            .ok_or_else(|| {
                CanonError::configuration(
                    describe_keys(map),
                    format!(
                        "matched '{}' which is not a key; keys may contain unescaped regex characters",
                        token
                    ),
                )
            })?;
        out.push_str(&s[last..found.start()]);
        out.push_str(value);
        last = found.end();
    }
    out.push_str(&s[last..]);
    Ok(out)
}

fn describe_keys<K: AsRef<str>, V>(map: &[(K, V)]) -> String {
    let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_ref()).collect();
    format!("[{}]", keys.join(", "))
}

/// Applies each `(pattern, replacement)` pair in order over the whole
/// current string.
///
/// Unlike [`token_replace`], later pairs see the output of earlier ones,
/// so the order of `pairs` matters. Patterns are regexes and replacements
/// may reference groups with `$1`.
pub fn replace_all<K, V>(s: &str, pairs: &[(K, V)]) -> CanonResult<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs.iter().try_fold(s.to_string(), |acc, (pattern, replacement)| {
        replace_all_regex(&acc, pattern.as_ref(), replacement.as_ref())
    })
}

/// Collapses immediately repeated words to one occurrence, ignoring ASCII
/// case: `FOO FOO GOOD` becomes `FOO GOOD`, `FOO GOOD FOO` is unchanged.
///
/// Only purely alphabetic words collapse, and the first occurrence's
/// spelling is kept.
pub fn remove_sequential_dupes(s: &str) -> String {
    static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Valid regex"));

    let words: Vec<regex::Match<'_>> = WORD.find_iter(s).collect();
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;
    let mut i = 0;

    while i < words.len() {
        let head = words[i];
        let mut run_end = i;
        if head.as_str().chars().all(|c| c.is_ascii_alphabetic()) {
            while let Some(next) = words.get(run_end + 1) {
                let gap = &s[words[run_end].end()..next.start()];
                let adjacent = !gap.is_empty() && gap.chars().all(char::is_whitespace);
                if adjacent && next.as_str().eq_ignore_ascii_case(head.as_str()) {
                    run_end += 1;
                } else {
                    break;
                }
            }
        }
        if run_end > i {
            out.push_str(&s[copied..head.end()]);
            copied = words[run_end].end();
        }
        i = run_end + 1;
    }

    out.push_str(&s[copied..]);
    out
}

/// Strips diacritics, upper-cases and collapses spaces. Blank input is
/// returned unchanged.
pub fn remove_accents_and_convert_to_upper(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    let stripped: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'Ł' => 'L',
            'ł' => 'l',
            other => other,
        })
        .collect();
    fix_multi_spaces(&stripped.to_uppercase())
}

/// Removes `token` from the start of `s`, unless `s` is no longer than it.
pub fn remove_if_starts_with_token(s: &str, token: &str) -> String {
    if s.len() <= token.len() {
        return s.to_string();
    }
    match s.strip_prefix(token) {
        Some(rest) => rest.trim().to_string(),
        None => s.to_string(),
    }
}

/// Removes single dots, keeping runs of two or more (`L.A.` becomes `LA`,
/// `SOME...` is unchanged).
pub fn remove_dots_if_not_consecutive(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 1 {
        return s.to_string();
    }
    let kept: String = chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let lone_dot = c == '.'
                && (i == 0 || chars[i - 1] != '.')
                && chars.get(i + 1).map_or(true, |&n| n != '.');
            !lone_dot
        })
        .map(|(_, &c)| c)
        .collect();
    kept.trim().to_string()
}

/// Removes a trailing match of `suffix` (a regex), then collapses spaces.
pub fn remove_if_ends_with(s: &str, suffix: &str) -> CanonResult<String> {
    let stripped = replace_all_regex(s, &format!("^(.*)(?:{})$", suffix), "${1}")?;
    Ok(fix_multi_spaces(&stripped))
}

/// Removes a trailing literal `suffix`; single characters are left alone.
pub fn remove_if_last_char_matches(s: &str, suffix: &str) -> String {
    if s.chars().count() <= 1 {
        return s.to_string();
    }
    s.strip_suffix(suffix).unwrap_or(s).to_string()
}

/// Drops the last character when the whole of `s` matches `pattern`.
pub fn remove_last_char_if_matches(s: &str, pattern: &str) -> CanonResult<String> {
    if s.chars().count() <= 1 || !full_match(pattern, s)? {
        return Ok(s.to_string());
    }
    let mut chopped = s.to_string();
    chopped.pop();
    Ok(chopped.trim().to_string())
}

/// Drops the first character when the whole of `s` matches `pattern`.
pub fn remove_if_first_char_matches(s: &str, pattern: &str) -> CanonResult<String> {
    if s.chars().count() <= 1 || !full_match(pattern, s)? {
        return Ok(s.to_string());
    }
    let mut chars = s.chars();
    chars.next();
    Ok(chars.as_str().trim().to_string())
}

/// Removes the last word of `s` when it is one of `values`.
pub fn remove_if_last_word<S: AsRef<str>>(s: &str, values: &[S]) -> String {
    match last_word(s) {
        Some(word) if values.iter().any(|v| v.as_ref() == word) => match s.rfind(word) {
            Some(index) => s[..index].trim().to_string(),
            None => s.to_string(),
        },
        _ => s.to_string(),
    }
}

/// Removes runs of `ch` glued to the start or end of a word (`'FOO`,
/// `FOO''`), keeping it inside words (`HER'S`) and when it stands alone.
pub fn remove_char_attached_to_word(s: &str, ch: &str) -> CanonResult<String> {
    let ch = escape_literal(ch);
    replace_all_regex(s, &format!(r"\B(?:{0})+\b|\b(?:{0})+\B", ch), "")
}

/// Cuts `s` at the first whole-word match of `spec`.
///
/// # Examples
///
/// ```
/// use catalog_canon::pattern::MatchSpec;
/// use catalog_canon::replace::remove_content_after_match;
///
/// let spec = MatchSpec::literals(["FT", "FEAT", "GREATEST HITS"]);
/// let out = remove_content_after_match("LIKE DREAMERS DO FT COURTNEY PINE", &spec).unwrap();
/// assert_eq!(out, "LIKE DREAMERS DO");
/// ```
pub fn remove_content_after_match(s: &str, spec: &MatchSpec) -> CanonResult<String> {
    if spec.is_empty() {
        return Ok(s.to_string());
    }
    let re = compile(&spec.equals_any_regex())?;
    let found = re
        .find(s)
        .map_err(|e| CanonError::configuration(spec.describe(), e.to_string()))?;
    let kept = found.map_or(s, |m| &s[..m.start()]);
    Ok(fix_multi_spaces(kept))
}

/// Removes a leading token that is one of `values`, then re-evaluates and
/// removes a trailing one. `& FOO &` becomes `FOO`.
///
/// A title consisting only of listed tokens is returned unchanged rather
/// than emptied.
pub fn remove_from_start_or_end_if_match<S: AsRef<str>>(s: &str, values: &[S]) -> String {
    if !(starts_with_any(s, values) || ends_with_any(s, values)) {
        return s.to_string();
    }
    let leading_trimmed = values
        .iter()
        .map(AsRef::as_ref)
        .filter(|v| starts_with_any(s, &[*v]))
        .max_by_key(|v| v.len())
        .map_or(s, |v| s[v.len()..].trim_start());
    let result = remove_if_last_word(leading_trimmed, values);
    if result.is_empty() {
        s.to_string()
    } else {
        result
    }
}

/// Restores the apostrophe in decade-style plurals: `B-52S` → `B-52'S`.
pub fn add_apostrophe_if_missing(s: &str) -> String {
    let mut tail = s.chars().rev();
    match (tail.next(), tail.next()) {
        (Some('S'), Some(d)) if d.is_ascii_digit() => {
            format!("{}'S", &s[..s.len() - 1])
        }
        _ => s.to_string(),
    }
}
