//! Similarity scoring between an original title and a candidate.
//!
//! Lengths and distances are counted in `char`s, not bytes.

use crate::error::{CanonError, CanonResult};

/// Levenshtein edit distance between `a` and `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Percentage closeness of `a` and `b`, truncated to an integer in
/// `0..=100`: `(max_len - distance) * 100 / max_len`.
///
/// The division is exact integer arithmetic. Computing the ratio as a float
/// first and truncating can land one point lower when the ratio has no exact
/// binary form: 57 of 100 gives `0.57 * 100.0 == 56.99..`, truncated to 56,
/// where this returns 57.
///
/// # Errors
///
/// Returns [`CanonError::InvalidInput`] when both strings are empty, where
/// the score is undefined.
///
/// # Examples
///
/// ```
/// use catalog_canon::similarity::similarity_percent;
///
/// assert_eq!(similarity_percent("BIGGER", "BIG").unwrap(), 50);
/// assert_eq!(similarity_percent("MC SAR!", "MC SAR").unwrap(), 85);
/// ```
pub fn similarity_percent(a: &str, b: &str) -> CanonResult<u8> {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return Err(CanonError::invalid_input(
            "a, b",
            "similarity of two empty strings is undefined",
        ));
    }
    let distance = levenshtein_distance(a, b);
    let percent = (max_len - distance) * 100 / max_len;
    // distance never exceeds max_len, so percent is within 0..=100
    Ok(percent as u8)
}

/// Longest contiguous substring shared by `a` and `b`.
///
/// Classic dynamic-programming table over `a` × `b`. When several spans
/// share the maximal length, the one ending last in `a` is returned: a span
/// that ties the current best with a different start in `a` replaces it,
/// while a span that merely grows the tracked one is extended in place.
/// Either input being empty yields an empty string.
///
/// # Examples
///
/// ```
/// use catalog_canon::similarity::longest_common_substring;
///
/// assert_eq!(longest_common_substring("TAKE ME OUT", "TAKE ME OUTSIDE"), "TAKE ME OUT");
/// assert_eq!(longest_common_substring("ABXCD", "CDYAB"), "CD");
/// ```
pub fn longest_common_substring(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return String::new();
    }

    // Two rolling rows of the table; row[j] is the length of the common
    // suffix of a[..=i] and b[..=j].
    let mut prev = vec![0usize; b.len()];
    let mut row = vec![0usize; b.len()];
    let mut max_len = 0;
    let mut best_start = 0;
    let mut best = String::new();

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            if ca != cb {
                row[j] = 0;
                continue;
            }
            row[j] = if j == 0 { 1 } else { prev[j - 1] + 1 };
            let len = row[j];
            let start = i + 1 - len;

            if len > max_len {
                max_len = len;
                // Same start means `best` is a[start..i] and grows by one.
                if start == best_start {
                    best.push(ca);
                } else {
                    best_start = start;
                    best = a[start..=i].iter().collect();
                }
            } else if len == max_len && start != best_start {
                best_start = start;
                best = a[start..=i].iter().collect();
            }
        }
        std::mem::swap(&mut prev, &mut row);
    }

    best
}
