//! Predicate and tokenizer tests.
//!
//! Covers raw versus whole-word containment, whole-token boundary tests and
//! separator-based splitting of credit strings.

use catalog_canon::pattern::{
    any_contains, contains_any, contains_any_word, ends_with_any, equals_any, equals_any_word,
    escape_if_contains_regex, find_first_contained, starts_with_any, MatchSpec,
};
use catalog_canon::tokenize::{
    break_by_space, count_words, first_token, first_word, first_words, join_as_string,
    last_word, tokenize,
};

mod containment {
    use super::*;

    #[test]
    fn test_contains_any_is_raw_substring() {
        assert!(contains_any("THERE IS A FOO", &["FOO"]));
        assert!(contains_any("THERE IS A FOOL", &["FOO"]));
        assert!(contains_any("FOOLISH", &["FOO"]));
        assert!(contains_any("IT'S BLOWING' OUT THERE", &["BLOWING'"]));
        assert!(!contains_any("BAR", &["FOO"]));
    }

    #[test]
    fn test_contains_any_word_needs_boundaries() {
        let spec = MatchSpec::literals(["FOO", "BOO"]);
        assert!(!contains_any_word("FOOL", &spec).unwrap());
        assert!(!contains_any_word("THERE IS A FOOL SOMEWHERE", &spec).unwrap());
        assert!(contains_any_word("FOO LOO", &spec).unwrap());
        assert!(contains_any_word("THERE IS A FOO", &spec).unwrap());
        assert!(contains_any_word("THERE IS A FOO SOMEWHERE", &spec).unwrap());
        assert!(contains_any_word("FEAT BLAST", &MatchSpec::literals(["FEAT"])).unwrap());
    }

    #[test]
    fn test_contains_any_word_empty_spec() {
        assert!(!contains_any_word("ANYTHING", &MatchSpec::default()).unwrap());
    }

    #[test]
    fn test_any_contains() {
        assert!(any_contains(&["SOME FOOLISH", "BOO"], "FOO"));
        assert!(any_contains(&["SOME FOO", "BOO"], "FOO"));
        assert!(!any_contains(&["FOO", "BOO"], "ROO"));
        assert!(any_contains(&["FOO/HOO", "BOO"], "/"));
        assert!(!any_contains(&["FOO", "BOO"], "/"));
    }

    #[test]
    fn test_find_first_contained() {
        assert_eq!(find_first_contained("THERE IS A FOO", &["FOO", "BOO"]), Some("FOO"));
        assert_eq!(find_first_contained("THERE IS A LOO", &["FOO", "BOO"]), None);
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_equals_any() {
        assert!(equals_any("FOO", &["FOO", "BOO"]));
        assert!(!equals_any("FOOL", &["FOO", "BOO"]));
        assert!(!equals_any("MOO AND FOO", &["FOO", "BOO"]));
    }

    #[test]
    fn test_equals_any_word_accepts_regex_fragments() {
        let spec = MatchSpec::regexes(["FOO", r"VOL\s*\d"]);
        assert!(equals_any_word("VOL 1", &spec).unwrap());
        assert!(equals_any_word("VOL2", &spec).unwrap());
        assert!(equals_any_word("FOO", &spec).unwrap());
        assert!(!equals_any_word("FOOL", &spec).unwrap());
        assert!(!equals_any_word("FOO BAR", &spec).unwrap());
    }

    #[test]
    fn test_literal_with_metacharacters_matches_verbatim() {
        let spec = MatchSpec::literals(["C+C"]);
        assert!(equals_any_word("C+C", &spec).unwrap());
        assert!(!equals_any_word("CCC", &spec).unwrap());
        assert_eq!(escape_if_contains_regex("WHY?"), r"WHY\?");
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn test_starts_with_any_whole_token() {
        assert!(starts_with_any("THERE IS A FOO", &["FOO", "THERE"]));
        assert!(starts_with_any("FOO", &["FOO"]));
        assert!(!starts_with_any("THERE IS A FOOL", &["FOO"]));
        assert!(!starts_with_any("FOOL AND BOO", &["FOO"]));
    }

    #[test]
    fn test_ends_with_any_whole_token() {
        assert!(ends_with_any("THERE IS A FOO", &["FOO"]));
        assert!(!ends_with_any("THERE IS A FOOL", &["FOO"]));
        assert!(!ends_with_any("FOO AND BOO", &["FOO"]));
        assert!(!ends_with_any("FOO AND ABOO", &["BOO"]));
    }

    #[test]
    fn test_empty_values_never_match() {
        assert!(!starts_with_any("FOO", &[""]));
        assert!(!ends_with_any("FOO", &[""]));
    }
}

mod tokenizer {
    use super::*;

    const SEPARATOR: &str = r"\b(FT|FEAT|FEATURING|AND)\b";

    #[test]
    fn test_tokenize_strips_abbreviation_dots() {
        assert_eq!(
            tokenize("SOME BAND FT. BOO", SEPARATOR).unwrap(),
            vec!["SOME BAND", "BOO"]
        );
        assert_eq!(
            tokenize("SOME BAND FEAT. BOO AND HOO", SEPARATOR).unwrap(),
            vec!["SOME BAND", "BOO", "HOO"]
        );
    }

    #[test]
    fn test_tokenize_drops_blank_fragments() {
        assert_eq!(tokenize("FT BOO", SEPARATOR).unwrap(), vec!["BOO"]);
        assert_eq!(tokenize("DEAD AND ALIVE", SEPARATOR).unwrap(), vec!["DEAD", "ALIVE"]);
        assert_eq!(tokenize("DEAD & ALIVE", SEPARATOR).unwrap(), vec!["DEAD & ALIVE"]);
    }

    #[test]
    fn test_tokenize_bad_separator() {
        assert!(tokenize("FOO", "(").unwrap_err().is_configuration());
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("SOME BAND FT. BOO", SEPARATOR).unwrap(), "SOME BAND");
        assert_eq!(first_token("NO SEPARATOR", SEPARATOR).unwrap(), "NO SEPARATOR");
    }

    #[test]
    fn test_word_helpers() {
        assert_eq!(break_by_space("A  AND B"), vec!["A", "AND", "B"]);
        assert_eq!(join_as_string(&["A", "AND", "B"]), "A AND B");
        assert_eq!(join_as_string(&[" A "]), "A");
        assert_eq!(count_words("ONE TWO  THREE"), 3);
        assert_eq!(count_words("   "), 0);
        assert_eq!(first_word("ONE TWO"), Some("ONE"));
        assert_eq!(last_word("ONE TWO"), Some("TWO"));
        assert_eq!(last_word(""), None);
    }

    #[test]
    fn test_first_words() {
        assert_eq!(first_words("ONE TWO THREE", 2), "ONE TWO");
        assert_eq!(first_words("ONE TWO THREE", 3), "ONE TWO THREE");
        assert_eq!(first_words("ONE TWO", 5), "ONE TWO");
    }
}
