//! Ready-made pipelines and the vocabularies they are built from.

use super::{ContentTest, Pipeline, Rule};
use crate::markers::Bracket;
use crate::pattern::MatchSpec;

/// Release qualifiers that carry no identity of the recording itself and
/// are dropped when they appear as a bracketed annotation.
pub const TITLE_QUALIFIERS: &[&str] = &[
    "12\"",
    "7\"",
    "ACOUSTIC",
    "ANNIVERSARY",
    "BONUS",
    "CONCERT",
    "DEMO",
    "DEMOS",
    "EDIT",
    "EP",
    "EPIC",
    "FAMOUS BY",
    "FEAT",
    "FEATURING",
    "FT",
    "GROOVE",
    "INSTRUMENTAL",
    "INTERLUDE",
    "INTRODUCING",
    "KARAOKE",
    "LIVE",
    "MEDLEY",
    "MELLOSMOOTHE",
    "MIX",
    "MIXED",
    "MONO",
    "ORIGINAL",
    "PERFORMED",
    "PRESENTS",
    "RECORDED",
    "RECORDING",
    "RELEASE",
    "REMASTER",
    "REMASTERED",
    "REMIX",
    "REMIXED",
    "REMIXES",
    "REPRISE",
    "SOUNDTRACK",
    "STEREO",
    "STYLE OF",
    "TITLES",
    "TRIBUTE",
    "VERSION",
    "VOCAL",
];

/// Spelling variants folded to one canonical form. Keys never carry a
/// word-edge apostrophe since those are stripped before renaming.
pub const TITLE_TOKEN_RENAMES: &[(&str, &str)] = &[
    (" & ", " AND "),
    ("A M", "A.M."),
    ("B THERE", "BE THERE"),
    ("BLOWIN", "BLOWING"),
    ("BREAK-A-WAY", "BREAKAWAY"),
    ("CMON", "C'MON"),
    ("COREVETTE", "CORVETTE"),
    ("DO YA", "DO YOU"),
    ("DREAMIN", "DREAMING"),
    ("FEELIN", "FEELING"),
    ("LOVER GIRL", "LOVERGIRL"),
    ("LOVIN", "LOVING"),
    ("PYT", "PRETTY YOUNG THING"),
    ("ROCK & ROLL", "ROCK AND ROLL"),
    ("ROCK N ROLL", "ROCK AND ROLL"),
    ("SOMETHIN", "SOMETHING"),
    ("WANNA", "WANT TO"),
    ("WENDAL", "WENDEL"),
    ("WHATS", "WHAT'S"),
];

/// Conjunctions that may dangle at either end once annotations are gone.
pub const DANGLING_CONJUNCTIONS: &[&str] = &["&", "AND"];

/// Canonicalization pipeline for catalog titles.
///
/// Folds case and accents, drops word-edge apostrophes, resolves spelling
/// variants, removes qualifier annotations and repairs bracket damage before
/// tidying repeats and spacing. Runs until stable so that stacked
/// conjunctions and nested qualifier annotations are fully removed.
pub fn catalog_titles() -> Pipeline {
    let qualifiers = MatchSpec::literals(TITLE_QUALIFIERS.iter().copied());

    Pipeline::new()
        .with_rule(Rule::AccentFold)
        .with_rule(Rule::AttachedCharStrip("'".to_string()))
        .with_rule(Rule::token_replace(TITLE_TOKEN_RENAMES.iter().copied()))
        .with_rule(Rule::SurroundingQuotes)
        .with_rule(Rule::brackets(
            Bracket::Round,
            ContentTest::EqualsAny(qualifiers.clone()),
        ))
        .with_rule(Rule::brackets(
            Bracket::Square,
            ContentTest::EqualsAny(qualifiers.clone()),
        ))
        .with_rule(Rule::brackets(
            Bracket::Round,
            ContentTest::ContainsWordLast(qualifiers),
        ))
        .with_rule(Rule::UnmatchedBracketGuard(Bracket::Round))
        .with_rule(Rule::UnmatchedBracketGuard(Bracket::Square))
        .with_rule(Rule::FixMultiChars("[!?]".to_string()))
        .with_rule(Rule::DuplicateCollapse)
        .with_rule(Rule::boundary_trim(DANGLING_CONJUNCTIONS.iter().copied()))
        .with_rule(Rule::FixMultiSpaces)
        .until_stable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_titles_is_valid() {
        assert!(catalog_titles().validate().is_ok());
    }

    #[test]
    fn test_catalog_titles() {
        let pipeline = catalog_titles();
        assert_eq!(
            pipeline.apply("Young Blood (Good) (Live EP)").unwrap(),
            "YOUNG BLOOD (GOOD)"
        );
        assert_eq!(
            pipeline.apply("Rock 'n' Roll Music (Live)").unwrap(),
            "ROCK AND ROLL MUSIC"
        );
        assert_eq!(pipeline.apply("Motörhead [Remix]").unwrap(), "MOTORHEAD");
        assert_eq!(pipeline.apply("FOO (BAR").unwrap(), "FOO BAR");
        assert_eq!(pipeline.apply("Blowin' In The Wind").unwrap(), "BLOWING IN THE WIND");
        assert_eq!(pipeline.apply("'Wanna' & Friends").unwrap(), "WANT TO AND FRIENDS");
    }

    #[test]
    fn test_renames_have_no_edge_apostrophes() {
        for (key, _) in TITLE_TOKEN_RENAMES {
            let trimmed = key.trim();
            assert!(
                !trimmed.starts_with('\'') && !trimmed.ends_with('\''),
                "unreachable rename key {key:?}"
            );
        }
    }

    #[test]
    fn test_catalog_titles_is_idempotent() {
        let pipeline = catalog_titles();
        for title in [
            "Young Blood (Good) (Live EP)",
            "'Wanna' & Friends",
            "NEW NEW YORK!!",
            "& AND FOO",
            "FOO AND &",
            "FOO (BAR LIVE) (BAZ LIVE)",
        ] {
            let once = pipeline.apply(title).unwrap();
            assert_eq!(pipeline.apply(&once).unwrap(), once, "not idempotent for {title}");
        }
    }
}
