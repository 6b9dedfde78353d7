//! Test fixtures: vocabularies and sample titles.

use anyhow::Result;
use catalog_canon::MatchSpec;
use std::fs;
use std::path::{Path, PathBuf};

/// Short qualifier list used by marker removal tests.
pub fn qualifiers() -> MatchSpec {
    MatchSpec::literals([
        "LIVE", "MIX", "MEDLEY", "FT", "EP", "EPIC", "REMIX", "VERSION", "BONUS",
    ])
}

/// A small rename map with overlapping and punctuated keys.
pub fn rename_map() -> Vec<(&'static str, &'static str)> {
    vec![
        (" & ", " AND "),
        ("A M", "A.M."),
        ("BREAK-A-WAY", "BREAKAWAY"),
        ("C+C", "C AND C"),
        ("DO YA", "DO YOU"),
        ("DO", "DONE"),
        ("WANNA", "WANT TO"),
    ]
}

/// Raw titles as they arrive from catalog sources.
pub const SAMPLE_TITLES: &[&str] = &[
    "Young Blood (Good) (Live EP)",
    "Rock 'n' Roll Music (Live)",
    "Night Boat To Cairo [Remix]",
    "You Wear It Well (Live - Leicester",
    "Motörhead",
    "New New York!!",
    "& Friends &",
    "Sad Café (Bonus) (Demo)",
    "\"Heroes\"",
    "WANNA BE STARTIN' SOMETHIN'",
    "FOO (BAR",
    "",
];

/// Writes one title per line to `dir/name` and returns the path.
pub fn write_titles_file(dir: &Path, name: &str, titles: &[&str]) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, titles.join("\n"))?;
    Ok(path)
}
