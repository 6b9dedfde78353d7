//! Catalog title canonicalization CLI.
//!
//! Thin command-line front end over the library: normalizes titles with the
//! catalog preset pipeline and scores pairs of titles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

use catalog_canon::pipeline::presets;
use catalog_canon::similarity::{levenshtein_distance, longest_common_substring, similarity_percent};
use catalog_canon::Pipeline;

/// Catalog Title Canonicalizer
///
/// Reduces free-form catalog titles to a canonical form and scores how
/// close two titles are.
#[derive(Parser)]
#[command(name = "canon")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log every rule that rewrites a title (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize titles, one result per line
    Normalize {
        /// Titles to canonicalize
        #[arg(value_name = "TITLE")]
        titles: Vec<String>,

        /// Read titles from a file, one per line
        #[arg(short, long, value_name = "FILE", conflicts_with = "titles")]
        input: Option<PathBuf>,
    },

    /// Print the similarity percentage of two titles
    Similarity {
        a: String,
        b: String,
    },

    /// Print the longest common substring of two titles
    Lcs {
        a: String,
        b: String,
    },
}

/// Normalization command handler.
struct NormalizeHandler {
    pipeline: Pipeline,
}

impl NormalizeHandler {
    /// Creates a handler with the catalog title preset.
    fn new() -> Result<Self> {
        let pipeline = presets::catalog_titles();
        pipeline
            .validate()
            .with_context(|| "Preset pipeline is misconfigured")?;
        Ok(Self { pipeline })
    }

    /// Canonicalizes every title and writes one line per title.
    fn normalize<I, W>(&self, titles: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = String>,
        W: Write,
    {
        for (line, title) in titles.into_iter().enumerate() {
            let canonical = self
                .pipeline
                .apply(&title)
                .with_context(|| format!("Failed to normalize title {}: {:?}", line + 1, title))?;
            writeln!(out, "{}", canonical)?;
        }
        Ok(())
    }
}

/// Reads non-blank lines from a file.
fn read_titles(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(non_blank_lines(content.lines().map(str::to_string)))
}

fn non_blank_lines(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Normalize { titles, input } => {
            let handler = NormalizeHandler::new()?;
            let titles = match (input, titles.is_empty()) {
                (Some(path), _) => read_titles(&path)?,
                (None, false) => titles,
                (None, true) => {
                    let lines = io::stdin()
                        .lock()
                        .lines()
                        .collect::<io::Result<Vec<_>>>()
                        .with_context(|| "Failed to read titles from stdin")?;
                    non_blank_lines(lines)
                }
            };
            handler.normalize(titles, &mut out)?;
        }
        Commands::Similarity { a, b } => {
            let percent = similarity_percent(&a, &b)
                .with_context(|| "Similarity could not be computed")?;
            tracing::debug!(distance = levenshtein_distance(&a, &b), "scored pair");
            writeln!(out, "{}", percent)?;
        }
        Commands::Lcs { a, b } => {
            writeln!(out, "{}", longest_common_substring(&a, &b))?;
        }
    }

    Ok(())
}
