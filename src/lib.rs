//! Text canonicalization and similarity scoring for catalog titles.
//!
//! Free-form music catalog titles arrive with decorations that hide their
//! identity: release qualifiers in brackets, spelling variants, repeated
//! words, stray punctuation. This library reduces them to a canonical form
//! and scores how close two canonical forms are.
//!
//! # Features
//!
//! - **Pattern Predicates**: Whole-word containment, equality and prefix tests
//! - **Marker Removal**: Conditional deletion of bracketed or delimited spans
//! - **Token Replacement**: Single-scan, longest-key-first word mapping
//! - **Similarity**: Levenshtein percentage and longest common substring
//! - **Pipelines**: Ordered, validated sequences of stateless rules
//!
//! # Architecture
//!
//! - [`pattern`]: Match specifications, regex construction and predicates
//! - [`tokenize`]: Splitting and word helpers
//! - [`markers`]: Marker, bracket and quote removal
//! - [`replace`]: Token, character, whitespace and accent rewriting
//! - [`similarity`]: Distance and common-substring scoring
//! - [`pipeline`]: Rules, pipelines and presets
//! - [`error`]: Error types
//!
//! # Quick Start
//!
//! ```
//! use catalog_canon::pipeline::presets;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = presets::catalog_titles();
//! assert_eq!(pipeline.apply("Exodus (Live)")?, "EXODUS");
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Custom Pipeline
//!
//! ```
//! use catalog_canon::{Bracket, ContentTest, MatchSpec, Pipeline, Rule};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::from_rules(vec![
//!     Rule::AccentFold,
//!     Rule::brackets(Bracket::Round, ContentTest::EqualsAny(MatchSpec::literals(["MIX"]))),
//!     Rule::DuplicateCollapse,
//! ])?;
//! assert_eq!(pipeline.apply("Café Café (mix)")?, "CAFE");
//! # Ok(())
//! # }
//! ```
//!
//! ## Similarity
//!
//! ```
//! use catalog_canon::similarity::{longest_common_substring, similarity_percent};
//!
//! assert_eq!(similarity_percent("BIGGER", "BIG").unwrap(), 50);
//! assert_eq!(longest_common_substring("TAKE ME OUT", "TAKE ME OUTSIDE"), "TAKE ME OUT");
//! ```

// Public API
pub mod error;
pub mod markers;
pub mod pattern;
pub mod pipeline;
pub mod replace;
pub mod similarity;
pub mod tokenize;

// Re-exports for convenient access
pub use error::{CanonError, CanonResult};
pub use markers::Bracket;
pub use pattern::{MatchSpec, Pattern};
pub use pipeline::{ContentTest, Pipeline, PipelineReport, Rule, Transform};
